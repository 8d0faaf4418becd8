use crate::game::{Direction, GameSession, Snapshot, TickOutcome};
use log::{error, info};
use rand::Rng;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Runs a [`GameSession`] on its own thread at a fixed tick rate.
///
/// All access from other threads goes through the methods here, each of which
/// holds the session lock only for as long as it takes to read or write.
#[derive(Debug)]
pub(crate) struct Engine<R> {
    session: Arc<Mutex<GameSession<R>>>,
    /// Dropping this stops the tick thread
    shutdown: Option<Sender<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl<R: Rng + Send + 'static> Engine<R> {
    /// Spawn the tick thread.  The first tick happens one `period` from now.
    pub(crate) fn start(session: GameSession<R>, period: Duration) -> io::Result<Engine<R>> {
        let session = Arc::new(Mutex::new(session));
        let (shutdown, signal) = mpsc::channel();
        let shared = Arc::clone(&session);
        let ticker = thread::Builder::new()
            .name(String::from("tick"))
            .spawn(move || run_ticks(&shared, &signal, period))?;
        info!("Tick thread started with period {period:?}");
        Ok(Engine {
            session,
            shutdown: Some(shutdown),
            ticker: Some(ticker),
        })
    }

    pub(crate) fn restart(&self) {
        let score = self.lock().restart();
        info!("Restarted at score {score}");
    }
}

impl<R> Engine<R> {
    /// Overwrite the pending direction
    pub(crate) fn steer(&self, direction: Direction) {
        self.lock().steer(direction);
    }

    pub(crate) fn toggle_pause(&self) -> bool {
        let paused = self.lock().toggle_pause();
        info!("{}", if paused { "Paused" } else { "Resumed" });
        paused
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Stop the tick thread and wait for it to finish.  Calling this more than
    /// once is harmless.
    pub(crate) fn stop(&mut self) {
        drop(self.shutdown.take());
        if let Some(ticker) = self.ticker.take() {
            if ticker.join().is_err() {
                error!("Tick thread panicked");
            } else {
                info!("Tick thread stopped");
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameSession<R>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> Drop for Engine<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_ticks<R: Rng>(session: &Mutex<GameSession<R>>, shutdown: &Receiver<()>, period: Duration) {
    let mut deadline = Instant::now() + period;
    loop {
        let wait = deadline.saturating_duration_since(Instant::now());
        match shutdown.recv_timeout(wait) {
            Err(RecvTimeoutError::Timeout) => {
                // Log only after the guard is dropped
                let outcome = session
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .tick();
                if let TickOutcome::Died(death) = outcome {
                    info!(
                        "Snake hit {} at {:?} on tick {}; length {}, final score {}",
                        death.obstacle, death.head, death.tick, death.length, death.score
                    );
                }
                deadline += period;
                let now = Instant::now();
                if deadline < now {
                    // Fell behind; don't try to catch up with a burst of ticks
                    deadline = now + period;
                }
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;
    const FOREVER: Duration = Duration::from_secs(3600);

    fn session() -> GameSession<ChaCha12Rng> {
        GameSession::new(
            GameSettings::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    #[test]
    fn ticks_on_its_own() {
        let mut engine = Engine::start(session(), Duration::from_millis(1)).unwrap();
        let began = Instant::now();
        while engine.snapshot().ticks < 5 {
            assert!(
                began.elapsed() < Duration::from_secs(10),
                "tick thread made no progress"
            );
            thread::sleep(Duration::from_millis(1));
        }
        engine.stop();
        let ticks = engine.snapshot().ticks;
        thread::sleep(Duration::from_millis(20));
        assert_eq!(engine.snapshot().ticks, ticks);
        engine.stop();
    }

    #[test]
    fn stop_does_not_wait_for_next_tick() {
        let mut engine = Engine::start(session(), FOREVER).unwrap();
        let began = Instant::now();
        engine.stop();
        assert!(began.elapsed() < Duration::from_secs(10));
        assert_eq!(engine.snapshot().ticks, 0);
    }

    #[test]
    fn steer_reaches_session() {
        let engine = Engine::start(session(), FOREVER).unwrap();
        engine.steer(Direction::Up);
        let _ = engine.lock().tick();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.direction, Direction::Up);
        assert_eq!(snapshot.body[0].y, 9);
    }

    #[test]
    fn paused_engine_does_not_tick() {
        let engine = Engine::start(session(), Duration::from_millis(1)).unwrap();
        assert!(engine.toggle_pause());
        let ticks = engine.snapshot().ticks;
        thread::sleep(Duration::from_millis(20));
        let snapshot = engine.snapshot();
        assert!(snapshot.paused);
        assert_eq!(snapshot.ticks, ticks);
        assert!(!engine.toggle_pause());
    }

    #[test]
    fn restart_resets_snake() {
        let engine = Engine::start(session(), FOREVER).unwrap();
        let initial = engine.snapshot().body;
        engine.steer(Direction::Down);
        let _ = engine.lock().tick();
        assert_ne!(engine.snapshot().body, initial);
        engine.restart();
        assert_eq!(engine.snapshot().body, initial);
    }

    #[test]
    fn keeps_ticking_through_deaths() {
        let cramped = GameSession::new(
            GameSettings {
                width: 4,
                height: 3,
                initial_length: 1,
                ..GameSettings::default()
            },
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        let mut engine = Engine::start(cramped, Duration::from_millis(1)).unwrap();
        let began = Instant::now();
        while engine.snapshot().ticks < 10 {
            assert!(
                began.elapsed() < Duration::from_secs(10),
                "tick thread made no progress"
            );
            thread::sleep(Duration::from_millis(1));
        }
        assert!(engine.toggle_pause());
        let snapshot = engine.snapshot();
        assert!(snapshot.body.len() <= 2);
        assert!(snapshot.score <= 1);
        engine.stop();
    }
}
