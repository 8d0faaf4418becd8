use crate::command::Command;
use crate::consts;
use crate::engine::Engine;
use crate::game::Direction;
use crossterm::event::{poll, read, Event};
use log::info;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The input & drawing side of the program.  The simulation itself advances
/// on the engine's thread; this loop only redraws and forwards key presses.
#[derive(Debug)]
pub(crate) struct App<R> {
    engine: Engine<R>,
    quitting: bool,
}

impl<R: Rng + Send + 'static> App<R> {
    pub(crate) fn new(engine: Engine<R>) -> App<R> {
        App {
            engine,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            let snapshot = self.engine.snapshot();
            terminal.draw(|frame| frame.render_widget(&snapshot, frame.area()))?;
            if poll(consts::FRAME_PERIOD)? {
                self.handle_event(read()?);
            }
        }
        self.engine.stop();
        let snapshot = self.engine.snapshot();
        info!(
            "Quitting after {} ticks; best score {}",
            snapshot.ticks, snapshot.best
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Up => self.engine.steer(Direction::Up),
            Command::Down => self.engine.steer(Direction::Down),
            Command::Left => self.engine.steer(Direction::Left),
            Command::Right => self.engine.steer(Direction::Right),
            Command::Pause => {
                let _ = self.engine.toggle_pause();
            }
            Command::Restart => self.engine.restart(),
        }
    }
}
