mod direction;
mod food;
mod grid;
mod snake;
mod snapshot;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::Grid;
pub(crate) use self::snapshot::Snapshot;
use self::food::Food;
use self::snake::{MoveOutcome, Snake};
use crate::config::GameSettings;
use log::debug;
use rand::Rng;
use ratatui::layout::Position;
use std::fmt;

/// One snake, one piece of food, and the score: everything that is reset
/// together when the snake dies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameSession<R> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    /// Highest score reached by any snake in this session
    best: u32,
    /// Latest steering request, applied at the start of the next tick
    pending: Option<Direction>,
    paused: bool,
    ticks: u64,
}

/// What a single call to [`GameSession::tick()`] did
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum TickOutcome {
    /// Nothing moved
    Paused,
    Moved,
    /// The snake moved onto the food
    Ate,
    /// The snake ran into something and the session was reset
    Died(Death),
}

/// How the last snake ended, as it was just before the reset
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Death {
    pub(crate) obstacle: Obstacle,
    /// Where the head was when the snake died
    pub(crate) head: Position,
    pub(crate) length: usize,
    pub(crate) score: u32,
    /// Number of the tick on which the snake died
    pub(crate) tick: u64,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Obstacle {
    Wall,
    Itself,
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obstacle::Wall => write!(f, "a wall"),
            Obstacle::Itself => write!(f, "itself"),
        }
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session on `settings.grid()`.  The snake's head starts
    /// `initial_length` cells from the left wall on the middle row so that
    /// its tail ends next to the wall.
    pub(crate) fn new(settings: GameSettings, mut rng: R) -> GameSession<R> {
        let grid = settings.grid();
        let start = Position::new(settings.initial_length, grid.height / 2);
        let snake = Snake::new(start, usize::from(settings.initial_length));
        let food = Food::spawn(grid, &snake.occupied_cells(), &mut rng);
        GameSession {
            rng,
            grid,
            snake,
            food,
            score: 0,
            best: 0,
            pending: None,
            paused: false,
            ticks: 0,
        }
    }

    /// Advance the session by one step.
    ///
    /// The pending direction is consumed first and checked against the
    /// direction the snake had before this tick.  A collision resets the
    /// whole session and takes precedence over eating: food is only eaten
    /// after a clean move.
    pub(crate) fn tick(&mut self) -> TickOutcome {
        if self.paused {
            return TickOutcome::Paused;
        }
        self.ticks += 1;
        if let Some(direction) = self.pending.take() {
            if !self.snake.set_direction(direction) {
                debug!(
                    "Ignoring turn to {direction:?} while heading {:?}",
                    self.snake.direction()
                );
            }
        }
        match self.snake.advance(self.grid) {
            MoveOutcome::Moved => (),
            MoveOutcome::WallCollision => return TickOutcome::Died(self.die(Obstacle::Wall)),
            MoveOutcome::SelfCollision => return TickOutcome::Died(self.die(Obstacle::Itself)),
        }
        if self.snake.head() != self.food.position() {
            return TickOutcome::Moved;
        }
        self.snake.grow();
        self.score += 1;
        self.best = self.best.max(self.score);
        let occupied = self.snake.occupied_cells();
        let _ = self.food.respawn(self.grid, &occupied, &mut self.rng);
        debug!(
            "Ate food at {:?}; score {}, next food at {:?}",
            self.snake.head(),
            self.score,
            self.food.position()
        );
        TickOutcome::Ate
    }

    /// Start over with a fresh snake, new food, and a zero score.  `best` is
    /// kept.  Returns the score that was abandoned.
    pub(crate) fn restart(&mut self) -> u32 {
        let score = self.score;
        self.reset();
        score
    }

    fn die(&mut self, obstacle: Obstacle) -> Death {
        let death = Death {
            obstacle,
            head: self.snake.head(),
            length: self.snake.len(),
            score: self.score,
            tick: self.ticks,
        };
        self.reset();
        death
    }

    fn reset(&mut self) {
        self.snake.reset();
        self.score = 0;
        self.pending = None;
        let occupied = self.snake.occupied_cells();
        let _ = self.food.respawn(self.grid, &occupied, &mut self.rng);
    }
}

impl<R> GameSession<R> {
    /// Record a steering request.  Only the most recent request before a tick
    /// counts.
    pub(crate) fn steer(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Pause or unpause.  Returns whether the session is now paused.
    pub(crate) fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.snake.segments().collect(),
            direction: self.snake.direction(),
            food: self.food.position(),
            score: self.score,
            best: self.best,
            grid: self.grid.size(),
            paused: self.paused,
            ticks: self.ticks,
        }
    }
}
