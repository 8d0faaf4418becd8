//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_MILLIS: u64 = 100;

/// Default grid width, walls included
pub(crate) const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default grid height, walls included
pub(crate) const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Snake length after every (re)start
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 10;

/// How often the terminal is redrawn when no input arrives
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Random food placements tried before falling back to a linear scan
pub(crate) const FOOD_SPAWN_ATTEMPTS: usize = 64;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '>';

/// Glyph for body segments at even indices
pub(crate) const SNAKE_BODY_EVEN_SYMBOL: char = '■';

/// Glyph for body segments at odd indices
pub(crate) const SNAKE_BODY_ODD_SYMBOL: char = '□';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '★';

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Style for the rest of the snake
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the score bar below the grid
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
