//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction};
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// How long the terminal host waits for input before delivering the next
/// frame timestamp
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Default width of a single cell in pixels
pub(crate) const DEFAULT_CELL_PIXEL_WIDTH: u32 = 20;

/// Default height of a single cell in pixels
pub(crate) const DEFAULT_CELL_PIXEL_HEIGHT: u32 = 20;

/// Default width of the whole canvas in pixels (32 cells)
pub(crate) const DEFAULT_CANVAS_WIDTH: u32 = 640;

/// Default height of the whole canvas in pixels (24 cells)
pub(crate) const DEFAULT_CANVAS_HEIGHT: u32 = 480;

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Default pause between a death and the next snake, in milliseconds
pub(crate) const DEFAULT_RESPAWN_DELAY_MS: u64 = 2000;

/// Default number of cells in a new snake
pub(crate) const DEFAULT_INITIAL_BODY_LENGTH: usize = 4;

/// Default cell on which every part of a new snake is stacked
pub(crate) const DEFAULT_INITIAL_BODY_CELL: Cell = Cell::new(2, 2);

pub(crate) const DEFAULT_INITIAL_DIRECTION: Direction = Direction::Down;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
