mod apple;
mod collision;
pub(crate) mod controller;
mod direction;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid};
pub(crate) use self::snake::{Snake, TickOutcome};
use crate::config::{Config, ConfigError, RespawnPolicy};
use self::controller::Scene;
use log::info;
use rand::Rng;

/// The template every new snake is built from
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Spawn {
    pub(crate) cell: Cell,
    pub(crate) length: usize,
    pub(crate) direction: Direction,
}

impl Spawn {
    pub(crate) fn snake(self) -> Snake {
        Snake::new(self.cell, self.length, self.direction)
    }
}

/// One snake, one apple and the score, on a fixed board
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameSession<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    spawn: Spawn,
    policy: RespawnPolicy,
    snake: Snake,
    apple: Cell,
    score: u32,
}

impl GameSession<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> Result<Self, ConfigError> {
        GameSession::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session with a fresh snake and apple.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configured board is empty or the configured
    /// snake does not fit on it.
    pub(crate) fn new_with_rng(config: &Config, mut rng: R) -> Result<GameSession<R>, ConfigError> {
        let grid = config.game.grid()?;
        let spawn = config.game.spawn(grid)?;
        let snake = spawn.snake();
        let apple = apple::place(&snake, grid, &mut rng);
        let size = grid.size();
        info!(
            "Starting session on a {}x{} board with a {}-cell snake",
            size.width, size.height, spawn.length
        );
        Ok(GameSession {
            rng,
            grid,
            spawn,
            policy: config.respawn,
            snake,
            apple,
            score: 0,
        })
    }

    /// Advance the snake one cell.  Eating the apple scores a point and puts a
    /// new apple somewhere off the snake.  Returns `None` if the snake is
    /// dead.
    pub(crate) fn tick(&mut self) -> Option<TickOutcome> {
        let outcome = self.snake.tick(self.apple, self.grid)?;
        if outcome == TickOutcome::AteApple {
            self.score = self.score.saturating_add(1);
            self.place_apple();
        }
        Some(outcome)
    }

    /// Replace the snake with a fresh one from the spawn template, applying
    /// the respawn policy to the score and the apple.  A kept apple that the
    /// new snake would cover is moved regardless of the policy.
    pub(crate) fn respawn(&mut self) {
        self.snake = self.spawn.snake();
        if self.policy.reset_score {
            self.score = 0;
        }
        if self.policy.replace_apple || self.snake.overlaps(self.apple) {
            self.place_apple();
        }
        info!("Respawned snake; score is {}", self.score);
    }

    fn place_apple(&mut self) {
        self.apple = apple::place(&self.snake, self.grid, &mut self.rng);
    }
}

impl<R> GameSession<R> {
    pub(crate) fn request_turn(&mut self, direction: Direction) {
        self.snake.request_turn(direction);
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Return what the renderer should draw for the current state
    pub(crate) fn scene(&self) -> Scene<'_> {
        Scene {
            snake: &self.snake,
            apple: self.apple,
            grid: self.grid,
            score: self.score,
        }
    }
}
