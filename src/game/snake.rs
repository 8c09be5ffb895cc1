use super::collision::{self, Collision};
use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::consts;
use log::debug;
use std::collections::VecDeque;

/// A snake on the board
///
/// The body is the `trail` (tail first) followed by the `head`, so the snake
/// is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of the rest of the body, with the tail at the front and
    /// the cell behind the head at the back.
    pub(super) trail: VecDeque<Cell>,

    /// The direction the next tick will move in
    pub(super) direction: Direction,

    /// The most recent turn requested since the last tick
    pub(super) pending: Option<Direction>,

    pub(super) alive: bool,
}

/// What happened to the snake during a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    Moved,
    AteApple,
    DiedWall,
    DiedSelf,
}

impl TickOutcome {
    pub(crate) fn is_death(self) -> bool {
        matches!(self, TickOutcome::DiedWall | TickOutcome::DiedSelf)
    }
}

impl Snake {
    /// Create a live snake of `length` cells all stacked on `start` and facing
    /// in `direction`.  A `length` of zero is treated as one.
    pub(crate) fn new(start: Cell, length: usize, direction: Direction) -> Snake {
        Snake {
            head: start,
            trail: std::iter::repeat_n(start, length.saturating_sub(1)).collect(),
            direction,
            pending: None,
            alive: true,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// Iterate over the whole body, tail first and head last
    pub(crate) fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.trail.iter().copied().chain(std::iter::once(self.head))
    }

    pub(crate) fn len(&self) -> usize {
        self.trail.len() + 1
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Buffer a turn to be applied at the start of the next tick, replacing
    /// any turn already buffered.  Requests to reverse the current direction
    /// are dropped, as are all requests once the snake is dead.
    pub(crate) fn request_turn(&mut self, direction: Direction) {
        if !self.alive {
            return;
        }
        if direction == self.direction.reverse() {
            debug!("Dropped reversing turn {direction:?}");
            return;
        }
        self.pending = Some(direction);
    }

    /// Returns `true` if any part of the body, head included, is on `cell`
    pub(crate) fn overlaps(&self, cell: Cell) -> bool {
        self.head == cell || self.trail.contains(&cell)
    }

    /// Advance the snake one cell, growing by one if it lands on `apple`.
    /// Returns `None` without doing anything if the snake is already dead.
    pub(crate) fn tick(&mut self, apple: Cell, grid: Grid) -> Option<TickOutcome> {
        if !self.alive {
            return None;
        }
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
        let new_head = self.direction.advance(self.head);
        self.trail.push_back(self.head);
        self.head = new_head;
        let dropped = self.trail.pop_front();
        let outcome = match collision::resolve(grid, self.head, self.trail.iter().copied(), apple)
        {
            Collision::Wall => {
                self.alive = false;
                TickOutcome::DiedWall
            }
            Collision::Body => {
                self.alive = false;
                TickOutcome::DiedSelf
            }
            Collision::Apple => {
                if let Some(tail) = dropped {
                    self.trail.push_front(tail);
                }
                TickOutcome::AteApple
            }
            Collision::Clear => TickOutcome::Moved,
        };
        Some(outcome)
    }
}
