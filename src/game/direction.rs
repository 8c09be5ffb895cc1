use super::grid::Cell;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step away from `cell` in this direction.  The
    /// result may lie off the board.
    pub(crate) fn advance(self, cell: Cell) -> Cell {
        let Cell { x, y } = cell;
        match self {
            Direction::Up => Cell::new(x, y - 1),
            Direction::Down => Cell::new(x, y + 1),
            Direction::Left => Cell::new(x - 1, y),
            Direction::Right => Cell::new(x + 1, y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
