use rand::Rng;
use ratatui::layout::Size;
use serde::Deserialize;

/// A single position on the board.
///
/// Coordinates are signed so that a head which has just left the board can
/// still be represented (and drawn on the border).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// The fixed-size board, `width` cells across and `height` cells down.  Both
/// dimensions are always nonzero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Returns `None` if either dimension is zero
    pub(crate) fn new(width: u16, height: u16) -> Option<Grid> {
        (width > 0 && height > 0).then_some(Grid { width, height })
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn is_in_bounds(self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.x) && (0..i32::from(self.height)).contains(&cell.y)
    }

    /// Draw a cell uniformly at random from the whole board
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell {
            x: i32::from(rng.random_range(0..self.width)),
            y: i32::from(rng.random_range(0..self.height)),
        }
    }
}
