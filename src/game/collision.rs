use super::grid::{Cell, Grid};

/// What a freshly-moved head ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The head left the board
    Wall,
    /// The head landed on another part of the snake
    Body,
    /// The head landed on the apple
    Apple,
    Clear,
}

/// Classify a move given the new `head` and the rest of the body after the
/// move.  Checks run in a fixed order (wall, body, apple) so that a move which
/// is both fatal and onto the apple counts as a death.
pub(crate) fn resolve<I>(grid: Grid, head: Cell, rest: I, apple: Cell) -> Collision
where
    I: IntoIterator<Item = Cell>,
{
    if !grid.is_in_bounds(head) {
        Collision::Wall
    } else if rest.into_iter().any(|c| c == head) {
        Collision::Body
    } else if head == apple {
        Collision::Apple
    } else {
        Collision::Clear
    }
}
