use super::grid::{Cell, Grid};
use super::snake::Snake;
use log::debug;
use rand::Rng;
use std::collections::HashSet;

/// Anything that takes up cells on the board and must not have an apple
/// placed underneath it
pub(crate) trait Occupancy {
    fn overlaps(&self, cell: Cell) -> bool;
}

impl Occupancy for HashSet<Cell> {
    fn overlaps(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl Occupancy for Snake {
    fn overlaps(&self, cell: Cell) -> bool {
        Snake::overlaps(self, cell)
    }
}

/// Choose a free cell uniformly at random by drawing from the whole board
/// and redrawing on every hit.
///
/// There is no guard against a full board: if every cell is occupied, this
/// never returns.
pub(crate) fn place<O, R>(occupied: &O, grid: Grid, rng: &mut R) -> Cell
where
    O: Occupancy + ?Sized,
    R: Rng + ?Sized,
{
    let mut draws = 1u64;
    loop {
        let cell = grid.random_cell(rng);
        if !occupied.overlaps(cell) {
            debug!("Placed apple at ({}, {}) after {draws} draw(s)", cell.x, cell.y);
            return cell;
        }
        draws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::HashMap;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn avoids_occupied_cells() {
        let grid = Grid::new(3, 3).unwrap();
        let mut occupied = HashSet::new();
        for x in 0..3 {
            for y in 0..3 {
                occupied.insert(Cell::new(x, y));
            }
        }
        occupied.remove(&Cell::new(1, 2));
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..50 {
            assert_eq!(place(&occupied, grid, &mut rng), Cell::new(1, 2));
        }
    }

    #[test]
    fn avoids_the_snake_including_its_head() {
        let grid = Grid::new(2, 2).unwrap();
        let mut snake = Snake::new(Cell::new(0, 0), 2, Direction::Right);
        let _ = snake.tick(Cell::new(0, 1), grid);
        // Body is now (0, 0) then (1, 0), so only the bottom row is free.
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..50 {
            let apple = place(&snake, grid, &mut rng);
            assert_eq!(apple.y, 1);
        }
    }

    #[test]
    fn uniform_over_free_cells() {
        let grid = Grid::new(4, 4).unwrap();
        let occupied = HashSet::from([Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut counts = HashMap::<Cell, u32>::new();
        let draws = 13_000;
        for _ in 0..draws {
            *counts.entry(place(&occupied, grid, &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 13, "every free cell should be chosen");
        for (cell, n) in counts {
            assert!(!occupied.contains(&cell));
            // Expected 1000 per cell with a standard deviation of about 30
            assert!((850..=1150).contains(&n), "cell {cell:?} chosen {n} times");
        }
    }
}
