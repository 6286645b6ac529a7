use rand::Rng;

use super::error::GameError;
use super::grid::{Cell, GridGeometry};

/// Random probes before falling back to scanning the free cells
const SAMPLE_ATTEMPTS: usize = 64;

/// The single piece of food on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Place new food on a cell not covered by `excluding`
    pub fn spawn<R: Rng>(
        grid: &GridGeometry,
        excluding: &[Cell],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        free_cell(grid, excluding, rng).map(Self::at)
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a uniformly random cell outside `excluding`
    pub fn respawn<R: Rng>(
        &mut self,
        grid: &GridGeometry,
        excluding: &[Cell],
        rng: &mut R,
    ) -> Result<Cell, GameError> {
        self.position = free_cell(grid, excluding, rng)?;
        Ok(self.position)
    }
}

/// Rejection sampling is uniform over the free cells and cheap while the
/// snake is short. Once it keeps missing, the free cells are enumerated and
/// one is picked directly, which also detects a full grid.
fn free_cell<R: Rng>(
    grid: &GridGeometry,
    excluding: &[Cell],
    rng: &mut R,
) -> Result<Cell, GameError> {
    if excluding.len() < grid.cell_count() {
        for _ in 0..SAMPLE_ATTEMPTS {
            let x = rng.gen_range(0..grid.width()) as i32;
            let y = rng.gen_range(0..grid.height()) as i32;
            let cell = Cell::new(x, y);

            if !excluding.contains(&cell) {
                return Ok(cell);
            }
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|c| !excluding.contains(c)).collect();
    if free.is_empty() {
        return Err(GameError::GridExhausted {
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(free[rng.gen_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn grid(width: u32, height: u32) -> GridGeometry {
        GridGeometry::new(width, height).unwrap()
    }

    #[test]
    fn test_respawn_never_lands_on_snake() {
        let grid = grid(10, 10);
        let mut rng = StdRng::seed_from_u64(42);
        // Two full rows plus a column
        let snake: Vec<Cell> = grid
            .cells()
            .filter(|c| c.y < 2 || c.x == 7)
            .collect();

        let mut food = Food::at(Cell::new(0, 5));
        for _ in 0..1000 {
            let cell = food.respawn(&grid, &snake, &mut rng).unwrap();
            assert!(!snake.contains(&cell));
            assert!(grid.contains(cell));
            assert_eq!(food.position(), cell);
        }
    }

    #[test]
    fn test_nearly_full_grid_finds_last_cell() {
        let grid = grid(5, 5);
        let mut rng = StdRng::seed_from_u64(3);
        let last = Cell::new(3, 2);
        let snake: Vec<Cell> = grid.cells().filter(|c| *c != last).collect();

        for _ in 0..20 {
            assert_eq!(Food::spawn(&grid, &snake, &mut rng).unwrap().position(), last);
        }
    }

    #[test]
    fn test_full_grid_is_exhausted() {
        let grid = grid(3, 2);
        let mut rng = StdRng::seed_from_u64(0);
        let snake: Vec<Cell> = grid.cells().collect();

        let mut food = Food::at(Cell::new(0, 0));
        assert_eq!(
            food.respawn(&grid, &snake, &mut rng),
            Err(GameError::GridExhausted {
                width: 3,
                height: 2
            })
        );
        assert_eq!(food.position(), Cell::new(0, 0));
    }

    #[test]
    fn test_spawn_reaches_every_free_cell() {
        let grid = grid(4, 4);
        let mut rng = StdRng::seed_from_u64(11);
        let snake = vec![Cell::new(0, 0), Cell::new(1, 0)];

        let seen: HashSet<Cell> = (0..2000)
            .map(|_| Food::spawn(&grid, &snake, &mut rng).unwrap().position())
            .collect();
        assert_eq!(seen.len(), grid.cell_count() - snake.len());
    }
}
