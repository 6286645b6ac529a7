use super::action::Direction;
use super::error::GameError;

/// A cell on the game grid, as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Bounds of a toroidal grid: leaving one edge re-enters on the opposite one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    width: u32,
    height: u32,
}

impl GridGeometry {
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be at least 1x1, got {width}x{height}"
            )));
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GameError::InvalidConfig(format!(
                "grid {width}x{height} is too large"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// Fold arbitrary coordinates back onto the grid, each axis independently
    pub fn wrap(&self, x: i32, y: i32) -> Cell {
        Cell::new(
            x.rem_euclid(self.width as i32),
            y.rem_euclid(self.height as i32),
        )
    }

    /// The neighbour of `cell` in `direction`, wrapping at the edges
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        // i64 keeps `i32::MAX`-sized grids from overflowing before the wrap
        let x = (cell.x as i64 + dx as i64).rem_euclid(self.width as i64);
        let y = (cell.y as i64 + dy as i64).rem_euclid(self.height as i64);
        Cell::new(x as i32, y as i32)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Cell::new(x, y)))
    }
}
