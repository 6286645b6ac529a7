use rand::Rng;

use super::action::Direction;
use super::grid::{Cell, GridGeometry};

/// Outcome of moving the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// The head moved onto this cell
    Moved(Cell),
    /// The head would have entered the body; nothing changed
    Collided,
}

/// The snake in the game
///
/// The body is the recent history of head positions, newest first. It only
/// grows up to `target_length`, so growth shows up lazily as the tail stops
/// being trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    heading: Direction,
    target_length: usize,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Cell, heading: Direction) -> Self {
        Self {
            body: vec![head],
            heading,
            target_length: 1,
        }
    }

    /// A fresh snake at the grid centre, facing a random direction
    pub fn spawn<R: Rng>(grid: &GridGeometry, rng: &mut R) -> Self {
        let heading = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        Self::new(grid.center(), heading)
    }

    /// Create a snake with an explicit body, head first.
    ///
    /// The target length is the length of `segments`. An empty slice yields
    /// `None`.
    pub fn from_segments(segments: Vec<Cell>, heading: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        let target_length = segments.len();
        Some(Self {
            body: segments,
            heading,
            target_length,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Body segments, head first
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Steer for the next advance. A 180-degree turn is ignored once the
    /// snake has a neck to run into.
    pub fn turn(&mut self, requested: Direction) {
        if self.body.len() > 1 && self.heading.is_opposite(requested) {
            return;
        }
        self.heading = requested;
    }

    /// Where the head would land on the next advance
    pub fn next_head(&self, grid: &GridGeometry) -> Cell {
        grid.step(self.head(), self.heading)
    }

    /// Move one cell in the current heading.
    ///
    /// `body[1]` is not checked for collisions because it is the cell the
    /// head is leaving.
    pub fn advance(&mut self, grid: &GridGeometry) -> AdvanceResult {
        let new_head = self.next_head(grid);

        if self.body.len() > 2 && self.body[2..].contains(&new_head) {
            return AdvanceResult::Collided;
        }

        self.body.insert(0, new_head);
        if self.body.len() > self.target_length {
            self.body.pop();
        }

        AdvanceResult::Moved(new_head)
    }

    /// Raise the target length; the body catches up over the next advances
    pub fn grow(&mut self, by: usize) {
        self.target_length += by;
    }
}
