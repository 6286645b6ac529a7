use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::{Direction, Intent};
use super::config::GameConfig;
use super::error::GameError;
use super::food::Food;
use super::grid::{Cell, GridGeometry};
use super::snake::{AdvanceResult, Snake};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing moved
    Idle,
    Moved(Cell),
    /// Moved onto the food and ate it
    Ate(Cell),
    /// Ran into itself; the round is over
    Collided,
}

/// Whether the caller should keep running after an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-only view of the session for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    /// Head first
    pub snake: &'a [Cell],
    pub food: Cell,
    pub grid: GridGeometry,
    pub ticks: u64,
}

/// One player's game: the snake, its food, the score and the high score.
///
/// The session is driven from outside: `on_tick` at a fixed cadence and
/// `handle_intent` whenever the input source produces something. Turns are
/// buffered and only the most recent one is applied on the next tick.
pub struct GameSession<R: Rng = StdRng> {
    grid: GridGeometry,
    food_score: u32,
    phase: Phase,
    score: u32,
    high_score: u32,
    snake: Snake,
    food: Food,
    pending_turn: Option<Direction>,
    ticks: u64,
    rng: R,
}

impl GameSession<StdRng> {
    /// Create a session seeded from `config.seed`, or from OS entropy
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let grid = config.grid()?;
        let snake = Snake::spawn(&grid, &mut rng);
        let food = Food::spawn(&grid, snake.body(), &mut rng)?;

        Ok(Self {
            grid,
            food_score: config.food_score,
            phase: Phase::Start,
            score: 0,
            high_score: 0,
            snake,
            food,
            pending_turn: None,
            ticks: 0,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score of any finished round in this process
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.position()
    }

    pub fn grid(&self) -> &GridGeometry {
        &self.grid
    }

    /// Ticks played in the current round
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            snake: self.snake.body(),
            food: self.food.position(),
            grid: self.grid,
            ticks: self.ticks,
        }
    }

    /// Apply an intent from the input source.
    ///
    /// Start and Restart both (re)start a round from the start screen or
    /// after a game over. Intents that make no sense in the current phase
    /// are dropped.
    pub fn handle_intent(&mut self, intent: Intent) -> Result<Flow, GameError> {
        match (self.phase, intent) {
            (_, Intent::Quit) => {
                info!("quit requested (high score {})", self.high_score);
                return Ok(Flow::Quit);
            }
            (Phase::Start | Phase::GameOver, Intent::Start | Intent::Restart) => {
                self.begin_round()?;
            }
            (Phase::Playing, Intent::Turn(direction)) => self.on_input(direction),
            (phase, intent) => debug!("ignoring {intent:?} during {phase:?}"),
        }
        Ok(Flow::Continue)
    }

    /// Remember a turn for the next tick, replacing any earlier one
    pub fn on_input(&mut self, direction: Direction) {
        if self.phase == Phase::Playing {
            self.pending_turn = Some(direction);
        }
    }

    /// Advance the simulation by one step
    pub fn on_tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.phase != Phase::Playing {
            return Ok(TickOutcome::Idle);
        }

        if let Some(direction) = self.pending_turn.take() {
            self.snake.turn(direction);
        }

        // Food is never on the body, so eating can't coincide with a
        // collision. Growing first lets the new segment appear this tick.
        let eats = self.snake.next_head(&self.grid) == self.food.position();
        if eats {
            self.snake.grow(1);
        }
        self.ticks += 1;

        match self.snake.advance(&self.grid) {
            AdvanceResult::Collided => {
                self.end_round();
                Ok(TickOutcome::Collided)
            }
            AdvanceResult::Moved(head) if eats => {
                self.score = self.score.saturating_add(self.food_score);
                debug!("ate food at {head:?}, score {}", self.score);

                if let Err(e) = self.food.respawn(&self.grid, self.snake.body(), &mut self.rng) {
                    // The board is full; no further tick may move the snake
                    error!("cannot place food: {e}");
                    self.end_round();
                    return Err(e);
                }
                Ok(TickOutcome::Ate(head))
            }
            AdvanceResult::Moved(head) => Ok(TickOutcome::Moved(head)),
        }
    }

    fn begin_round(&mut self) -> Result<(), GameError> {
        let snake = Snake::spawn(&self.grid, &mut self.rng);
        let food = Food::spawn(&self.grid, snake.body(), &mut self.rng)?;

        info!(
            "round started heading {:?}, food at {:?}",
            snake.heading(),
            food.position()
        );

        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.ticks = 0;
        self.pending_turn = None;
        self.phase = Phase::Playing;
        Ok(())
    }

    fn end_round(&mut self) {
        if self.score > self.high_score {
            info!("new high score {} (was {})", self.score, self.high_score);
        }
        self.high_score = self.high_score.max(self.score);
        self.pending_turn = None;
        self.phase = Phase::GameOver;
        info!(
            "game over after {} ticks, score {}, length {}",
            self.ticks,
            self.score,
            self.snake.len()
        );
    }
}
