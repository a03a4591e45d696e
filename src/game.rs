use std::time::{Duration, Instant};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::collision::{DeathReason, classify};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::food::FoodSpawner;
use crate::grid::{Cell, GridSpace};
use crate::input::Direction;
use crate::scheduler::{TickScheduler, TickTicket};
use crate::score::ScoreSpeed;
use crate::snake::Snake;

/// Heading of a freshly started snake.
pub const START_HEADING: Direction = Direction::Right;

/// Coarse lifecycle state of the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    Running,
    GameOver,
}

impl GamePhase {
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The engine was not running; nothing changed.
    Ignored,
    Moved,
    Ate,
    Collided(DeathReason),
    /// The snake covers the whole grid; there is nowhere left for food.
    BoardFilled,
}

/// All mutable simulation state for one play session.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Episode {
    pub(crate) snake: Snake,
    pub(crate) food: Cell,
    pub(crate) speed: ScoreSpeed,
    pub(crate) death_reason: Option<DeathReason>,
    pub(crate) tick_count: u64,
}

impl Episode {
    fn new(config: &EngineConfig) -> Self {
        Self {
            snake: Snake::new(config.start_cell, START_HEADING),
            food: config.start_food,
            speed: ScoreSpeed::from_config(config),
            death_reason: None,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.speed.score()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.speed.current_interval()
    }
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Head first; empty while idle.
    pub body: Vec<Cell>,
    pub food: Option<Cell>,
    pub heading: Option<Direction>,
    pub score: u32,
    pub interval: Duration,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    pub grid_size: u16,
}

/// The simulation engine: phase machine, scheduler and the live episode.
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    config: EngineConfig,
    grid: GridSpace,
    spawner: FoodSpawner,
    phase: GamePhase,
    episode: Option<Episode>,
    scheduler: TickScheduler,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates a deterministic engine for tests and reproducible runs.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Validates `config` and builds an idle engine drawing food from `rng`.
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = config.grid();
        let spawner = FoodSpawner::new(grid, config.food_spawn_attempts, config.food_margin);

        Ok(Self {
            config,
            grid,
            spawner,
            phase: GamePhase::Idle,
            episode: None,
            scheduler: TickScheduler::new(),
            rng,
        })
    }

    /// Replaces any previous episode with a fresh one and starts ticking.
    pub fn start(&mut self) {
        let episode = Episode::new(&self.config);
        self.scheduler.arm(episode.interval());
        self.episode = Some(episode);
        self.phase = GamePhase::Running;
        info!(grid_size = self.grid.dimension(), "episode started");
    }

    /// Abandons the current episode and returns to idle.
    pub fn stop(&mut self) {
        self.scheduler.disarm();
        self.episode = None;
        if self.phase != GamePhase::Idle {
            info!("engine stopped");
        }
        self.phase = GamePhase::Idle;
    }

    /// Buffers a heading for the next tick. Ignored unless running.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.phase.is_running() {
            return;
        }
        if let Some(episode) = self.episode.as_mut() {
            episode.snake.set_pending_heading(direction);
        }
    }

    /// Advances the simulation by one tick, bypassing the scheduler's clock.
    pub fn tick(&mut self) -> TickOutcome {
        self.advance(None)
    }

    /// Polls the scheduler and runs the tick it yields, if any.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        let ticket = self.due_tick(now)?;
        self.dispatch(ticket, now)
    }

    /// Returns a ticket when a tick is due at `now`.
    pub fn due_tick(&mut self, now: Instant) -> Option<TickTicket> {
        self.scheduler.poll(now)
    }

    /// Runs the tick for `ticket`, or discards it when the scheduler was
    /// disarmed or re-armed after it was issued.
    pub fn dispatch(&mut self, ticket: TickTicket, now: Instant) -> Option<TickOutcome> {
        if !self.scheduler.is_current(ticket) {
            debug!("discarding stale tick");
            return None;
        }
        Some(self.advance(Some(now)))
    }

    fn advance(&mut self, now: Option<Instant>) -> TickOutcome {
        if !self.phase.is_running() {
            return TickOutcome::Ignored;
        }
        let Some(episode) = self.episode.as_mut() else {
            return TickOutcome::Ignored;
        };

        episode.snake.promote_pending();
        let candidate = episode.snake.peek_next_head();

        // Checked against the pre-step body, so entering the cell the tail
        // is about to vacate still counts as a hit.
        if let Some(reason) = classify(self.grid, candidate, episode.snake.segments()) {
            episode.death_reason = Some(reason);
            self.phase = GamePhase::GameOver;
            self.scheduler.disarm();
            info!(
                ?reason,
                score = episode.score(),
                ticks = episode.tick_count,
                "game over"
            );
            return TickOutcome::Collided(reason);
        }

        let grew = candidate == episode.food;
        episode.snake.step(candidate, grew);
        episode.tick_count += 1;
        trace!(x = candidate.x, y = candidate.y, grew, "tick");

        if !grew {
            return TickOutcome::Moved;
        }

        episode.speed.on_food_eaten();

        if episode.snake.len() >= self.grid.total_cells() {
            self.phase = GamePhase::GameOver;
            self.scheduler.disarm();
            info!(score = episode.score(), "board filled");
            return TickOutcome::BoardFilled;
        }

        episode.food = self.spawner.spawn(&mut self.rng, episode.snake.segments());

        let interval = episode.interval();
        match now {
            Some(now) => self.scheduler.rearm(now, interval),
            None => self.scheduler.arm(interval),
        }
        debug!(
            score = episode.score(),
            ?interval,
            food_x = episode.food.x,
            food_y = episode.food.y,
            "food eaten"
        );

        TickOutcome::Ate
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Live episode; retained after game over for display.
    #[must_use]
    pub fn episode(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Copies out everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        match &self.episode {
            Some(episode) => Snapshot {
                phase: self.phase,
                body: episode.snake.segments().copied().collect(),
                food: Some(episode.food),
                heading: Some(episode.snake.heading()),
                score: episode.score(),
                interval: episode.interval(),
                death_reason: episode.death_reason,
                tick_count: episode.tick_count,
                grid_size: self.grid.dimension(),
            },
            None => Snapshot {
                phase: self.phase,
                body: Vec::new(),
                food: None,
                heading: None,
                score: 0,
                interval: self.config.initial_interval(),
                death_reason: None,
                tick_count: 0,
                grid_size: self.grid.dimension(),
            },
        }
    }
}
