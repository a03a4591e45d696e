use std::time::Duration;

use crate::config::EngineConfig;

/// Score and the tick interval derived from it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScoreSpeed {
    score: u32,
    interval: Duration,
    initial: Duration,
    decrement: Duration,
    minimum: Duration,
}

impl ScoreSpeed {
    #[must_use]
    pub fn new(initial: Duration, decrement: Duration, minimum: Duration) -> Self {
        Self {
            score: 0,
            interval: initial.max(minimum),
            initial,
            decrement,
            minimum,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.initial_interval(),
            config.interval_decrement(),
            config.min_interval(),
        )
    }

    /// Scores one food and shortens the interval, never below the minimum.
    pub fn on_food_eaten(&mut self) {
        self.score = self.score.saturating_add(1);
        self.interval = self
            .interval
            .saturating_sub(self.decrement)
            .max(self.minimum);
    }

    #[must_use]
    pub fn current_interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.interval = self.initial.max(self.minimum);
    }
}
