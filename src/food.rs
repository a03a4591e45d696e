use rand::Rng;
use tracing::warn;

use crate::collision::is_collision;
use crate::grid::{Cell, GridSpace};

/// Picks food cells by rejection sampling against the snake body.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodSpawner {
    grid: GridSpace,
    attempts: u32,
    margin: u16,
}

impl FoodSpawner {
    /// `margin` cells along every wall are never drawn; `0` uses the full grid.
    #[must_use]
    pub fn new(grid: GridSpace, attempts: u32, margin: u16) -> Self {
        Self {
            grid,
            attempts: attempts.max(1),
            margin,
        }
    }

    /// Draws up to `attempts` uniform cells and returns the first one off the body.
    ///
    /// When every draw collides, the last candidate is returned as-is. This is
    /// a best-effort fallback for nearly full boards, so callers must not
    /// assume the result is free.
    pub fn spawn<'a, R, I>(&self, rng: &mut R, body: I) -> Cell
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell>,
        I::IntoIter: Clone,
    {
        let body = body.into_iter();
        let low = i32::from(self.margin);
        let high = i32::from(self.grid.dimension()) - low;

        let mut candidate = Cell::new(low, low);
        for _ in 0..self.attempts {
            candidate = Cell::new(rng.gen_range(low..high), rng.gen_range(low..high));
            if !is_collision(self.grid, candidate, body.clone()) {
                return candidate;
            }
        }

        warn!(
            attempts = self.attempts,
            x = candidate.x,
            y = candidate.y,
            "food spawn attempts exhausted, reusing last candidate"
        );
        candidate
    }
}
