use crate::grid::{Cell, GridSpace};

/// Why an episode ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Classifies what `cell` would hit. Walls are checked before the body.
#[must_use]
pub fn classify<'a, I>(grid: GridSpace, cell: Cell, body: I) -> Option<DeathReason>
where
    I: IntoIterator<Item = &'a Cell>,
{
    if !grid.in_bounds(cell) {
        return Some(DeathReason::WallCollision);
    }

    if body.into_iter().any(|segment| *segment == cell) {
        return Some(DeathReason::SelfCollision);
    }

    None
}

/// Returns true if `cell` is outside the grid or on any segment of `body`.
#[must_use]
pub fn is_collision<'a, I>(grid: GridSpace, cell: Cell, body: I) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    classify(grid, cell, body).is_some()
}
