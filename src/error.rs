use std::io;

use thiserror::Error;

use crate::grid::Cell;

/// Engine settings rejected at construction time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("minimum tick interval must be positive")]
    ZeroMinInterval,
    #[error("minimum tick interval ({min_ms} ms) exceeds initial interval ({initial_ms} ms)")]
    MinAboveInitial { min_ms: u64, initial_ms: u64 },
    #[error("interval decrement ({decrement_ms} ms) exceeds initial interval ({initial_ms} ms)")]
    DecrementTooLarge { decrement_ms: u64, initial_ms: u64 },
    #[error("food spawner needs at least one attempt")]
    ZeroSpawnAttempts,
    #[error("food margin {margin} leaves no spawn area on a {grid_size}x{grid_size} grid")]
    MarginTooWide { margin: u16, grid_size: u16 },
    #[error("start cell ({}, {}) is outside the grid", .cell.x, .cell.y)]
    StartOutOfBounds { cell: Cell },
    #[error("start food ({}, {}) is outside the grid", .cell.x, .cell.y)]
    FoodOutOfBounds { cell: Cell },
    #[error("start food ({}, {}) overlaps the start cell", .cell.x, .cell.y)]
    FoodOnStart { cell: Cell },
}

/// Failures surfaced by the terminal host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to parse config file: {0}")]
    ConfigFile(#[from] serde_json::Error),
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
