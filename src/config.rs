use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ConfigError};
use crate::grid::{Cell, GridSpace};

/// Default grid dimension (cells per side).
pub const DEFAULT_GRID_SIZE: u16 = 25;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Interval reduction applied for every food eaten, in milliseconds.
pub const DEFAULT_INTERVAL_DECREMENT_MS: u64 = 10;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Random draws the food spawner makes before giving up.
pub const DEFAULT_FOOD_SPAWN_ATTEMPTS: u32 = 100;

/// Where a fresh snake starts.
pub const DEFAULT_START_CELL: Cell = Cell::new(8, 8);

/// Where the first food of an episode is placed.
pub const DEFAULT_START_FOOD: Cell = Cell::new(10, 10);

/// Construction-time engine settings.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cells per side of the square grid.
    pub grid_size: u16,
    pub initial_interval_ms: u64,
    pub interval_decrement_ms: u64,
    /// Floor for the tick interval; never undercut.
    pub min_interval_ms: u64,
    pub food_spawn_attempts: u32,
    /// Border width (in cells) kept free of food. `0` spawns on the full grid.
    pub food_margin: u16,
    pub start_cell: Cell,
    pub start_food: Cell,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            interval_decrement_ms: DEFAULT_INTERVAL_DECREMENT_MS,
            min_interval_ms: MIN_TICK_INTERVAL_MS,
            food_spawn_attempts: DEFAULT_FOOD_SPAWN_ATTEMPTS,
            food_margin: 0,
            start_cell: DEFAULT_START_CELL,
            start_food: DEFAULT_START_FOOD,
        }
    }
}

impl EngineConfig {
    /// Reads a JSON config file; absent keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    #[must_use]
    pub fn grid(&self) -> GridSpace {
        GridSpace::new(self.grid_size)
    }

    #[must_use]
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    #[must_use]
    pub fn interval_decrement(&self) -> Duration {
        Duration::from_millis(self.interval_decrement_ms)
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    /// Rejects settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroMinInterval);
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::MinAboveInitial {
                min_ms: self.min_interval_ms,
                initial_ms: self.initial_interval_ms,
            });
        }
        if self.interval_decrement_ms > self.initial_interval_ms {
            return Err(ConfigError::DecrementTooLarge {
                decrement_ms: self.interval_decrement_ms,
                initial_ms: self.initial_interval_ms,
            });
        }
        if self.food_spawn_attempts == 0 {
            return Err(ConfigError::ZeroSpawnAttempts);
        }
        if u32::from(self.food_margin) * 2 >= u32::from(self.grid_size) {
            return Err(ConfigError::MarginTooWide {
                margin: self.food_margin,
                grid_size: self.grid_size,
            });
        }

        let grid = self.grid();
        if !grid.in_bounds(self.start_cell) {
            return Err(ConfigError::StartOutOfBounds {
                cell: self.start_cell,
            });
        }
        if !grid.in_bounds(self.start_food) {
            return Err(ConfigError::FoodOutOfBounds {
                cell: self.start_food,
            });
        }
        if self.start_food == self.start_cell {
            return Err(ConfigError::FoodOnStart {
                cell: self.start_food,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use crate::error::{AppError, ConfigError};
    use crate::grid::Cell;

    use super::EngineConfig;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.initial_interval(), Duration::from_millis(200));
        assert_eq!(config.min_interval(), Duration::from_millis(50));
        assert_eq!(config.grid().dimension(), 25);
    }

    #[test]
    fn zero_grid_is_rejected() {
        let config = EngineConfig {
            grid_size: 0,
            ..EngineConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid));
    }

    #[test]
    fn min_interval_above_initial_is_rejected() {
        let config = EngineConfig {
            initial_interval_ms: 40,
            min_interval_ms: 50,
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::MinAboveInitial {
                min_ms: 50,
                initial_ms: 40
            })
        );
    }

    #[test]
    fn decrement_past_initial_interval_is_rejected() {
        let config = EngineConfig {
            initial_interval_ms: 60,
            interval_decrement_ms: 500,
            min_interval_ms: 50,
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::DecrementTooLarge {
                decrement_ms: 500,
                initial_ms: 60
            })
        );

        let boundary = EngineConfig {
            initial_interval_ms: 60,
            interval_decrement_ms: 60,
            min_interval_ms: 50,
            ..EngineConfig::default()
        };
        assert_eq!(boundary.validate(), Ok(()));
    }

    #[test]
    fn zero_min_interval_is_rejected() {
        let config = EngineConfig {
            min_interval_ms: 0,
            ..EngineConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMinInterval));
    }

    #[test]
    fn margin_swallowing_grid_is_rejected() {
        let config = EngineConfig {
            grid_size: 4,
            food_margin: 2,
            start_cell: Cell::new(1, 1),
            start_food: Cell::new(2, 2),
            ..EngineConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MarginTooWide { .. })
        ));
    }

    #[test]
    fn start_layout_must_fit_grid() {
        let small = EngineConfig {
            grid_size: 5,
            ..EngineConfig::default()
        };
        assert!(matches!(
            small.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));

        let overlapping = EngineConfig {
            start_food: Cell::new(8, 8),
            ..EngineConfig::default()
        };
        assert!(matches!(
            overlapping.validate(),
            Err(ConfigError::FoodOnStart { .. })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "grid_size": 30, "min_interval_ms": 70 }"#)
                .expect("partial config should parse");

        assert_eq!(config.grid_size, 30);
        assert_eq!(config.min_interval_ms, 70);
        assert_eq!(config.initial_interval_ms, 200);
        assert_eq!(config.start_food, Cell::new(10, 10));
    }

    #[test]
    fn config_file_load_and_parse_errors() {
        let path = unique_test_path("config");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }

        fs::write(&path, r#"{ "start_cell": { "x": 3, "y": 4 } }"#)
            .expect("test file write should succeed");
        let loaded = EngineConfig::from_json_file(&path).expect("config should load");
        assert_eq!(loaded.start_cell, Cell::new(3, 4));

        fs::write(&path, "not-json").expect("test file write should succeed");
        assert!(matches!(
            EngineConfig::from_json_file(&path),
            Err(AppError::ConfigFile(_))
        ));

        let _ = fs::remove_file(&path);
        assert!(matches!(
            EngineConfig::from_json_file(&path),
            Err(AppError::Io(_))
        ));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }
}
