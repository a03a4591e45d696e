//! Deterministic grid snake engine.
//!
//! The engine owns all simulation state; hosts feed it direction intents,
//! poll its scheduler with the current time, and draw [`game::Snapshot`]s.

pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
