use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use grid_snake::config::EngineConfig;
use grid_snake::error::AppError;
use grid_snake::game::Engine;
use grid_snake::input::{InputRouter, map_key};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// How long one frame waits for input before polling the scheduler again.
const FRAME_BUDGET: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON engine configuration; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the square grid.
    #[arg(long = "grid-size")]
    grid_size: Option<u16>,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by `RUST_LOG`, default `info`).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let engine = Engine::new(config, rng)?;
    info!(config = ?engine.config(), "engine ready");

    run(engine)
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init()
        .map_err(|error| AppError::Logging(error.to_string()))
}

fn run(mut engine: Engine) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let router = InputRouter;

    loop {
        let snapshot = engine.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot))?;

        if event::poll(FRAME_BUDGET)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    if !router.route(&mut engine, input) {
                        break;
                    }
                }
            }
        }

        let _ = engine.poll(Instant::now());
    }

    info!("exiting");
    Ok(())
}
