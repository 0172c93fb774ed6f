//! noughts - terminal noughts and crosses
//!
//! Runs the interactive terminal UI by default, or replays a move list
//! headlessly with `noughts replay --moves 0,3,1,4,2`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config).await,
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log().filter()))
}

/// Run the terminal UI, logging to a file so the screen stays clean
async fn run_play(config: &Config) -> Result<()> {
    let log_path = config.log().file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run(*config.ui()).await
}

/// Replay a move list and print the outcome
#[instrument(skip(config))]
fn run_replay(config: &Config, moves: &[usize], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    info!(count = moves.len(), "Replaying moves");
    let replay = replay::run(moves);

    if json {
        println!("{}", replay.to_json()?);
    } else {
        print!("{}", replay.to_text());
    }

    match replay.error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
