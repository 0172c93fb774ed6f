//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts and crosses for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play a list of square indices without the UI and print the result
    Replay {
        /// Comma-separated square indices, 0-8 row-major (e.g. 0,3,1,4,2)
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
