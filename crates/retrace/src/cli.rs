//! Command-line interface for retrace.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use retrace::ReplayFormat;

/// Retrace - tic-tac-toe with time travel through past moves
#[derive(Parser, Debug)]
#[command(name = "retrace")]
#[command(about = "Tic-tac-toe with a move history you can jump back through", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./retrace.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Write logs here instead of the configured file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play a list of cell indices (0-8) and print the result
    Replay {
        /// Cell indices in play order
        moves: Vec<usize>,

        /// View this history step after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,
    },
}
