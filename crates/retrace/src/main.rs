//! Retrace - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use retrace::{ReplayFormat, RetraceConfig};
use tracing::instrument;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RetraceConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => run_play(config, log_file).await,
        Command::Replay {
            moves,
            jump,
            format,
        } => run_replay(&config, &moves, jump, format),
    }
}

/// Run the interactive terminal game
async fn run_play(mut config: RetraceConfig, log_file: Option<std::path::PathBuf>) -> Result<()> {
    if let Some(file) = log_file {
        config.set_log_file(file);
    }
    retrace::init_file_logging(config.log())?;
    let theme = config.theme().resolve()?;
    retrace::tui::run_tui(theme).await
}

/// Run a headless replay and print the report
#[instrument(skip(config))]
fn run_replay(
    config: &RetraceConfig,
    moves: &[usize],
    jump: Option<usize>,
    format: ReplayFormat,
) -> Result<()> {
    retrace::init_stderr_logging(config.log());

    let report = retrace::replay(moves, jump)?;
    match format {
        ReplayFormat::Text => print!("{}", report.to_text()),
        ReplayFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize replay report")?;
            println!("{}", json);
        }
    }
    Ok(())
}
