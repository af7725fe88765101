//! Retrace - terminal tic-tac-toe with time travel.
//!
//! # Architecture
//!
//! - **Game logic**: [`retrace_tictactoe`] owns the history and the rules
//! - **App**: [`App`] holds the single [`GameController`](retrace_tictactoe::GameController)
//!   and applies [`Message`]s produced by the view layer
//! - **TUI**: ratatui widgets for the cell, the grid and the outer shell
//! - **Replay**: the same controller driven from the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod logging;
mod replay;

pub mod tui;

pub use app::{App, Focus, Message};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, LogConfig, RetraceConfig, Theme, ThemeConfig};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{RejectedMove, ReplayFormat, ReplayReport, replay};
