//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "retrace.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RetraceConfig {
    /// Log output settings.
    log: LogConfig,
    /// Colors used by the terminal UI.
    theme: ThemeConfig,
}

impl RetraceConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Surface bad colors at load time rather than on first draw.
        config.theme.resolve()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Replaces the log file location.
    pub fn set_log_file(&mut self, file: PathBuf) {
        self.log.file = file;
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File the terminal UI writes its logs to.
    file: PathBuf,
    /// Filter used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("retrace.log"),
            filter: "info".to_string(),
        }
    }
}

/// Color names as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color of X marks.
    x_color: String,
    /// Color of O marks.
    o_color: String,
    /// Background of the keyboard cursor.
    cursor_color: String,
    /// Border color of the winning line.
    win_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            cursor_color: "white".to_string(),
            win_color: "green".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses every color name.
    ///
    /// Accepts ratatui color names (`"lightblue"`, `"red"`) and `#rrggbb`.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            cursor: parse_color("cursor_color", &self.cursor_color)?,
            win: parse_color("win_color", &self.win_color)?,
        })
    }
}

#[track_caller]
fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|e| ConfigError::new(format!("Invalid {} {:?}: {}", key, value, e)))
}

/// Resolved UI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Background of the keyboard cursor.
    pub cursor: Color,
    /// Border color of the winning line.
    pub win: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            cursor: Color::White,
            win: Color::Green,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
