//! Configuration system for cursortrail.
//!
//! Provides the configuration structure with sensible defaults and support
//! for serialization/deserialization via serde. Configuration is loaded from
//! a TOML file and falls back to defaults when the file is missing or
//! malformed.
//!
//! # Example
//!
//! ```
//! use cursortrail::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.max_history_size, 1000);
//! assert_eq!(config.momentum_decay_ms, 300);
//!
//! // Create custom configuration
//! let custom = Config {
//!     max_history_size: 50,
//!     ..Config::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::history::{DEFAULT_MOMENTUM_DECAY, DEFAULT_ROW_NOISE_THRESHOLD};

/// Configuration for the cursortrail history engine and demo viewer.
///
/// # Fields
///
/// * `max_history_size` - Maximum positions kept per buffer (default: 1000, minimum: 1)
/// * `momentum_decay_ms` - Window in which movements count as one motion (default: 300)
/// * `row_noise_threshold` - Screen rows a fresh movement must cross to be recorded (default: 3)
/// * `show_line_numbers` - Display line numbers in the viewer (default: true)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum positions kept per buffer
    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,

    /// Momentum decay window in milliseconds
    #[serde(default = "default_momentum_decay_ms")]
    pub momentum_decay_ms: u64,

    /// Screen-row distance under which a fresh movement is ignored
    #[serde(default = "default_row_noise_threshold")]
    pub row_noise_threshold: usize,

    /// Display line numbers in the viewer
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,
}

/// Returns the default history size.
fn default_max_history_size() -> usize {
    1000
}

/// Returns the default momentum decay window in milliseconds.
fn default_momentum_decay_ms() -> u64 {
    DEFAULT_MOMENTUM_DECAY.as_millis() as u64
}

/// Returns the default row noise threshold.
fn default_row_noise_threshold() -> usize {
    DEFAULT_ROW_NOISE_THRESHOLD
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_history_size: default_max_history_size(),
            momentum_decay_ms: default_momentum_decay_ms(),
            row_noise_threshold: default_row_noise_threshold(),
            show_line_numbers: true,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/cursortrail/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("cursortrail");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read. `max_history_size` is clamped to at least 1 regardless of
    /// what the file says.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        let config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        };
        config.clamped()
    }

    /// Parses configuration from a TOML string, clamping as `load` does.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config.clamped())
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }

    /// A history size of 0 would make every timeline unusable; hold the
    /// documented minimum of 1.
    fn clamped(mut self) -> Self {
        self.max_history_size = self.max_history_size.max(1);
        self
    }
}
