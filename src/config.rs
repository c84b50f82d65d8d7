//! Game configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Names used when announcing moves and results.
///
/// Every key is optional:
///
/// ```toml
/// human_name = "Alice"
/// computer_name = "Minimax"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Name announced when the human wins.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name announced for the computer's turn and win.
    #[serde(default = "default_computer_name")]
    computer_name: String,
}

fn default_human_name() -> String {
    "X".to_string()
}

fn default_computer_name() -> String {
    "O".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            computer_name: default_computer_name(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with explicit player names.
    pub fn new(human_name: impl Into<String>, computer_name: impl Into<String>) -> Self {
        Self {
            human_name: human_name.into(),
            computer_name: computer_name.into(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human_name, computer = %config.computer_name, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = GameConfig::from_toml(r#"computer_name = "Minimax""#).unwrap();
        assert_eq!(config.human_name(), "X");
        assert_eq!(config.computer_name(), "Minimax");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GameConfig::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse config"), "{err}");
    }
}
