use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::input::{Action, Keymap};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Also quit on Escape, in addition to the `quit` keys
    pub quit_on_escape: bool,
    pub keys: KeyBindings,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            quit_on_escape: true,
            keys: KeyBindings::default(),
            log: LogConfig::default(),
        }
    }
}

/// Key names per action. See [`crate::input::parse_key`] for the accepted
/// names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub place: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub reset: Vec<String>,
    pub quit: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            place: keys(&["p", "space"]),
            left: keys(&["left-arrow", "h"]),
            right: keys(&["right-arrow", "l"]),
            up: keys(&["up-arrow", "k"]),
            down: keys(&["down-arrow", "j"]),
            reset: keys(&["r"]),
            quit: keys(&["q"]),
        }
    }
}

impl KeyBindings {
    pub fn by_action(&self) -> [(Action, &[String]); 7] {
        [
            (Action::Place, self.place.as_slice()),
            (Action::MoveLeft, self.left.as_slice()),
            (Action::MoveRight, self.right.as_slice()),
            (Action::MoveUp, self.up.as_slice()),
            (Action::MoveDown, self.down.as_slice()),
            (Action::Reset, self.reset.as_slice()),
            (Action::Quit, self.quit.as_slice()),
        ]
    }
}

/// Logging goes to a file so it never draws over the board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: PathBuf,
    /// Default filter level; `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: PathBuf::from("tui_gomoku.log"),
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Building the keymap checks key names, empty lists and conflicts
        Keymap::from_config(&self.keys, self.quit_on_escape)?;

        if self.log.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation("log.file must not be empty".into()));
        }
        if self.log.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "log.level '{}' is not one of off, error, warn, info, debug, trace",
                self.log.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
