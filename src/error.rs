use std::path::PathBuf;

/// Errors from turning a configured key name into a key code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key name")]
    Empty,

    #[error("unknown key name '{0}'")]
    Unknown(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid binding for '{action}': {source}")]
    Key {
        action: String,
        source: KeyParseError,
    },

    #[error("config validation error: {0}")]
    Validation(String),
}
