//! Error types for the settings crate.
//!
//! Reading a configuration can fail at three levels: the file itself (I/O and
//! parse errors), the values it holds ([`ConfigError`]), and the tools those
//! values describe ([`SettingsError::InvalidTool`]).

use std::io;
use thiserror::Error;

/// Errors that can occur while loading, saving or building a configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// Dotted path of the offending value
        key: String,
        /// What is wrong with it
        reason: String,
    },

    /// The platform has no configuration directory.
    #[error("No configuration directory: {0}")]
    ConfigDirectory(String),

    /// A tool entry was rejected by the tool constructors.
    #[error("Tool entry '{id}' rejected: {source}")]
    InvalidTool {
        /// Id of the rejected entry
        id: String,
        /// Constructor error
        #[source]
        source: cutterkit_core::Error,
    },

    /// The file could not be read or written.
    #[error("Configuration file I/O: {0}")]
    Io(#[from] io::Error),

    /// JSON parse or write failure.
    #[error("Malformed JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse failure.
    #[error("Malformed TOML configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML write failure.
    #[error("Cannot write TOML configuration: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// The configuration parsed but failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SettingsError {
    /// Whether the error comes from a tool entry rather than the file.
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Self::InvalidTool { .. })
    }
}

/// Validation failures of a parsed configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file extension selects no known format.
    #[error("Unsupported configuration extension '{0}', expected .json or .toml")]
    UnsupportedFormat(String),

    /// A value lies outside its valid range.
    #[error("{key} = {value} is out of range")]
    ValueOutOfRange {
        /// Dotted path of the value
        key: String,
        /// The rejected value, as written
        value: String,
    },

    /// Two tool entries share an id.
    #[error("Tool id '{0}' is used more than once")]
    DuplicateToolId(String),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cutterkit_core::ToolError;

    #[test]
    fn test_tool_entry_error() {
        let err = SettingsError::InvalidTool {
            id: "em10".to_string(),
            source: ToolError::invalid("diameter", -1.0, "must be positive").into(),
        };
        assert!(err.is_tool_error());
        assert!(err.to_string().starts_with("Tool entry 'em10' rejected: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_errors_are_transparent() {
        let err: SettingsError = ConfigError::DuplicateToolId("em10".to_string()).into();
        assert_eq!(err.to_string(), "Tool id 'em10' is used more than once");
        assert!(!err.is_tool_error());

        let err = ConfigError::ValueOutOfRange {
            key: "defaults.arbor_length".to_string(),
            value: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "defaults.arbor_length = -1 is out of range");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
