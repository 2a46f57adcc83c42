use std::io;

use thiserror::Error;

use crate::domain::interview::AbortReason;

/// Library-wide error type for ensemblegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required request field absent or blank.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// Malformed row, line, or cell in an input source.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Interactive flow ended without a completed request.
    #[error("Interview aborted: {0}")]
    Aborted(AbortReason),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// CSV reading error.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
