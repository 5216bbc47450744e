use crate::domain::types::{ColumnNameError, IdPrefixError};
use thiserror::Error;

/// Series fixtures error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid column name: {0}")]
    InvalidColumnName(#[from] ColumnNameError),

    #[error("Invalid id prefix: {0}")]
    InvalidIdPrefix(#[from] IdPrefixError),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Column {column} has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Row {position} is out of bounds for a frame of {len} rows")]
    RowOutOfBounds { position: usize, len: usize },

    #[error("Row index has {actual} labels, expected {expected}")]
    IndexLengthMismatch { expected: usize, actual: usize },

    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: String, reason: String },

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl Error {
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }

    pub fn invalid_setting(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
