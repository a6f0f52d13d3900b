//! Error types and exit codes for hackjudge
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, remote source)
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (missing columns, malformed scores, too few judges)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the hackjudge binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing columns, malformed input tables (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during hackjudge operations
#[derive(Error, Debug)]
pub enum HackError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or csv)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("missing required column '{column}' in {table}")]
    MissingColumn { table: String, column: String },

    #[error("invalid score in {column} at row {row}: '{value}'")]
    InvalidScore {
        row: usize,
        column: String,
        value: String,
    },

    #[error("not enough judges: {available} available, panel size is {required}")]
    InsufficientJudges { available: usize, required: usize },

    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    Source { operation: String, reason: String },

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl HackError {
    /// Create an error for an absent column in a loaded table
    pub fn missing_column(table: &str, column: impl std::fmt::Display) -> Self {
        HackError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        HackError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed call against the remote table store
    pub fn source(operation: &str, error: impl std::fmt::Display) -> Self {
        HackError::Source {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        HackError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HackError::UnknownFormat(_)
            | HackError::UsageError(_)
            | HackError::InvalidValue { .. } => ExitCode::Usage,

            HackError::MissingColumn { .. }
            | HackError::InvalidScore { .. }
            | HackError::InsufficientJudges { .. }
            | HackError::FileNotFound { .. } => ExitCode::Data,

            HackError::Io(_)
            | HackError::Csv(_)
            | HackError::Json(_)
            | HackError::Toml(_)
            | HackError::Source { .. }
            | HackError::FailedOperationWithTarget { .. }
            | HackError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            HackError::UnknownFormat(_) => "unknown_format",
            HackError::UsageError(_) => "usage_error",
            HackError::InvalidValue { .. } => "invalid_value",
            HackError::MissingColumn { .. } => "missing_column",
            HackError::InvalidScore { .. } => "invalid_score",
            HackError::InsufficientJudges { .. } => "insufficient_judges",
            HackError::FileNotFound { .. } => "file_not_found",
            HackError::Io(_) => "io_error",
            HackError::Csv(_) => "csv_error",
            HackError::Json(_) => "json_error",
            HackError::Toml(_) => "toml_error",
            HackError::Source { .. } => "source_error",
            HackError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            HackError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for hackjudge operations
pub type Result<T> = std::result::Result<T, HackError>;
