//! Runner configuration and command-line operand errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("random_runs must be at least 1")]
    NoRandomRuns,

    #[error("unknown suite '{0}'")]
    UnknownSuite(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is outside -32768..=65535")]
    OutOfRange(i64),
}
