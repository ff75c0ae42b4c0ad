//! Layered error types
//!
//! Core computation failures are wrapped as [`EngineError::Computation`];
//! everything touching the file system or stored formats is classified
//! here so that batch loops can decide between skipping and aborting.

use std::path::{Path, PathBuf};
use texttools_core::ComputationError;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Missing or unusable file/folder argument. Fatal for the run.
    #[error("invalid input {}: {reason}", path.display())]
    Input {
        /// The offending path
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// A stored JSON/CSV file could not be understood
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// The malformed file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Metric computation over an empty or degenerate unit
    #[error("computation error: {0}")]
    Computation(#[from] ComputationError),

    /// I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being read or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Unsupported language
    #[error("language '{0}' not supported")]
    UnsupportedLanguage(String),
}

impl EngineError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, reason: impl ToString) -> Self {
        EngineError::Parse {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn input(path: &Path, reason: impl Into<String>) -> Self {
        EngineError::Input {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
