//! Error module for the Lanai Trie crate.
//!
//! The trie itself is total and never fails; the errors here cover the
//! surrounding application: configuration loading, file output, report
//! serialization and the workload driver.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the crate.
pub type LanaiResult<T> = Result<T, LanaiError>;

/// Core error enum for the Lanai Trie crate.
#[derive(Error, Debug)]
pub enum LanaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A workload worker panicked or observed inconsistent data.
    #[error("Workload error: {0}")]
    Workload(String),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
