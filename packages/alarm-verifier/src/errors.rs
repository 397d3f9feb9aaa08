//! Error types for alarm-verifier
//!
//! Only the outer surface (configuration, report export) can fail.
//! Analysis-level failures are local: see `ConversionError`.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for alarm-verifier operations
#[derive(Debug, Error)]
pub enum VerifierError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for verifier operations
pub type Result<T> = std::result::Result<T, VerifierError>;
