//! Error types for boundary detection.
//!
//! Detection itself never fails: a run always produces a report, possibly
//! with undetermined boundaries. The only fallible operation is building a
//! configuration, so the error surface is deliberately small.

use thiserror::Error;

/// Errors that can occur when setting up boundary detection
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Invalid configuration
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of what is invalid in the configuration
        reason: String,
    },
}

/// Result type for boundary detection operations
pub type Result<T> = std::result::Result<T, BoundaryError>;
