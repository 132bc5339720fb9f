//! Error types for the simulation core.

use thiserror::Error;

/// Errors surfaced to callers of the simulation core.
///
/// Nothing inside a single generation step produces an error: out-of-range
/// numeric values are clamped and organisms that cannot act skip the sub-step.
#[derive(Error, Debug)]
pub enum SimError {
    /// A caller passed an argument outside its domain (e.g. a negative generation count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Simulation parameters failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Reading or writing a parameter file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
