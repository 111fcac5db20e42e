//! Crate error type.

use thiserror::Error;

/// Recoverable construction failures. Missing keys are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Bulk construction from parallel sequences of different lengths.
    #[error("cannot build a map from {keys} keys and {values} values")]
    LengthMismatch { keys: usize, values: usize },
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
    #[error("load factor must be finite and greater than 0, got {0}")]
    InvalidLoadFactor(f64),
}
