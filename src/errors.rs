// src/errors.rs

// error handling for limiter construction

// dependencies
use thiserror::Error;

/// Error type for limiter configuration issues.
/// Raised only while building a limiter; admission checks never fail.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LimiterError {
    #[error("Capacity must be positive")]
    InvalidCapacity,
    #[error("Rate must be finite and non-negative, got {0}")]
    InvalidRate(f64),
}
