//! Shared error types

use thiserror::Error;

/// Errors raised by the shimmer core and animation layers
#[derive(Error, Debug)]
pub enum CoreError {
    /// A constructor or schedule-time parameter violated its contract
    /// (negative duration, non-finite time or value component)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An operation addressed a target that was already disposed
    #[error("Stale target: {0}")]
    StaleTarget(String),

    /// A cache generator invalidated its own cell during refresh
    #[error("Reentrancy violation: {0}")]
    ReentrancyViolation(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
