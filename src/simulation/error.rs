//! Error types for rope construction and stepping.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RopeError {
    #[error("a rope needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    #[error("pinned node index {index} is out of bounds for a rope of {num_nodes} nodes")]
    PinOutOfBounds { index: usize, num_nodes: usize },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be finite")]
    NonFinite { name: &'static str },

    #[error("mass {index} has invalid {field}")]
    InvalidMass { index: usize, field: &'static str },

    #[error("spring {index} would have zero rest length (coincident endpoints)")]
    ZeroRestLength { index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RopeError>;

/// Reject NaN/Inf and values <= 0
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RopeError::NonFinite { name });
    }
    if value <= 0.0 {
        return Err(RopeError::NonPositive { name, value });
    }
    Ok(())
}

pub(crate) fn ensure_finite(name: &'static str, value: &[f64]) -> Result<()> {
    if value.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RopeError::NonFinite { name })
    }
}
