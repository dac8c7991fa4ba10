//! Error types for Bayesian Blocks segmentation
//!
//! Provides a unified error type for all blocks crates.

use thiserror::Error;

/// Core error type for segmentation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Event times or cell edges are not strictly increasing
    #[error("Input ordering error: {0}")]
    InputOrdering(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a false-positive probability outside (0, 1)
    pub fn invalid_probability(p0: f64) -> Self {
        Self::InvalidParameter(format!(
            "False-positive probability {p0} must be in (0, 1)"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for event times that are not strictly increasing
    pub fn unordered_events(index: usize, previous: f64, current: f64) -> Self {
        Self::InputOrdering(format!(
            "event {index} at {current} does not follow {previous}; \
             check for order, or duplicated events"
        ))
    }

    /// Create an error for a tessellation with more than one empty trailing cell
    pub fn degenerate_cells(non_positive: usize) -> Self {
        Self::InputOrdering(format!(
            "{non_positive} cells have non-positive length to the end of the interval; \
             events appear to be out of order or outside the interval"
        ))
    }
}
