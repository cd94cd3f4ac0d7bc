//! Error types for the quadratic-es library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while fitting or forecasting.
///
/// Every variant is a precondition failure: the computation is rejected
/// before any partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The observation series does not have the fixed length the method uses.
    #[error("invalid series length: expected {expected}, got {got}")]
    InvalidSeriesLength { expected: usize, got: usize },

    /// Too few points to fit a quadratic trend.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Smoothing parameter outside the open interval (0, 1).
    #[error("invalid smoothing parameter: alpha must lie in (0, 1), got {0}")]
    InvalidSmoothingParameter(f64),

    /// An observation is NaN or infinite.
    #[error("non-finite observation at index {index}")]
    NonFiniteObservation { index: usize },

    /// Invalid configuration value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A stage produced a non-finite value, or alpha sits too close to a boundary.
    #[error("numeric instability: {0}")]
    NumericInstability(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,
}
