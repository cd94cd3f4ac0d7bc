//! Utility functions for the forecasting pipeline.

pub mod ols;
pub mod stats;

pub use ols::{quadratic_trend_fit, trend_fitted, trend_residuals, MIN_TREND_POINTS};
pub use stats::{max, mean, min, std_dev, variance};
