//! Forecasting models.

mod traits;

pub mod quadratic;

pub use quadratic::QuadraticExponentialSmoothing;
pub use traits::{BoxedForecaster, Forecaster};
