//! Core data structures for quadratic-trend forecasting.

mod forecast;
mod series;
mod state;
mod trend;

pub use forecast::{ForecastResult, ForecastRow, ForecastSummary};
pub use series::ObservationSeries;
pub use state::SmoothingState;
pub use trend::{AdaptiveCoefficients, QuadraticTrend, TrendCoefficients};

/// Number of observations the method is defined over.
pub const SERIES_LENGTH: usize = 10;

/// Number of forecast steps produced per run.
pub const HORIZON: usize = 13;
