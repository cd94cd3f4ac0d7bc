//! # quadratic-es
//!
//! Short-horizon forecasting with quadratic-trend (Brown's triple)
//! exponential smoothing.
//!
//! Given ten observations and a smoothing parameter α ∈ (0, 1), the crate
//! fits a least-squares quadratic trend, seeds a triple smoothing state from
//! it, and recursively produces thirteen forecasts, each with a symmetric
//! confidence interval that widens with the horizon.
//!
//! ```
//! use quadratic_es::prelude::*;
//!
//! let series = ObservationSeries::new(vec![
//!     196.4, 232.4, 285.0, 315.6, 338.4, 308.7, 330.5, 332.3, 340.4, 350.9,
//! ])?;
//! let result = forecast(&series, 0.0625)?;
//!
//! for row in result.rows() {
//!     assert!(row.lower <= row.forecast && row.forecast <= row.upper);
//! }
//! # Ok::<(), ForecastError>(())
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod datasets;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};
pub use models::quadratic::{forecast, forecast_with_config};

/// Common imports: `use quadratic_es::prelude::*;`.
pub mod prelude {
    pub use crate::core::{
        ForecastResult, ForecastRow, ForecastSummary, ObservationSeries, TrendCoefficients,
    };
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::quadratic::{forecast, forecast_with_config, ForecastConfig};
    pub use crate::models::{Forecaster, QuadraticExponentialSmoothing};
}
