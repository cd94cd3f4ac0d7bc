//! Quadratic-trend (Brown's triple) exponential smoothing.
//!
//! The pipeline is:
//! 1. fit `y = a0 + a1·t + a2·t²` by least squares,
//! 2. seed the smoothed statistics `(S1, S2, S3)` from that trend,
//! 3. for each horizon `j = 1..=13`, recover coefficients from the state,
//!    forecast `j` periods ahead and re-seed the state,
//! 4. attach `±err(j)` bounds from the residual standard deviation.

mod config;
mod error_model;
mod model;
mod recursion;
mod smoothing;

pub use config::{ForecastConfig, SmoothingParameter};
pub use error_model::ErrorModel;
pub use model::{forecast, forecast_with_config, QuadraticExponentialSmoothing};
pub use recursion::RecursiveForecaster;
pub use smoothing::{derive_coefficients, initialize_state};
