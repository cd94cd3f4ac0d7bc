//! Forecaster trait defining the common interface for models.

use crate::core::{ForecastResult, ObservationSeries};
use crate::error::Result;

/// Common interface for forecasting models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to the observation series.
    ///
    /// A failed fit leaves any previously fitted state untouched.
    fn fit(&mut self, series: &ObservationSeries) -> Result<()>;

    /// Produce the full forecast for the fitted series.
    fn predict(&self) -> Result<ForecastResult>;

    /// Get the fitted values (in-sample trend).
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Get the in-sample residuals.
    fn residuals(&self) -> Option<&[f64]>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.fitted_values().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use quadratic_es::models::{BoxedForecaster, Forecaster, QuadraticExponentialSmoothing};
///
/// let model: BoxedForecaster = Box::new(QuadraticExponentialSmoothing::new(0.1).unwrap());
/// assert_eq!(model.name(), "QuadraticES");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster + Send + Sync>;
