//! Brown's quadratic exponential smoothing forecaster.

use super::error_model::ErrorModel;
use super::recursion::RecursiveForecaster;
use super::smoothing::initialize_state;
use super::{ForecastConfig, SmoothingParameter};
use crate::core::{ForecastResult, ObservationSeries, SmoothingState, TrendCoefficients};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::{quadratic_trend_fit, trend_fitted, trend_residuals};
use tracing::{debug, instrument};

/// Quadratic-trend exponential smoothing.
///
/// Fitting estimates a least-squares quadratic trend, seeds the triple
/// smoothing state from it and records the residual standard deviation.
/// Prediction then unrolls the 13-step recursion.
///
/// # Example
///
/// ```
/// use quadratic_es::core::ObservationSeries;
/// use quadratic_es::models::{Forecaster, QuadraticExponentialSmoothing};
///
/// let series = ObservationSeries::new(vec![
///     75.42, 77.87, 70.76, 67.83, 68.59, 67.12, 62.6, 59.32, 61.69, 54.55,
/// ]).unwrap();
///
/// let mut model = QuadraticExponentialSmoothing::new(0.0625).unwrap();
/// model.fit(&series).unwrap();
/// let result = model.predict().unwrap();
/// assert_eq!(result.horizon(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct QuadraticExponentialSmoothing {
    config: ForecastConfig,
    alpha: SmoothingParameter,
    fit: Option<FittedState>,
}

#[derive(Debug, Clone)]
struct FittedState {
    series: ObservationSeries,
    trend: TrendCoefficients,
    initial: SmoothingState,
    errors: ErrorModel,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
}

impl QuadraticExponentialSmoothing {
    /// Create a model with the given smoothing parameter and default labeling.
    pub fn new(alpha: f64) -> Result<Self> {
        Self::with_config(ForecastConfig::new(alpha))
    }

    /// Create a model from a full configuration.
    pub fn with_config(config: ForecastConfig) -> Result<Self> {
        let alpha = config.validate()?;
        Ok(Self {
            config,
            alpha,
            fit: None,
        })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn alpha(&self) -> f64 {
        self.alpha.value()
    }

    /// Least-squares trend of the fitted series.
    pub fn trend(&self) -> Option<&TrendCoefficients> {
        self.fit.as_ref().map(|f| &f.trend)
    }

    /// Smoothing state seeded from the trend, before the first step.
    pub fn initial_state(&self) -> Option<&SmoothingState> {
        self.fit.as_ref().map(|f| &f.initial)
    }

    /// Residual standard deviation of the trend fit.
    pub fn sigma(&self) -> Option<f64> {
        self.fit.as_ref().map(|f| f.errors.sigma())
    }
}

impl Forecaster for QuadraticExponentialSmoothing {
    #[instrument(level = "debug", skip_all, fields(alpha = self.alpha.value()))]
    fn fit(&mut self, series: &ObservationSeries) -> Result<()> {
        let values = series.values();

        let trend = quadratic_trend_fit(values)?;
        debug!(a0 = trend.a0, a1 = trend.a1, a2 = trend.a2, "fitted quadratic trend");

        let initial = initialize_state(&trend, self.alpha);
        if !initial.is_finite() {
            return Err(ForecastError::NumericInstability(format!(
                "initial smoothing state is not finite: {:?}",
                initial
            )));
        }

        let errors = ErrorModel::from_fit(values, &trend, self.alpha)?;
        debug!(sigma = errors.sigma(), ?initial, "initialized smoothing state");

        self.fit = Some(FittedState {
            series: series.clone(),
            trend,
            initial,
            errors,
            fitted: trend_fitted(values, &trend),
            residuals: trend_residuals(values, &trend),
        });

        Ok(())
    }

    fn predict(&self) -> Result<ForecastResult> {
        let fit = self.fit.as_ref().ok_or(ForecastError::FitRequired)?;

        let forecaster = RecursiveForecaster::new(self.alpha, fit.errors, self.config.base_period);
        let rows = forecaster.run(fit.initial)?;

        Ok(ForecastResult::new(
            rows,
            fit.trend,
            fit.series.clone(),
            self.alpha.value(),
            fit.errors.sigma(),
        ))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fit.as_ref().map(|f| f.fitted.as_slice())
    }

    /// Residuals are `trend(t) - y_t`.
    fn residuals(&self) -> Option<&[f64]> {
        self.fit.as_ref().map(|f| f.residuals.as_slice())
    }

    fn name(&self) -> &str {
        "QuadraticES"
    }
}

/// Forecast `series` with smoothing parameter `alpha` and default labeling.
pub fn forecast(series: &ObservationSeries, alpha: f64) -> Result<ForecastResult> {
    forecast_with_config(series, &ForecastConfig::new(alpha))
}

/// Forecast `series` using a full configuration.
pub fn forecast_with_config(
    series: &ObservationSeries,
    config: &ForecastConfig,
) -> Result<ForecastResult> {
    let mut model = QuadraticExponentialSmoothing::with_config(config.clone())?;
    model.fit(series)?;
    model.predict()
}
