//! Forecast result structures.

use super::{AdaptiveCoefficients, ObservationSeries, SmoothingState, TrendCoefficients};
#[cfg(feature = "serde")]
use super::HORIZON;
#[cfg(feature = "serde")]
use crate::error::{ForecastError, Result};
use crate::utils::stats::{max, mean, min, std_dev};

/// One forecast step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastRow {
    /// Horizon `j`, starting at 1.
    pub step: usize,
    /// Calendar label: base period + `step`.
    pub period: i32,
    /// Smoothing state the row was computed from (before the step's update).
    pub state: SmoothingState,
    /// Trend coefficients re-derived from `state`.
    pub coefficients: AdaptiveCoefficients,
    /// Point forecast.
    pub forecast: f64,
    /// Confidence interval half-width.
    pub error: f64,
    /// `forecast + error`.
    pub upper: f64,
    /// `forecast - error`.
    pub lower: f64,
}

/// Full output of one forecast run.
///
/// Rows are in horizon order. The original trend fit and observations are
/// carried through for display; neither is modified by the forecast.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ForecastResultRepr", into = "ForecastResultRepr")
)]
pub struct ForecastResult {
    rows: Vec<ForecastRow>,
    trend: TrendCoefficients,
    series: ObservationSeries,
    alpha: f64,
    sigma: f64,
}

impl ForecastResult {
    pub(crate) fn new(
        rows: Vec<ForecastRow>,
        trend: TrendCoefficients,
        series: ObservationSeries,
        alpha: f64,
        sigma: f64,
    ) -> Self {
        debug_assert_eq!(rows.len(), super::HORIZON);
        Self {
            rows,
            trend,
            series,
            alpha,
            sigma,
        }
    }

    /// All forecast rows, step 1 first.
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.rows.len()
    }

    /// Row for horizon `step` (1-based).
    pub fn row(&self, step: usize) -> Option<&ForecastRow> {
        step.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// Quadratic trend fitted to the observations.
    pub fn trend(&self) -> &TrendCoefficients {
        &self.trend
    }

    /// Observations the forecast was computed from.
    pub fn series(&self) -> &ObservationSeries {
        &self.series
    }

    /// Smoothing parameter used for the run.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Standard deviation of the trend-fit residuals.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Calendar label of each row.
    pub fn periods(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.period).collect()
    }

    /// Point forecast of each row.
    pub fn forecasts(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.forecast).collect()
    }

    /// Interval half-width of each row.
    pub fn errors(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.error).collect()
    }

    /// Lower bound of each row.
    pub fn lower(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.lower).collect()
    }

    /// Upper bound of each row.
    pub fn upper(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.upper).collect()
    }

    /// Fitted trend evaluated at `t = 1..=horizon`, aligned with the rows.
    pub fn trend_curve(&self) -> Vec<f64> {
        self.trend.curve(1..=self.rows.len())
    }

    /// Descriptive statistics over the forecast values and interval widths.
    pub fn summary(&self) -> ForecastSummary {
        let forecasts = self.forecasts();
        let errors = self.errors();
        ForecastSummary {
            forecast_min: min(&forecasts),
            forecast_max: max(&forecasts),
            forecast_mean: mean(&forecasts),
            forecast_std_dev: std_dev(&forecasts),
            error_mean: mean(&errors),
            error_min: min(&errors),
            error_max: max(&errors),
        }
    }
}

/// Descriptive statistics for a [`ForecastResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastSummary {
    /// Smallest point forecast.
    pub forecast_min: f64,
    /// Largest point forecast.
    pub forecast_max: f64,
    /// Mean point forecast.
    pub forecast_mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub forecast_std_dev: f64,
    /// Mean interval half-width.
    pub error_mean: f64,
    /// Narrowest interval half-width (step 1).
    pub error_min: f64,
    /// Widest interval half-width (last step).
    pub error_max: f64,
}

/// Wire form of [`ForecastResult`]; converted back only if it has a full horizon.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ForecastResultRepr {
    rows: Vec<ForecastRow>,
    trend: TrendCoefficients,
    series: ObservationSeries,
    alpha: f64,
    sigma: f64,
}

#[cfg(feature = "serde")]
impl From<ForecastResult> for ForecastResultRepr {
    fn from(result: ForecastResult) -> Self {
        Self {
            rows: result.rows,
            trend: result.trend,
            series: result.series,
            alpha: result.alpha,
            sigma: result.sigma,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ForecastResultRepr> for ForecastResult {
    type Error = ForecastError;

    fn try_from(repr: ForecastResultRepr) -> Result<Self> {
        if repr.rows.len() != HORIZON {
            return Err(ForecastError::InvalidParameter(format!(
                "forecast must have {} rows, got {}",
                HORIZON,
                repr.rows.len()
            )));
        }
        if let Some((i, row)) = repr
            .rows
            .iter()
            .enumerate()
            .find(|(i, row)| row.step != i + 1)
        {
            return Err(ForecastError::InvalidParameter(format!(
                "row {} has step {}, expected {}",
                i,
                row.step,
                i + 1
            )));
        }
        Ok(Self::new(
            repr.rows,
            repr.trend,
            repr.series,
            repr.alpha,
            repr.sigma,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HORIZON;
    use approx::assert_relative_eq;

    fn make_result() -> ForecastResult {
        let rows = (1..=HORIZON)
            .map(|j| {
                let forecast = 100.0 + j as f64;
                let error = 0.5 * j as f64;
                ForecastRow {
                    step: j,
                    period: 2003 + j as i32,
                    state: SmoothingState::new(1.0, 2.0, 3.0),
                    coefficients: AdaptiveCoefficients::new(100.0, 1.0, 0.0),
                    forecast,
                    error,
                    upper: forecast + error,
                    lower: forecast - error,
                }
            })
            .collect();
        let series = ObservationSeries::new(vec![1.0; 10]).unwrap();
        ForecastResult::new(
            rows,
            TrendCoefficients::new(1.0, 0.0, 0.0),
            series,
            0.1,
            0.0,
        )
    }

    #[test]
    fn result_exposes_columns_in_horizon_order() {
        let result = make_result();
        assert_eq!(result.horizon(), 13);
        assert_eq!(result.periods().first(), Some(&2004));
        assert_eq!(result.periods().last(), Some(&2016));
        assert_eq!(result.forecasts()[0], 101.0);
        assert_eq!(result.lower()[1], 101.0);
        assert_eq!(result.upper()[1], 103.0);
        assert_eq!(result.errors()[12], 6.5);
    }

    #[test]
    fn row_lookup_is_one_based() {
        let result = make_result();
        assert!(result.row(0).is_none());
        assert_eq!(result.row(1).map(|r| r.step), Some(1));
        assert_eq!(result.row(13).map(|r| r.period), Some(2016));
        assert!(result.row(14).is_none());
    }

    #[test]
    fn trend_curve_is_aligned_with_rows() {
        let result = make_result();
        let curve = result.trend_curve();
        assert_eq!(curve.len(), 13);
        assert!(curve.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn summary_describes_forecasts_and_widths() {
        let summary = make_result().summary();
        assert_relative_eq!(summary.forecast_min, 101.0);
        assert_relative_eq!(summary.forecast_max, 113.0);
        assert_relative_eq!(summary.forecast_mean, 107.0);
        // Sample std-dev of 13 consecutive integers: sqrt(13 * 14 / 12)
        assert_relative_eq!(summary.forecast_std_dev, (182.0_f64 / 12.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.error_mean, 3.5);
        assert_relative_eq!(summary.error_min, 0.5);
        assert_relative_eq!(summary.error_max, 6.5);
    }
}
