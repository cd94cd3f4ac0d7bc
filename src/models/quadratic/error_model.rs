//! Forecast error bounds.
//!
//! The residual standard deviation σ is taken once from the least-squares
//! trend fit. The interval half-width at horizon `j` is
//!
//! ```text
//! err(j) = σ · sqrt(2α + 3α² + 3α³·j²)
//! ```

use super::SmoothingParameter;
use crate::core::TrendCoefficients;
use crate::error::{ForecastError, Result};
use crate::utils::{std_dev, trend_residuals};

/// Horizon-dependent interval half-width for one fitted series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorModel {
    sigma: f64,
    alpha: SmoothingParameter,
}

impl ErrorModel {
    /// Build from the residuals of `trend` against the observations.
    ///
    /// # Errors
    /// * [`ForecastError::InsufficientData`] with fewer than two observations
    /// * [`ForecastError::NumericInstability`] if σ is not finite
    pub fn from_fit(
        values: &[f64],
        trend: &TrendCoefficients,
        alpha: SmoothingParameter,
    ) -> Result<Self> {
        if values.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: values.len(),
            });
        }

        let residuals = trend_residuals(values, trend);
        let sigma = std_dev(&residuals);
        if !sigma.is_finite() {
            return Err(ForecastError::NumericInstability(format!(
                "residual standard deviation is {}",
                sigma
            )));
        }

        Ok(Self { sigma, alpha })
    }

    /// Residual standard deviation of the trend fit.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Interval half-width at horizon `j`.
    pub fn half_width(&self, j: usize) -> f64 {
        let a = self.alpha.value();
        let j = j as f64;
        self.sigma * (2.0 * a + 3.0 * a.powi(2) + 3.0 * a.powi(3) * j * j).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::quadratic_trend_fit;
    use approx::assert_relative_eq;

    const MORTALITY: [f64; 10] = [
        75.42, 77.87, 70.76, 67.83, 68.59, 67.12, 62.6, 59.32, 61.69, 54.55,
    ];

    fn alpha(a: f64) -> SmoothingParameter {
        SmoothingParameter::new(a).unwrap()
    }

    #[test]
    fn sigma_matches_reference_fit() {
        let trend = quadratic_trend_fit(&MORTALITY).unwrap();
        let model = ErrorModel::from_fit(&MORTALITY, &trend, alpha(0.0625)).unwrap();

        assert_relative_eq!(model.sigma(), 2.075972187165697, max_relative = 1e-9);
        assert_relative_eq!(model.half_width(1), 0.7696543958924615, max_relative = 1e-9);
        assert_relative_eq!(model.half_width(13), 1.059555637352505, max_relative = 1e-9);
    }

    #[test]
    fn half_width_grows_with_horizon() {
        let trend = quadratic_trend_fit(&MORTALITY).unwrap();
        let model = ErrorModel::from_fit(&MORTALITY, &trend, alpha(0.3)).unwrap();

        let widths: Vec<f64> = (1..=13).map(|j| model.half_width(j)).collect();
        assert!(widths.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn larger_alpha_widens_interval() {
        let trend = quadratic_trend_fit(&MORTALITY).unwrap();
        let narrow = ErrorModel::from_fit(&MORTALITY, &trend, alpha(0.1)).unwrap();
        let wide = ErrorModel::from_fit(&MORTALITY, &trend, alpha(0.5)).unwrap();

        assert!(wide.half_width(1) > narrow.half_width(1));
    }

    #[test]
    fn exact_trend_has_zero_width() {
        let values: Vec<f64> = (1..=10).map(|t| 3.0 - (t as f64)).collect();
        let trend = quadratic_trend_fit(&values).unwrap();
        let model = ErrorModel::from_fit(&values, &trend, alpha(0.2)).unwrap();

        assert!(model.sigma() < 1e-9);
        assert!(model.half_width(13) < 1e-9);
    }

    #[test]
    fn needs_two_observations() {
        let trend = TrendCoefficients::new(1.0, 0.0, 0.0);
        assert_eq!(
            ErrorModel::from_fit(&[1.0], &trend, alpha(0.2)),
            Err(ForecastError::InsufficientData { needed: 2, got: 1 })
        );
    }
}
