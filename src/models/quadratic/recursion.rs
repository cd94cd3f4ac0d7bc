//! Recursive forecast loop.
//!
//! Each step re-derives trend coefficients from the current smoothing state,
//! forecasts `j` periods ahead, then re-seeds the state from those
//! coefficients. The state is never reset, so the update order matters:
//! coefficients come from the pre-update state, the row is emitted, and only
//! then is the state advanced.

use super::error_model::ErrorModel;
use super::smoothing::{derive_coefficients, initialize_state};
use super::SmoothingParameter;
use crate::core::{ForecastRow, SmoothingState, HORIZON};
use crate::error::{ForecastError, Result};
use tracing::trace;

/// State transition `(state, j) -> (row, next_state)`.
#[derive(Debug, Clone, Copy)]
pub struct RecursiveForecaster {
    alpha: SmoothingParameter,
    errors: ErrorModel,
    base_period: i32,
}

impl RecursiveForecaster {
    pub fn new(alpha: SmoothingParameter, errors: ErrorModel, base_period: i32) -> Self {
        Self {
            alpha,
            errors,
            base_period,
        }
    }

    /// Compute the row for horizon `step` and the state for the next step.
    pub fn step(
        &self,
        state: &SmoothingState,
        step: usize,
    ) -> Result<(ForecastRow, SmoothingState)> {
        let coefficients = derive_coefficients(state, self.alpha);
        let forecast = coefficients.forecast(step as f64);
        let error = self.errors.half_width(step);

        let row = ForecastRow {
            step,
            period: self.base_period + step as i32,
            state: *state,
            coefficients,
            forecast,
            error,
            upper: forecast + error,
            lower: forecast - error,
        };

        if !coefficients.is_finite() || !forecast.is_finite() || !error.is_finite() {
            return Err(ForecastError::NumericInstability(format!(
                "step {} produced non-finite output: {:?}",
                step, row
            )));
        }

        let next = initialize_state(&coefficients, self.alpha);
        if !next.is_finite() {
            return Err(ForecastError::NumericInstability(format!(
                "step {} produced non-finite smoothing state {:?}",
                step, next
            )));
        }

        trace!(step, forecast, error, ?next, "forecast step");

        Ok((row, next))
    }

    /// Unroll all [`HORIZON`] steps from `initial`.
    pub fn run(&self, initial: SmoothingState) -> Result<Vec<ForecastRow>> {
        let mut rows = Vec::with_capacity(HORIZON);
        let mut state = initial;

        for step in 1..=HORIZON {
            let (row, next) = self.step(&state, step)?;
            rows.push(row);
            state = next;
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrendCoefficients;
    use crate::utils::quadratic_trend_fit;
    use approx::assert_relative_eq;

    const MORTALITY: [f64; 10] = [
        75.42, 77.87, 70.76, 67.83, 68.59, 67.12, 62.6, 59.32, 61.69, 54.55,
    ];

    fn setup(alpha: f64) -> (RecursiveForecaster, SmoothingState) {
        let alpha = SmoothingParameter::new(alpha).unwrap();
        let trend = quadratic_trend_fit(&MORTALITY).unwrap();
        let errors = ErrorModel::from_fit(&MORTALITY, &trend, alpha).unwrap();
        let initial = initialize_state(&trend, alpha);
        (RecursiveForecaster::new(alpha, errors, 2003), initial)
    }

    #[test]
    fn first_step_uses_pre_update_state() {
        let (forecaster, initial) = setup(0.0625);
        let (row, next) = forecaster.step(&initial, 1).unwrap();

        assert_eq!(row.state, initial);
        assert_eq!(row.step, 1);
        assert_eq!(row.period, 2004);
        assert_relative_eq!(row.coefficients.a0, 76.58322414051415, max_relative = 1e-9);
        assert_relative_eq!(row.coefficients.a1, -2.0759466437137357, max_relative = 1e-9);
        assert_relative_eq!(row.coefficients.a2, -0.019964557994495508, max_relative = 1e-7);
        assert_relative_eq!(row.forecast, 74.49729521780317, max_relative = 1e-9);

        assert_relative_eq!(next.s1, 101.29420350970642, max_relative = 1e-9);
        assert_relative_eq!(next.s2, 123.5990862528482, max_relative = 1e-9);
        assert_relative_eq!(next.s3, 141.41194344722848, max_relative = 1e-9);
    }

    #[test]
    fn step_is_pure() {
        let (forecaster, initial) = setup(0.2);
        let first = forecaster.step(&initial, 3).unwrap();
        let second = forecaster.step(&initial, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn run_chains_steps() {
        let (forecaster, initial) = setup(0.0625);
        let rows = forecaster.run(initial).unwrap();

        assert_eq!(rows.len(), HORIZON);

        let mut state = initial;
        for (i, row) in rows.iter().enumerate() {
            let (expected, next) = forecaster.step(&state, i + 1).unwrap();
            assert_eq!(*row, expected);
            state = next;
        }
    }

    #[test]
    fn run_emits_symmetric_bounds() {
        let (forecaster, initial) = setup(0.4);
        for row in forecaster.run(initial).unwrap() {
            assert_relative_eq!(row.upper - row.forecast, row.error, epsilon = 1e-9);
            assert_relative_eq!(row.forecast - row.lower, row.error, epsilon = 1e-9);
        }
    }

    #[test]
    fn overflowing_state_is_reported() {
        let alpha = SmoothingParameter::new(0.5).unwrap();
        let trend = TrendCoefficients::new(1.0, 0.0, 0.0);
        let errors = ErrorModel::from_fit(&[1.0, 2.0, 3.0], &trend, alpha).unwrap();
        let forecaster = RecursiveForecaster::new(alpha, errors, 0);

        let state = SmoothingState::new(f64::MAX, -f64::MAX, f64::MAX);
        assert!(matches!(
            forecaster.step(&state, 1),
            Err(ForecastError::NumericInstability(_))
        ));
    }
}
