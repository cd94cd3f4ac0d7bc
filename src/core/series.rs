//! ObservationSeries: the fixed-length input to the quadratic smoother.

use super::SERIES_LENGTH;
use crate::error::{ForecastError, Result};

/// An ordered, immutable sequence of exactly [`SERIES_LENGTH`] observations.
///
/// Values are indexed by period `t = 1..=SERIES_LENGTH`; the calendar
/// labeling of those periods is left to the caller (see [`periods`](Self::periods)).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct ObservationSeries {
    values: Vec<f64>,
}

impl ObservationSeries {
    /// Create a series, checking the length and that every value is finite.
    ///
    /// # Errors
    /// * [`ForecastError::InvalidSeriesLength`] if `values.len() != SERIES_LENGTH`
    /// * [`ForecastError::NonFiniteObservation`] if any value is NaN or infinite
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() != SERIES_LENGTH {
            return Err(ForecastError::InvalidSeriesLength {
                expected: SERIES_LENGTH,
                got: values.len(),
            });
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::NonFiniteObservation { index });
        }

        Ok(Self { values })
    }

    /// Wrap values already known to be a valid series.
    pub(crate) fn from_known(values: [f64; SERIES_LENGTH]) -> Self {
        debug_assert!(values.iter().all(|v| v.is_finite()));
        Self {
            values: values.to_vec(),
        }
    }

    /// Observed values in period order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations (always [`SERIES_LENGTH`]).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Period index `t` (1-based) paired with each observation.
    pub fn indexed(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &y)| ((i + 1) as f64, y))
    }

    /// Calendar labels for the observed periods: `base_period + 1 ..= base_period + n`.
    pub fn periods(&self, base_period: i32) -> Vec<i32> {
        (1..=self.values.len() as i32)
            .map(|t| base_period + t)
            .collect()
    }
}

impl TryFrom<Vec<f64>> for ObservationSeries {
    type Error = ForecastError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for ObservationSeries {
    type Error = ForecastError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl From<ObservationSeries> for Vec<f64> {
    fn from(series: ObservationSeries) -> Self {
        series.values
    }
}

impl AsRef<[f64]> for ObservationSeries {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
