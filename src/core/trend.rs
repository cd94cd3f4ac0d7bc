//! Quadratic trend coefficient types.
//!
//! Two parameterizations of a quadratic trend appear in the method:
//!
//! - [`TrendCoefficients`]: the least-squares fit `y(t) = a0 + a1·t + a2·t²`
//!   over the observed periods.
//! - [`AdaptiveCoefficients`]: the coefficients recovered from the smoothed
//!   statistics at each forecast step, in the forecasting form
//!   `F(j) = a0 + a1·j + ½·a2·j²`.
//!
//! Both feed the same smoothing operator through [`QuadraticTrend`].

/// A quadratic trend that can seed the triple smoothing state.
pub trait QuadraticTrend {
    /// Coefficients `(a0, a1, a2)` as stored.
    fn coefficients(&self) -> (f64, f64, f64);

    /// Trend value `t` periods from the origin, in this trend's own form.
    fn value_at(&self, t: f64) -> f64;
}

/// Least-squares quadratic fit over period index `t = 1..=n`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendCoefficients {
    /// Intercept.
    pub a0: f64,
    /// Linear coefficient.
    pub a1: f64,
    /// Quadratic coefficient.
    pub a2: f64,
}

impl TrendCoefficients {
    /// Coefficients of `a0 + a1·t + a2·t²`.
    pub fn new(a0: f64, a1: f64, a2: f64) -> Self {
        Self { a0, a1, a2 }
    }

    /// Evaluate `a0 + a1·t + a2·t²`.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t * t
    }

    /// Evaluate the trend at each integer period in `periods`.
    ///
    /// Used to draw the fitted curve over observed and forecast periods alike.
    pub fn curve(&self, periods: std::ops::RangeInclusive<usize>) -> Vec<f64> {
        periods.map(|t| self.evaluate(t as f64)).collect()
    }

    /// True if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.a0.is_finite() && self.a1.is_finite() && self.a2.is_finite()
    }
}

impl QuadraticTrend for TrendCoefficients {
    fn coefficients(&self) -> (f64, f64, f64) {
        (self.a0, self.a1, self.a2)
    }

    fn value_at(&self, t: f64) -> f64 {
        self.evaluate(t)
    }
}

/// Trend coefficients re-derived from the smoothing state at one forecast step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveCoefficients {
    /// Level at the current step.
    pub a0: f64,
    /// Slope per period.
    pub a1: f64,
    /// Curvature; enters the forecast halved.
    pub a2: f64,
}

impl AdaptiveCoefficients {
    /// Coefficients of `a0 + a1·j + ½·a2·j²`.
    pub fn new(a0: f64, a1: f64, a2: f64) -> Self {
        Self { a0, a1, a2 }
    }

    /// Forecast `j` periods ahead: `a0 + a1·j + ½·a2·j²`.
    pub fn forecast(&self, j: f64) -> f64 {
        self.a0 + self.a1 * j + 0.5 * self.a2 * j * j
    }

    /// True if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.a0.is_finite() && self.a1.is_finite() && self.a2.is_finite()
    }
}

impl QuadraticTrend for AdaptiveCoefficients {
    fn coefficients(&self) -> (f64, f64, f64) {
        (self.a0, self.a1, self.a2)
    }

    fn value_at(&self, t: f64) -> f64 {
        self.forecast(t)
    }
}
