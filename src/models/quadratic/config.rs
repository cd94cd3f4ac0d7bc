//! Smoothing parameter and run configuration.

use crate::error::{ForecastError, Result};

/// Smoothing parameter α, guaranteed to lie strictly inside (0, 1).
///
/// The initialization formulas divide by α² and the coefficient recovery
/// divides by (1 - α)², so the boundary values are rejected here rather
/// than at the point of division.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct SmoothingParameter(f64);

impl SmoothingParameter {
    /// Validate `alpha ∈ (0, 1)`.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidSmoothingParameter(alpha));
        }
        Ok(Self(alpha))
    }

    /// Validate `alpha ∈ (0, 1)` and additionally keep it at least `epsilon`
    /// away from either boundary.
    pub fn with_margin(alpha: f64, epsilon: f64) -> Result<Self> {
        let param = Self::new(alpha)?;
        if alpha < epsilon || 1.0 - alpha < epsilon {
            return Err(ForecastError::NumericInstability(format!(
                "alpha {} is within {} of the (0, 1) boundary",
                alpha, epsilon
            )));
        }
        Ok(param)
    }

    /// Raw α.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Complement `1 - α`.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for SmoothingParameter {
    type Error = ForecastError;

    fn try_from(alpha: f64) -> Result<Self> {
        Self::new(alpha)
    }
}

impl From<SmoothingParameter> for f64 {
    fn from(alpha: SmoothingParameter) -> Self {
        alpha.0
    }
}

/// Configuration for a quadratic exponential smoothing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForecastConfig {
    /// Smoothing parameter, must lie in (0, 1).
    pub alpha: f64,
    /// Label of the period preceding the first observation.
    /// Observations are labeled `base_period + 1 ..`, forecast rows likewise.
    pub base_period: i32,
    /// Alpha values closer than this to 0 or 1 are rejected as unstable.
    pub boundary_epsilon: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0625,
            base_period: 2003,
            boundary_epsilon: 1e-6,
        }
    }
}

impl ForecastConfig {
    /// Default configuration with the given α.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            ..Default::default()
        }
    }

    /// Replace the smoothing parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the label of the period preceding the first observation.
    pub fn with_base_period(mut self, base_period: i32) -> Self {
        self.base_period = base_period;
        self
    }

    /// Set the minimum distance α must keep from 0 and 1.
    pub fn with_boundary_epsilon(mut self, epsilon: f64) -> Self {
        self.boundary_epsilon = epsilon;
        self
    }

    /// Check the configuration and return the validated smoothing parameter.
    pub fn validate(&self) -> Result<SmoothingParameter> {
        if !self.boundary_epsilon.is_finite()
            || self.boundary_epsilon < 0.0
            || self.boundary_epsilon >= 0.5
        {
            return Err(ForecastError::InvalidParameter(format!(
                "boundary_epsilon must lie in [0, 0.5), got {}",
                self.boundary_epsilon
            )));
        }
        SmoothingParameter::with_margin(self.alpha, self.boundary_epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_parameter_rejects_boundaries() {
        for alpha in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SmoothingParameter::new(alpha),
                Err(ForecastError::InvalidSmoothingParameter(_))
            ));
        }
    }

    #[test]
    fn smoothing_parameter_accepts_interior() {
        let alpha = SmoothingParameter::try_from(0.25).unwrap();
        assert_eq!(alpha.value(), 0.25);
        assert_eq!(alpha.complement(), 0.75);
    }

    #[test]
    fn margin_flags_near_boundary_as_unstable() {
        assert!(matches!(
            SmoothingParameter::with_margin(1e-9, 1e-6),
            Err(ForecastError::NumericInstability(_))
        ));
        assert!(matches!(
            SmoothingParameter::with_margin(1.0 - 1e-9, 1e-6),
            Err(ForecastError::NumericInstability(_))
        ));
        // Out-of-range still reports the parameter error first
        assert!(matches!(
            SmoothingParameter::with_margin(1.5, 1e-6),
            Err(ForecastError::InvalidSmoothingParameter(_))
        ));
        assert!(SmoothingParameter::with_margin(0.5, 1e-6).is_ok());
    }

    #[test]
    fn config_defaults_match_reference_run() {
        let config = ForecastConfig::default();
        assert_eq!(config.alpha, 0.0625);
        assert_eq!(config.base_period, 2003);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_sets_fields() {
        let config = ForecastConfig::new(0.3)
            .with_base_period(1990)
            .with_boundary_epsilon(0.01)
            .with_alpha(0.4);
        assert_eq!(config.alpha, 0.4);
        assert_eq!(config.base_period, 1990);
        assert_eq!(config.boundary_epsilon, 0.01);
    }

    #[test]
    fn config_rejects_bad_epsilon() {
        let config = ForecastConfig::new(0.3).with_boundary_epsilon(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ForecastError::InvalidParameter(_))
        ));
        let config = ForecastConfig::new(0.3).with_boundary_epsilon(0.5);
        assert!(config.validate().is_err());
    }
}
