//! Triple exponential smoothing statistics.

/// First, second and third order smoothed statistics `(S1, S2, S3)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothingState {
    /// Single-smoothed statistic.
    pub s1: f64,
    /// Double-smoothed statistic.
    pub s2: f64,
    /// Triple-smoothed statistic.
    pub s3: f64,
}

impl SmoothingState {
    /// Build a state from its three statistics.
    pub fn new(s1: f64, s2: f64, s3: f64) -> Self {
        Self { s1, s2, s3 }
    }

    /// True if none of the statistics is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.s1.is_finite() && self.s2.is_finite() && self.s3.is_finite()
    }
}
