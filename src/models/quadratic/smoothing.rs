//! Triple exponential smoothing operators.
//!
//! ```text
//! Backward initial values (β = 1 - α):
//!   S0_1 = a0 -  a1·β/α +  a2·β(2 - α) / (2α²)
//!   S0_2 = a0 - 2a1·β/α +  a2·β(3 - 2α) / α²
//!   S0_3 = a0 - 3a1·β/α + 3a2·β(4 - 3α) / (2α²)
//!
//! First smoothed statistics:
//!   S1 = α·trend(1) + β·S0_1
//!   S2 = α·S1       + β·S0_2
//!   S3 = α·S2       + β·S0_3
//!
//! Coefficient recovery:
//!   a0 = 3(S1 - S2) + S3
//!   a1 = α·[(6 - 5α)S1 - 2(5 - 4α)S2 + (4 - 3α)S3] / (2β²)
//!   a2 = α²(S1 - 2S2 + S3) / β²
//! ```

use super::SmoothingParameter;
use crate::core::{AdaptiveCoefficients, QuadraticTrend, SmoothingState};

/// Seed the smoothing statistics from a quadratic trend.
///
/// This is the single operator used both for the initial state (from the
/// least-squares fit) and for every state update inside the forecast loop
/// (from the step's re-derived coefficients). `trend(1)` is taken in the
/// trend's own form, see [`QuadraticTrend::value_at`].
pub fn initialize_state<T: QuadraticTrend>(trend: &T, alpha: SmoothingParameter) -> SmoothingState {
    let (a0, a1, a2) = trend.coefficients();
    let a = alpha.value();
    let b = alpha.complement();
    let a_sq = a * a;

    let s0_1 = a0 - a1 * b / a + a2 * b * (2.0 - a) / (2.0 * a_sq);
    let s0_2 = a0 - 2.0 * a1 * b / a + a2 * b * (3.0 - 2.0 * a) / a_sq;
    let s0_3 = a0 - 3.0 * a1 * b / a + 3.0 * a2 * b * (4.0 - 3.0 * a) / (2.0 * a_sq);

    let s1 = a * trend.value_at(1.0) + b * s0_1;
    let s2 = a * s1 + b * s0_2;
    let s3 = a * s2 + b * s0_3;

    SmoothingState::new(s1, s2, s3)
}

/// Recover quadratic trend coefficients from the smoothed statistics.
pub fn derive_coefficients(
    state: &SmoothingState,
    alpha: SmoothingParameter,
) -> AdaptiveCoefficients {
    let SmoothingState { s1, s2, s3 } = *state;
    let a = alpha.value();
    let b_sq = alpha.complement().powi(2);

    let a0 = 3.0 * (s1 - s2) + s3;
    let remp = (6.0 - 5.0 * a) * s1 - 2.0 * (5.0 - 4.0 * a) * s2 + (4.0 - 3.0 * a) * s3;
    let a1 = remp * a / (2.0 * b_sq);
    let a2 = (s1 - 2.0 * s2 + s3) * a * a / b_sq;

    AdaptiveCoefficients::new(a0, a1, a2)
}
