//! Ordinary Least Squares quadratic trend estimation.
//!
//! Fits `y = a0 + a1·t + a2·t²` against the period index `t = 1..=n` by
//! solving the normal equations with a Cholesky decomposition.

use crate::core::TrendCoefficients;
use crate::error::{ForecastError, Result};

/// Minimum number of observations for a quadratic fit.
pub const MIN_TREND_POINTS: usize = 3;

/// Fit a quadratic trend to `values` indexed by `t = 1..=values.len()`.
///
/// # Errors
/// * [`ForecastError::InsufficientData`] with fewer than three points
/// * [`ForecastError::NumericInstability`] if the normal equations cannot be
///   solved or the coefficients are not finite
pub fn quadratic_trend_fit(values: &[f64]) -> Result<TrendCoefficients> {
    let n = values.len();
    if n < MIN_TREND_POINTS {
        return Err(ForecastError::InsufficientData {
            needed: MIN_TREND_POINTS,
            got: n,
        });
    }

    // X'X[i][j] = sum t^(i+j), X'y[i] = sum t^i * y
    let mut power_sums = [0.0; 5];
    let mut xty = [0.0; 3];

    for (i, &y) in values.iter().enumerate() {
        let t = (i + 1) as f64;
        let mut tp = 1.0;
        for (k, sum) in power_sums.iter_mut().enumerate() {
            *sum += tp;
            if k < 3 {
                xty[k] += tp * y;
            }
            tp *= t;
        }
    }

    let xtx: Vec<Vec<f64>> = (0..3)
        .map(|i| (0..3).map(|j| power_sums[i + j]).collect())
        .collect();

    let beta = solve_symmetric(&xtx, &xty).ok_or_else(|| {
        ForecastError::NumericInstability(
            "quadratic trend fit failed: matrix not positive definite".into(),
        )
    })?;

    let trend = TrendCoefficients::new(beta[0], beta[1], beta[2]);
    if !trend.is_finite() {
        return Err(ForecastError::NumericInstability(format!(
            "quadratic trend fit produced non-finite coefficients {:?}",
            beta
        )));
    }

    Ok(trend)
}

/// Solve symmetric positive definite system using Cholesky decomposition.
///
/// Solves A @ x = b where A is symmetric positive definite.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Cholesky decomposition A = L @ L'
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}

/// Trend value at each observed period.
pub fn trend_fitted(values: &[f64], trend: &TrendCoefficients) -> Vec<f64> {
    (1..=values.len()).map(|t| trend.evaluate(t as f64)).collect()
}

/// Residuals of the trend fit, taken as `trend(t) - y_t`.
pub fn trend_residuals(values: &[f64], trend: &TrendCoefficients) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, y)| trend.evaluate((i + 1) as f64) - y)
        .collect()
}
