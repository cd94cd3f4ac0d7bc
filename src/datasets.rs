//! Reference datasets.
//!
//! Ten annual observations each, labeled 2004–2013 (base period 2003), with
//! the smoothing parameter they are usually run at.

use crate::core::{ObservationSeries, SERIES_LENGTH};

/// Smoothing parameter used with both datasets.
pub const REFERENCE_ALPHA: f64 = 0.0625;

/// Base period of both datasets.
pub const REFERENCE_BASE_PERIOD: i32 = 2003;

/// Declining mortality rate.
pub const MORTALITY: [f64; SERIES_LENGTH] = [
    75.42, 77.87, 70.76, 67.83, 68.59, 67.12, 62.6, 59.32, 61.69, 54.55,
];

/// Rising, then saturating, morbidity rate.
pub const MORBIDITY: [f64; SERIES_LENGTH] = [
    196.4, 232.4, 285.0, 315.6, 338.4, 308.7, 330.5, 332.3, 340.4, 350.9,
];

/// [`MORTALITY`] as a ready-to-forecast series.
pub fn mortality() -> ObservationSeries {
    ObservationSeries::from_known(MORTALITY)
}

/// [`MORBIDITY`] as a ready-to-forecast series.
pub fn morbidity() -> ObservationSeries {
    ObservationSeries::from_known(MORBIDITY)
}
