//! Quickstart example demonstrating basic usage of quadratic-es.
//!
//! Run with: cargo run --example quickstart
//! Set RUST_LOG=quadratic_es=debug to see the fit diagnostics.

use quadratic_es::datasets::{self, REFERENCE_ALPHA, REFERENCE_BASE_PERIOD};
use quadratic_es::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadratic_es=info".into()),
        )
        .init();

    println!("=== quadratic-es Quickstart ===\n");

    let config = ForecastConfig::new(REFERENCE_ALPHA).with_base_period(REFERENCE_BASE_PERIOD);

    for (name, series) in [
        ("Mortality", datasets::mortality()),
        ("Morbidity", datasets::morbidity()),
    ] {
        let result = forecast_with_config(&series, &config)?;

        println!("--- {} (alpha = {}) ---", name, result.alpha());

        let trend = result.trend();
        println!(
            "Trend: y = {:.4} + {:.4}·t + {:.4}·t²   (sigma = {:.4})\n",
            trend.a0,
            trend.a1,
            trend.a2,
            result.sigma()
        );

        // Tab-separated, ready to paste into a spreadsheet
        println!("Period\tS1\tS2\tS3\tA0\tA1\tA2\tForecast\tError\tUpper\tLower");
        for row in result.rows() {
            println!(
                "{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
                row.period,
                row.state.s1,
                row.state.s2,
                row.state.s3,
                row.coefficients.a0,
                row.coefficients.a1,
                row.coefficients.a2,
                row.forecast,
                row.error,
                row.upper,
                row.lower,
            );
        }

        let summary = result.summary();
        println!(
            "\nForecast range [{:.2}, {:.2}], mean {:.2}, std-dev {:.2}",
            summary.forecast_min,
            summary.forecast_max,
            summary.forecast_mean,
            summary.forecast_std_dev
        );
        println!(
            "Interval half-width mean {:.2}, range [{:.2}, {:.2}]\n",
            summary.error_mean, summary.error_min, summary.error_max
        );
    }

    Ok(())
}
