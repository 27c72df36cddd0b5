//! Coverage visualizer binary.
//!
//! Loads `emitter-config.yaml` (or defaults), runs the prime engine once,
//! and writes the coverage heatmap, prime position scatter, and prime gap
//! plot as SVG files plus a `summary.json` into the output directory.
//!
//! # Startup Sequence
//!
//! 1. Load configuration and apply environment overrides
//! 2. Initialize structured logging (tracing)
//! 3. Render every plot independently
//! 4. Write the summary and report failed plots

use std::path::Path;

use emitter_coverage::{CoverageError, VisualizerConfig, render_all};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "emitter-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the engine rejects the
/// limit, the output directory is unusable, or any plot failed.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = VisualizerConfig::load(Path::new(CONFIG_FILE))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        limit = config.limit,
        output_dir = config.output_dir,
        "emitter-coverage starting"
    );

    let report = render_all(&config)?;
    let summary_path = report.write_summary(Path::new(&config.output_dir))?;

    info!(
        primes = report.summary.prime_count,
        largest_gap = ?report.summary.largest_gap,
        rendered = report.summary.rendered.len(),
        summary = %summary_path.display(),
        "emitter-coverage done"
    );

    let failed = report.failed_count();
    if failed > 0 {
        return Err(CoverageError::PlotsFailed {
            failed,
            total: report.outcomes.len(),
        }
        .into());
    }

    Ok(())
}

