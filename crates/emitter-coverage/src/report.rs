//! One visualizer run: a single engine call, then three independent plots.
//!
//! The plots share only the immutable prime list. Each one derives its own
//! view, renders into memory, and is written to disk only once complete. A
//! failing plot is recorded in the report and the remaining plots continue.

use std::path::{Path, PathBuf};

use emitter_engine::{Sieve, SieveStats};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::VisualizerConfig;
use crate::coverage::{CoverageMatrix, prime_gaps, prime_indicator};
use crate::error::CoverageError;
use crate::render::{PlotKind, render_gaps, render_heatmap, render_scatter};

/// File name of the JSON summary written next to the plots.
pub const SUMMARY_FILE: &str = "summary.json";

/// Result of rendering one plot.
#[derive(Debug)]
pub struct PlotOutcome {
    /// Which plot this is.
    pub kind: PlotKind,
    /// Path of the written SVG, or the error that stopped it.
    pub result: Result<PathBuf, CoverageError>,
}

/// Serializable overview of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    /// Upper bound the engine ran with.
    pub limit: u64,
    /// Number of primes found.
    pub prime_count: usize,
    /// Largest prime found, if any.
    pub largest_prime: Option<u64>,
    /// Largest gap between consecutive primes, if there are two or more.
    pub largest_gap: Option<u64>,
    /// Engine work counters.
    pub stats: SieveStats,
    /// Plots that rendered successfully.
    pub rendered: Vec<PlotKind>,
    /// Plots that failed, with the reason.
    pub failed: Vec<(PlotKind, String)>,
}

/// Everything a visualizer run produced.
#[derive(Debug)]
pub struct CoverageReport {
    /// Run overview.
    pub summary: CoverageSummary,
    /// Per-plot outcomes, in [`PlotKind::ALL`] order.
    pub outcomes: Vec<PlotOutcome>,
}

impl CoverageReport {
    /// Number of plots that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Write [`CoverageSummary`] as pretty JSON into `dir`.
    pub fn write_summary(&self, dir: &Path) -> Result<PathBuf, CoverageError> {
        let path = dir.join(SUMMARY_FILE);
        let json = serde_json::to_string_pretty(&self.summary)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

/// Render a single plot to an SVG string from the shared prime list.
pub fn render_plot(
    kind: PlotKind,
    primes: &[u64],
    limit: u64,
    config: &VisualizerConfig,
) -> Result<String, CoverageError> {
    match kind {
        PlotKind::Heatmap => {
            let matrix = CoverageMatrix::from_primes(primes, limit)?;
            render_heatmap(&matrix, config.heatmap)
        }
        PlotKind::Scatter => {
            let indicator = prime_indicator(primes, limit);
            render_scatter(&indicator, limit, config.scatter)
        }
        PlotKind::Gaps => render_gaps(primes, limit, config.gaps),
    }
}

/// Run the engine once and render every plot into `config.output_dir`.
///
/// # Errors
///
/// Fails as a whole only if the engine fails or the output directory cannot
/// be created. Individual plot failures are reported in
/// [`CoverageReport::outcomes`].
pub fn render_all(config: &VisualizerConfig) -> Result<CoverageReport, CoverageError> {
    let run = emitter_engine::sieve(config.limit)?;
    info!(
        limit = run.limit,
        primes = run.primes.len(),
        "prime list ready"
    );

    let dir = Path::new(&config.output_dir);
    std::fs::create_dir_all(dir)?;

    let outcomes: Vec<PlotOutcome> = PlotKind::ALL
        .iter()
        .map(|&kind| {
            let result = render_plot(kind, &run.primes, run.limit, config)
                .and_then(|svg| write_plot(dir, kind, &svg));
            match &result {
                Ok(path) => info!(plot = %kind, path = %path.display(), "plot written"),
                Err(e) => warn!(plot = %kind, error = %e, "plot failed"),
            }
            PlotOutcome { kind, result }
        })
        .collect();

    Ok(CoverageReport {
        summary: summarize(&run, &outcomes),
        outcomes,
    })
}

fn write_plot(dir: &Path, kind: PlotKind, svg: &str) -> Result<PathBuf, CoverageError> {
    let path = dir.join(kind.file_name());
    std::fs::write(&path, svg)?;
    Ok(path)
}

fn summarize(run: &Sieve, outcomes: &[PlotOutcome]) -> CoverageSummary {
    CoverageSummary {
        limit: run.limit,
        prime_count: run.primes.len(),
        largest_prime: run.primes.last().copied(),
        largest_gap: prime_gaps(&run.primes).into_iter().max(),
        stats: run.stats,
        rendered: outcomes
            .iter()
            .filter(|o| o.result.is_ok())
            .map(|o| o.kind)
            .collect(),
        failed: outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.kind, e.to_string())))
            .collect(),
    }
}
