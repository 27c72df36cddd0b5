//! Coverage views and static plots of the emitter sieve.
//!
//! The engine hands over an immutable prime list. This crate derives three
//! read-only views from it and renders each one as an SVG plot:
//!
//! | View | Shape | Plot |
//! |------|-------|------|
//! | [`CoverageMatrix`] | primes x candidates `2..=limit` | heatmap |
//! | [`prime_indicator`] | candidates `2..=limit` | scatter |
//! | [`prime_gaps`] | consecutive prime pairs | line |
//!
//! # Modules
//!
//! - [`config`] -- [`VisualizerConfig`] loaded from `emitter-config.yaml`.
//! - [`coverage`] -- The derived views.
//! - [`render`] -- In-memory SVG rendering with `plotters`.
//! - [`report`] -- One full run with per-plot isolation and a JSON summary.
//! - [`error`] -- [`CoverageError`].

pub mod config;
pub mod coverage;
pub mod error;
pub mod render;
pub mod report;

pub use config::{ConfigError, PlotSize, VisualizerConfig};
pub use coverage::{CoverageMatrix, gap_points, multiplicative_waves, prime_gaps, prime_indicator};
pub use error::CoverageError;
pub use render::PlotKind;
pub use report::{CoverageReport, CoverageSummary, PlotOutcome, render_all};
