//! Error types for the `emitter-coverage` crate.
//!
//! [`CoverageError`] covers every failure between asking the engine for
//! primes and writing a finished plot to disk.

use crate::config::ConfigError;
use crate::render::PlotKind;

/// Errors that can occur while deriving or rendering coverage views.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    /// The prime engine rejected the limit or overflowed.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: emitter_engine::EngineError,
    },

    /// The limit is too large to index or plot on this platform.
    #[error("limit {limit} is too large for coverage views")]
    LimitTooLarge {
        /// The offending limit.
        limit: u64,
    },

    /// A plot could not be drawn.
    #[error("failed to render {plot}: {message}")]
    Render {
        /// Which plot failed.
        plot: PlotKind,
        /// Description of the drawing failure.
        message: String,
    },

    /// Writing output to disk failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Summary serialization failed.
    #[error("serde error: {source}")]
    Serde {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// One or more plots did not render.
    #[error("{failed} of {total} plots failed to render")]
    PlotsFailed {
        /// Number of failed plots.
        failed: usize,
        /// Number of plots attempted.
        total: usize,
    },
}
