//! Configuration loading for the coverage visualizer.
//!
//! The optional `emitter-config.yaml` in the working directory mirrors
//! [`VisualizerConfig`]. Every field has a default, so an empty or partial
//! file is valid. Two environment variables override the file:
//!
//! - `EMITTER_LIMIT` overrides `limit`
//! - `EMITTER_OUTPUT_DIR` overrides `output_dir`

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidOverride {
        /// The environment variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level visualizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VisualizerConfig {
    /// Upper bound handed to the prime engine.
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Directory the SVG files and summary are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Size of the coverage heatmap.
    #[serde(default = "default_heatmap_size")]
    pub heatmap: PlotSize,

    /// Size of the prime position scatter plot.
    #[serde(default = "default_strip_size")]
    pub scatter: PlotSize,

    /// Size of the prime gap plot.
    #[serde(default = "default_strip_size")]
    pub gaps: PlotSize,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            output_dir: default_output_dir(),
            heatmap: default_heatmap_size(),
            scatter: default_strip_size(),
            gaps: default_strip_size(),
            logging: LoggingConfig::default(),
        }
    }
}

impl VisualizerConfig {
    /// Load configuration from a YAML file. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if it is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load `path` if it exists (defaults otherwise), then apply the
    /// `EMITTER_LIMIT` and `EMITTER_OUTPUT_DIR` environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_overrides(
            path,
            std::env::var("EMITTER_LIMIT").ok(),
            std::env::var("EMITTER_OUTPUT_DIR").ok(),
        )
    }

    /// Load `path` if it exists (defaults otherwise), then apply
    /// already-read override values.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::from_file`] and [`Self::apply_overrides`].
    pub fn load_with_overrides(
        path: &Path,
        limit: Option<String>,
        output_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_overrides(limit, output_dir)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply already-read override values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `limit` does not parse as
    /// an integer. A non-positive integer is accepted here and rejected by
    /// the engine.
    pub fn apply_overrides(
        &mut self,
        limit: Option<String>,
        output_dir: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = limit {
            self.limit = raw
                .trim()
                .parse()
                .map_err(|_err| ConfigError::InvalidOverride {
                    name: "EMITTER_LIMIT",
                    value: raw,
                })?;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        Ok(())
    }
}

/// Pixel dimensions of one plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlotSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PlotSize {
    /// The size as a `(width, height)` tuple.
    pub const fn dimensions(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is not set (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_limit() -> i64 {
    500
}

fn default_output_dir() -> String {
    "plots".to_owned()
}

const fn default_heatmap_size() -> PlotSize {
    PlotSize {
        width: 1200,
        height: 600,
    }
}

const fn default_strip_size() -> PlotSize {
    PlotSize {
        width: 1200,
        height: 400,
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
