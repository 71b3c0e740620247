//! Error types for configuration validation, configuration loading, and generation.
//!
//! Only configuration can fail. Once a config validates, every pipeline stage is a
//! total function of its inputs, so there is no runtime failure variant.

use std::io;

use thiserror::Error;
use toml::de::Error as TomlError;

/// Why a [`crate::CaveConfig`] was rejected before generation started.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },
    /// Width or height cannot be addressed with `i32` coordinates, or the cell
    /// count overflows `usize`.
    #[error("grid dimensions {width}x{height} are too large")]
    DimensionTooLarge { width: usize, height: usize },
    /// A birth or death threshold is above the 8-cell Moore neighborhood.
    #[error("{name} threshold must be in 0..=8, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: u8 },
    /// The initial wall probability is NaN.
    #[error("initial wall probability must be a number")]
    InvalidProbability,
}

/// Describes why a configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// Underlying I/O failure.
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid TOML or does not match the config schema.
    #[error("invalid config file: {0}")]
    Parse(#[from] TomlError),
}

/// Returned by [`crate::CaveGenerator`] when generation cannot start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
