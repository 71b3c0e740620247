//! Generation parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBOR_THRESHOLD: u8 = 8;

/// Immutable input record for one cave generation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaveConfig {
    pub width: usize,
    pub height: usize,
    pub iterations: u32,
    pub initial_wall_probability: f64,
    /// A Floor cell turns to Wall when at least this many neighbors are Wall.
    pub birth_threshold: u8,
    /// A Wall cell stays Wall when at least this many neighbors are Wall.
    pub death_threshold: u8,
    /// `None` draws a fresh runtime seed once per generation.
    pub seed: Option<u64>,
    /// Treat off-grid neighbors as Wall during smoothing.
    pub edge_is_wall: bool,
    pub connect_caves: bool,
    pub min_cave_size: usize,
    pub wall_tile_id: u32,
    pub floor_tile_id: u32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            iterations: 8,
            initial_wall_probability: 0.40,
            birth_threshold: 5,
            death_threshold: 2,
            seed: None,
            edge_is_wall: true,
            connect_caves: true,
            min_cave_size: 20,
            wall_tile_id: 1,
            floor_tile_id: 0,
        }
    }
}

impl CaveConfig {
    /// Returns a normalized copy, or the first reason this config cannot be used.
    ///
    /// Dimensions and thresholds are rejected when out of range. The probability is
    /// clamped into `[0, 1]` and `min_cave_size` is raised to at least 1.
    pub fn validated(&self) -> Result<Self, ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyDimension { width, height });
        }
        if i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
            || width.checked_mul(height).is_none()
        {
            return Err(ConfigError::DimensionTooLarge { width, height });
        }
        check_threshold("birth", self.birth_threshold)?;
        check_threshold("death", self.death_threshold)?;
        if self.initial_wall_probability.is_nan() {
            return Err(ConfigError::InvalidProbability);
        }

        Ok(Self {
            initial_wall_probability: self.initial_wall_probability.clamp(0.0, 1.0),
            min_cave_size: self.min_cave_size.max(1),
            ..self.clone()
        })
    }
}

fn check_threshold(name: &'static str, value: u8) -> Result<(), ConfigError> {
    if value > MAX_NEIGHBOR_THRESHOLD {
        return Err(ConfigError::ThresholdOutOfRange { name, value });
    }
    Ok(())
}
