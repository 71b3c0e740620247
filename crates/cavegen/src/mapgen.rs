//! Cellular-automaton cave generation split into one submodule per pipeline stage.
//!
//! Stage order: [`seed_grid`] → [`smooth`] → [`find_regions`] → [`prune_small_regions`]
//! → [`find_regions`] → [`connect_regions`] → [`export_tiles`]. Only the first stage
//! draws randomness; every later stage is a pure function of the grid it is given.

mod automaton;
mod connector;
mod export;
mod generator;
mod grid;
mod initializer;
mod model;
mod pruning;
mod regions;
mod rng;

pub use automaton::{SmoothingRule, smooth, wall_neighbor_count};
pub use connector::{
    ConnectOutcome, carve_corridor, connect_regions, corridor_path, nearest_region_pair,
};
pub use export::{TileMap, export_tiles};
pub use generator::CaveGenerator;
pub use grid::CellGrid;
pub use initializer::seed_grid;
pub use model::{GeneratedCave, GenerationStats};
pub use pruning::{PruneOutcome, prune_small_regions};
pub use regions::{Region, find_regions, squared_distance};
pub use rng::cave_rng;

use crate::config::CaveConfig;
use crate::error::GenerationError;

/// Validates `config` and generates one cave from it.
pub fn generate_cave(config: &CaveConfig) -> Result<GeneratedCave, GenerationError> {
    Ok(CaveGenerator::new(config)?.generate())
}
