pub mod config;
pub mod config_file;
pub mod error;
pub mod mapgen;
pub mod seed;
pub mod types;

pub use config::CaveConfig;
pub use config_file::load_config_from_file;
pub use error::{ConfigError, ConfigLoadError, GenerationError};
pub use mapgen::{CaveGenerator, GeneratedCave, GenerationStats, Region, TileMap, generate_cave};
pub use seed::SeedChoice;
pub use types::*;
