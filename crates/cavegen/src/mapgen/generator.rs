//! Cave generation orchestration: seed, smooth, label, prune, connect, export.

use tracing::{debug, debug_span, info};

use crate::config::CaveConfig;
use crate::error::GenerationError;
use crate::seed::SeedChoice;

use super::automaton::{SmoothingRule, smooth};
use super::connector::connect_regions;
use super::export::export_tiles;
use super::initializer::seed_grid;
use super::model::{GeneratedCave, GenerationStats};
use super::pruning::prune_small_regions;
use super::regions::find_regions;
use super::rng::cave_rng;

/// Generator bound to one validated [`CaveConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct CaveGenerator {
    config: CaveConfig,
}

impl CaveGenerator {
    /// Validates `config` up front so no randomness is drawn for a bad request.
    pub fn new(config: &CaveConfig) -> Result<Self, GenerationError> {
        Ok(Self { config: config.validated()? })
    }

    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Generates with the configured seed, or a freshly drawn one when none is set.
    /// The seed actually used is reported in [`GeneratedCave::seed`].
    pub fn generate(&self) -> GeneratedCave {
        self.generate_with_seed(SeedChoice::resolve(self.config.seed))
    }

    pub fn generate_with_seed(&self, seed: SeedChoice) -> GeneratedCave {
        let config = &self.config;
        let span = debug_span!(
            "cave_generation",
            width = config.width,
            height = config.height,
            seed = seed.value()
        );
        let _guard = span.enter();

        let mut rng = cave_rng(seed.value());
        let initial =
            seed_grid(config.width, config.height, config.initial_wall_probability, &mut rng);
        let initial_floor_cells = initial.floor_count();
        debug!(initial_floor_cells, "seeded initial grid");

        let mut grid = smooth(initial, config.iterations, SmoothingRule::from_config(config));
        debug!(iterations = config.iterations, floor_cells = grid.floor_count(), "smoothed grid");

        let regions = find_regions(&grid);
        let regions_before_pruning = regions.len();
        let pruned = prune_small_regions(&mut grid, &regions, config.min_cave_size);
        let mut regions = find_regions(&grid);
        debug!(
            regions_before_pruning,
            pruned_regions = pruned.regions_removed,
            pruned_cells = pruned.cells_removed,
            remaining_regions = regions.len(),
            "pruned small regions"
        );

        let mut corridors_carved = 0;
        if config.connect_caves && regions.len() > 1 {
            let outcome = connect_regions(&mut grid, regions);
            regions = outcome.regions;
            corridors_carved = outcome.corridors_carved;
            debug!(corridors_carved, remaining_regions = regions.len(), "connected regions");
        }

        let tiles = export_tiles(&grid, config.wall_tile_id, config.floor_tile_id);
        let stats = GenerationStats {
            initial_floor_cells,
            regions_before_pruning,
            pruned_regions: pruned.regions_removed,
            pruned_cells: pruned.cells_removed,
            corridors_carved,
            final_floor_cells: grid.floor_count(),
        };
        info!(
            regions = regions.len(),
            floor_cells = stats.final_floor_cells,
            corridors_carved,
            "generated cave"
        );

        GeneratedCave {
            seed,
            width: config.width,
            height: config.height,
            grid,
            tiles,
            regions,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::error::ConfigError;
    use crate::mapgen::CellGrid;
    use crate::types::{Cell, Pos};

    fn config(seed: u64) -> CaveConfig {
        CaveConfig { width: 48, height: 36, seed: Some(seed), ..CaveConfig::default() }
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let err = CaveGenerator::new(&CaveConfig { height: 0, ..config(1) })
            .expect_err("zero height should be rejected");
        assert_eq!(
            err,
            GenerationError::Config(ConfigError::EmptyDimension { width: 48, height: 0 })
        );
    }

    #[test]
    fn construction_keeps_the_normalized_config() {
        let raw = CaveConfig { initial_wall_probability: 1.5, min_cave_size: 0, ..config(3) };
        let generator = CaveGenerator::new(&raw).expect("valid config");
        assert_eq!(generator.config().initial_wall_probability, 1.0);
        assert_eq!(generator.config().min_cave_size, 1);
        assert_eq!(generator.config().seed, Some(3));
    }

    #[test]
    fn configured_seed_is_reported_back() {
        let generated = CaveGenerator::new(&config(77)).expect("valid config").generate();
        assert_eq!(generated.seed, SeedChoice::Configured(77));
    }

    #[test]
    fn missing_seed_is_drawn_and_replayable() {
        let generator = CaveGenerator::new(&CaveConfig { seed: None, ..config(0) })
            .expect("valid config");
        let first = generator.generate();
        assert!(matches!(first.seed, SeedChoice::Generated(_)));

        let replay = generator.generate_with_seed(SeedChoice::Configured(first.seed.value()));
        assert_eq!(first.canonical_bytes(), replay.canonical_bytes());
    }

    #[test]
    fn same_inputs_produce_byte_identical_output() {
        let a = CaveGenerator::new(&config(123_456)).expect("valid config").generate();
        let b = CaveGenerator::new(&config(123_456)).expect("valid config").generate();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn changing_the_seed_changes_the_output() {
        let a = CaveGenerator::new(&config(1)).expect("valid config").generate();
        let b = CaveGenerator::new(&config(2)).expect("valid config").generate();
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn stats_agree_with_the_output() {
        let generated = CaveGenerator::new(&config(9)).expect("valid config").generate();
        let stats = generated.stats;
        assert_eq!(stats.final_floor_cells, generated.floor_count());
        assert!(stats.pruned_cells >= stats.pruned_regions);
        // A corridor may cross a third cave, so carves can undershoot one per merge.
        let surviving = stats.regions_before_pruning - stats.pruned_regions;
        assert!(stats.corridors_carved <= surviving.saturating_sub(1));
        assert!(generated.regions.len() <= 1);
    }

    #[test]
    fn tiles_use_configured_identifiers() {
        let cfg = CaveConfig { wall_tile_id: 40, floor_tile_id: 7, ..config(5) };
        let generated = CaveGenerator::new(&cfg).expect("valid config").generate();
        for pos in generated.grid.positions() {
            let expected = match generated.cell_at(pos) {
                Cell::Wall => 40,
                Cell::Floor => 7,
            };
            assert_eq!(generated.tiles.tile_at(pos), Some(expected));
        }
    }

    #[test]
    fn disabled_connection_keeps_pruned_regions_apart() {
        let cfg = CaveConfig { connect_caves: false, min_cave_size: 1, ..config(31) };
        let generated = CaveGenerator::new(&cfg).expect("valid config").generate();
        assert_eq!(generated.stats.corridors_carved, 0);
        assert_eq!(generated.regions.len(), generated.stats.regions_before_pruning);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn connected_caves_form_a_single_region(
            seed in any::<u64>(),
            iterations in 0_u32..6,
            probability in 0.30_f64..0.55,
            min_cave_size in 1_usize..40,
        ) {
            let cfg = CaveConfig {
                width: 32,
                height: 24,
                iterations,
                initial_wall_probability: probability,
                min_cave_size,
                seed: Some(seed),
                ..CaveConfig::default()
            };
            let generated = CaveGenerator::new(&cfg).expect("valid config").generate();

            prop_assert_eq!(generated.grid.width(), 32);
            prop_assert_eq!(generated.grid.height(), 24);
            if generated.floor_count() > 0 {
                prop_assert_eq!(generated.regions.len(), 1);
                prop_assert_eq!(generated.regions[0].size(), generated.floor_count());
                prop_assert!(all_floor_cells_connected(&generated.grid));
            } else {
                prop_assert!(generated.regions.is_empty());
            }
        }
    }

    fn all_floor_cells_connected(grid: &CellGrid) -> bool {
        let floors: Vec<Pos> =
            grid.positions().filter(|&pos| grid.cell_at(pos).is_floor()).collect();
        let Some(start) = floors.first().copied() else {
            return true;
        };

        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in [
                Pos { y: pos.y - 1, x: pos.x },
                Pos { y: pos.y, x: pos.x + 1 },
                Pos { y: pos.y + 1, x: pos.x },
                Pos { y: pos.y, x: pos.x - 1 },
            ] {
                if seen.contains(&next) || !grid.cell_at(next).is_floor() {
                    continue;
                }
                seen.insert(next);
                open.push_back(next);
            }
        }

        seen.len() == floors.len()
    }
}
