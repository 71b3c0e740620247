//! Removal of caves too small to be worth keeping.

use crate::types::Cell;

use super::grid::CellGrid;
use super::regions::Region;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    pub regions_removed: usize,
    pub cells_removed: usize,
}

/// Walls over every region strictly smaller than `min_cave_size`.
///
/// `regions` must have been computed from `grid`. Pruning can only remove regions,
/// never merge them, but the region list is stale afterwards.
pub fn prune_small_regions(
    grid: &mut CellGrid,
    regions: &[Region],
    min_cave_size: usize,
) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();
    for region in regions.iter().filter(|region| region.size() < min_cave_size) {
        for &pos in &region.cells {
            grid.set(pos, Cell::Wall);
        }
        outcome.regions_removed += 1;
        outcome.cells_removed += region.size();
    }
    outcome
}
