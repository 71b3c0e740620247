//! Public data model for a finished cave.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::seed::SeedChoice;
use crate::types::{Cell, Pos};

use super::export::TileMap;
use super::grid::CellGrid;
use super::regions::Region;

/// Per-stage counters collected while generating one cave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub initial_floor_cells: usize,
    pub regions_before_pruning: usize,
    pub pruned_regions: usize,
    pub pruned_cells: usize,
    pub corridors_carved: usize,
    pub final_floor_cells: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCave {
    pub seed: SeedChoice,
    pub width: usize,
    pub height: usize,
    pub grid: CellGrid,
    pub tiles: TileMap<u32>,
    /// Surviving regions in discovery order. Empty when no Floor survived.
    pub regions: Vec<Region>,
    pub stats: GenerationStats,
}

impl GeneratedCave {
    /// Stable byte encoding of the grid and its regions. Tile identifiers are
    /// omitted since they are a pure function of the grid.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.width * self.height);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in self.grid.cells() {
            bytes.push(match cell {
                Cell::Wall => 0,
                Cell::Floor => 1,
            });
        }

        bytes.extend((self.regions.len() as u32).to_le_bytes());
        for region in &self.regions {
            bytes.extend((region.size() as u32).to_le_bytes());
            for pos in [region.centroid, region.anchor] {
                bytes.extend(pos.y.to_le_bytes());
                bytes.extend(pos.x.to_le_bytes());
            }
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.grid.cell_at(pos)
    }

    pub fn floor_count(&self) -> usize {
        self.grid.floor_count()
    }

    /// The region with the most cells; the earliest-discovered one wins ties.
    pub fn largest_region(&self) -> Option<&Region> {
        self.regions
            .iter()
            .reduce(|best, region| if region.size() > best.size() { region } else { best })
    }

    /// A Floor cell suitable as a player start: the anchor of the largest region.
    pub fn spawn_point(&self) -> Option<Pos> {
        self.largest_region().map(|region| region.anchor)
    }

    pub fn render_ascii(&self, wall: char, floor: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.grid.cells().chunks(self.width.max(1)) {
            out.extend(row.iter().map(|cell| if cell.is_wall() { wall } else { floor }));
            out.push('\n');
        }
        out
    }
}
