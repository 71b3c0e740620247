//! Text and JSON renderings of a generated cave.

use cavegen::{GeneratedCave, GenerationStats, Pos, TileMap};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub id: usize,
    pub size: usize,
    pub centroid: Pos,
    pub anchor: Pos,
}

/// Serializable view of a cave: everything a host needs to place it and replay it.
#[derive(Debug, Serialize)]
pub struct CaveDocument<'a> {
    pub seed: u64,
    pub fingerprint: u64,
    pub spawn_point: Option<Pos>,
    pub tiles: &'a TileMap<u32>,
    pub regions: Vec<RegionSummary>,
    pub stats: GenerationStats,
}

impl<'a> CaveDocument<'a> {
    pub fn new(generated: &'a GeneratedCave) -> Self {
        Self {
            seed: generated.seed.value(),
            fingerprint: generated.fingerprint(),
            spawn_point: generated.spawn_point(),
            tiles: &generated.tiles,
            regions: generated
                .regions
                .iter()
                .map(|region| RegionSummary {
                    id: region.id,
                    size: region.size(),
                    centroid: region.centroid,
                    anchor: region.anchor,
                })
                .collect(),
            stats: generated.stats,
        }
    }
}

pub fn render_json(generated: &GeneratedCave) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CaveDocument::new(generated))
}

/// ASCII map with the spawn point marked `@`.
pub fn render_ascii(generated: &GeneratedCave) -> String {
    let mut text = generated.render_ascii('#', '.');
    if let Some(spawn) = generated.spawn_point() {
        let offset = (spawn.y as usize) * (generated.width + 1) + spawn.x as usize;
        text.replace_range(offset..offset + 1, "@");
    }
    text
}
