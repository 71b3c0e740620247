//! Mapping of the finished binary grid onto caller-chosen tile identifiers.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Pos};

use super::grid::CellGrid;

/// Row-major grid of opaque tile identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileMap<T> {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<T>,
}

impl<T: Copy> TileMap<T> {
    pub fn tile_at(&self, pos: Pos) -> Option<T> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.tiles.chunks(self.width.max(1))
    }
}

pub fn export_tiles<T: Copy>(grid: &CellGrid, wall_tile: T, floor_tile: T) -> TileMap<T> {
    let tiles = grid
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Wall => wall_tile,
            Cell::Floor => floor_tile,
        })
        .collect();
    TileMap { width: grid.width(), height: grid.height(), tiles }
}
