//! Synchronous Moore-neighborhood cellular automaton used to smooth the noise grid.

use std::mem;

use crate::config::CaveConfig;
use crate::types::{Cell, Pos};

use super::grid::CellGrid;

const MOORE_OFFSETS: [(i32, i32); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Birth/death rule for one smoothing pass.
///
/// Thresholds are inclusive: reaching the threshold counts as meeting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmoothingRule {
    pub birth_threshold: u8,
    pub death_threshold: u8,
    pub edge_is_wall: bool,
}

impl SmoothingRule {
    pub fn from_config(config: &CaveConfig) -> Self {
        Self {
            birth_threshold: config.birth_threshold,
            death_threshold: config.death_threshold,
            edge_is_wall: config.edge_is_wall,
        }
    }

    pub fn next_state(self, cell: Cell, wall_neighbors: u8) -> Cell {
        let threshold = match cell {
            Cell::Wall => self.death_threshold,
            Cell::Floor => self.birth_threshold,
        };
        if wall_neighbors >= threshold { Cell::Wall } else { Cell::Floor }
    }
}

/// Counts Wall cells among the 8 neighbors of `pos`.
///
/// Off-grid neighbors count as Wall when `edge_is_wall` is set and are skipped
/// otherwise, so a 1x1 grid sees either 8 or 0 walls.
pub fn wall_neighbor_count(grid: &CellGrid, pos: Pos, edge_is_wall: bool) -> u8 {
    let mut count = 0_u8;
    for (dy, dx) in MOORE_OFFSETS {
        let neighbor = Pos { y: pos.y + dy, x: pos.x + dx };
        let is_wall = match grid.get(neighbor) {
            Some(cell) => cell.is_wall(),
            None => edge_is_wall,
        };
        count += u8::from(is_wall);
    }
    count
}

/// Runs `iterations` passes. Each pass reads only the previous generation.
pub fn smooth(grid: CellGrid, iterations: u32, rule: SmoothingRule) -> CellGrid {
    if iterations == 0 {
        return grid;
    }

    let mut current = grid;
    let mut next = current.clone();
    for _ in 0..iterations {
        smoothing_pass(&current, &mut next, rule);
        mem::swap(&mut current, &mut next);
    }
    current
}

fn smoothing_pass(read: &CellGrid, write: &mut CellGrid, rule: SmoothingRule) {
    for pos in read.positions() {
        let wall_neighbors = wall_neighbor_count(read, pos, rule.edge_is_wall);
        write.set(pos, rule.next_state(read.cell_at(pos), wall_neighbors));
    }
}
