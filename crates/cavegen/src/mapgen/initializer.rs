//! Random initial fill of the working grid.

use rand_chacha::rand_core::Rng;

use crate::types::Cell;

use super::grid::CellGrid;
use super::rng::bernoulli;

/// Fills a `width x height` grid, drawing one Bernoulli trial per cell in row-major
/// order. A cell is Wall with probability `wall_probability`.
///
/// Edge handling is deliberately absent here: border cells are drawn like any other
/// cell, so toggling edge behavior does not shift the random stream.
pub fn seed_grid<R: Rng>(
    width: usize,
    height: usize,
    wall_probability: f64,
    rng: &mut R,
) -> CellGrid {
    let cells = (0..width * height)
        .map(|_| if bernoulli(rng, wall_probability) { Cell::Wall } else { Cell::Floor })
        .collect();
    CellGrid::from_cells(width, height, cells)
}
