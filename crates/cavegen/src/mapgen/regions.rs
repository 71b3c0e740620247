//! Connected-component labelling of Floor cells.

use std::collections::VecDeque;

use crate::types::Pos;

use super::grid::CellGrid;

const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// One maximal 4-connected group of Floor cells.
///
/// Regions are snapshots of the grid they were computed from; recompute them after
/// any edit instead of patching an old list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Discovery index in row-major scan order.
    pub id: usize,
    /// Member cells sorted row-major.
    pub cells: Vec<Pos>,
    /// Mean member coordinate, rounded to the nearest cell.
    pub centroid: Pos,
    /// The member cell nearest the centroid, ties broken by lowest `(y, x)`.
    pub anchor: Pos,
    pub min: Pos,
    pub max: Pos,
}

impl Region {
    fn from_cells(id: usize, mut cells: Vec<Pos>) -> Self {
        debug_assert!(!cells.is_empty());
        cells.sort_unstable();

        let count = cells.len() as i64;
        let (sum_y, sum_x) = cells
            .iter()
            .fold((0_i64, 0_i64), |(sy, sx), pos| (sy + i64::from(pos.y), sx + i64::from(pos.x)));
        let centroid =
            Pos { y: rounded_mean(sum_y, count) as i32, x: rounded_mean(sum_x, count) as i32 };

        let mut anchor = cells[0];
        let mut best_distance = squared_distance(anchor, centroid);
        let mut min = cells[0];
        let mut max = cells[0];
        for &pos in &cells[1..] {
            let distance = squared_distance(pos, centroid);
            if distance < best_distance {
                anchor = pos;
                best_distance = distance;
            }
            min = Pos { y: min.y.min(pos.y), x: min.x.min(pos.x) };
            max = Pos { y: max.y.max(pos.y), x: max.x.max(pos.x) };
        }

        Self { id, cells, centroid, anchor, min, max }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.binary_search(&pos).is_ok()
    }
}

/// Squared Euclidean distance between two cells.
pub fn squared_distance(a: Pos, b: Pos) -> i64 {
    let dy = i64::from(a.y) - i64::from(b.y);
    let dx = i64::from(a.x) - i64::from(b.x);
    dy * dy + dx * dx
}

fn rounded_mean(sum: i64, count: i64) -> i64 {
    (2 * sum + count).div_euclid(2 * count)
}

/// Labels every 4-connected Floor component, seeding a breadth-first fill from each
/// unvisited Floor cell in row-major order. The grid is not modified.
pub fn find_regions(grid: &CellGrid) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();
    let mut open = VecDeque::new();

    for start in grid.positions() {
        let Some(start_index) = grid.index(start) else {
            continue;
        };
        if visited[start_index] || !grid.cell_at(start).is_floor() {
            continue;
        }

        visited[start_index] = true;
        open.push_back(start);
        let mut cells = Vec::new();
        while let Some(pos) = open.pop_front() {
            cells.push(pos);
            for (dy, dx) in ORTHOGONAL_OFFSETS {
                let next = Pos { y: pos.y + dy, x: pos.x + dx };
                let Some(next_index) = grid.index(next) else {
                    continue;
                };
                if visited[next_index] || !grid.cell_at(next).is_floor() {
                    continue;
                }
                visited[next_index] = true;
                open.push_back(next);
            }
        }

        regions.push(Region::from_cells(regions.len(), cells));
    }

    regions
}
