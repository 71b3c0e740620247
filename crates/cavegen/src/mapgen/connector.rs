//! Corridor carving that joins disjoint caves into one traversable region.

use crate::types::{Cell, Pos};

use super::grid::CellGrid;
use super::regions::{Region, find_regions, squared_distance};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectOutcome {
    /// Regions of the grid after the last carve.
    pub regions: Vec<Region>,
    pub corridors_carved: usize,
}

/// Joins regions until one remains, always linking the pair whose centroids are
/// closest.
///
/// Corridors run between region anchors rather than raw centroids. Anchors are
/// members of their regions, so every corridor touches both ends and each carve
/// merges at least two regions.
pub fn connect_regions(grid: &mut CellGrid, regions: Vec<Region>) -> ConnectOutcome {
    let max_carves = regions.len().saturating_sub(1);
    let mut regions = regions;
    let mut corridors_carved = 0;

    while corridors_carved < max_carves {
        let Some((first, second)) = nearest_region_pair(&regions) else {
            break;
        };
        let path = corridor_path(regions[first].anchor, regions[second].anchor);
        carve_corridor(grid, &path);
        corridors_carved += 1;
        regions = find_regions(grid);
    }

    ConnectOutcome { regions, corridors_carved }
}

/// Indices of the two regions with the nearest centroids, ties broken by the lowest
/// index pair. `None` when fewer than two regions exist.
pub fn nearest_region_pair(regions: &[Region]) -> Option<(usize, usize)> {
    let mut best_choice: Option<(i64, usize, usize)> = None;
    for first in 0..regions.len() {
        for second in (first + 1)..regions.len() {
            let distance = squared_distance(regions[first].centroid, regions[second].centroid);
            let should_replace = match best_choice {
                None => true,
                Some(best) => (distance, first, second) < best,
            };
            if should_replace {
                best_choice = Some((distance, first, second));
            }
        }
    }
    best_choice.map(|(_, first, second)| (first, second))
}

/// L-shaped path from `start` to `end`: along `start`'s row first, then along
/// `end`'s column. Both endpoints are included and the corner appears once.
pub fn corridor_path(start: Pos, end: Pos) -> Vec<Pos> {
    let mut path = vec![start];

    let step_x = (end.x - start.x).signum();
    let mut x = start.x;
    while x != end.x {
        x += step_x;
        path.push(Pos { y: start.y, x });
    }

    let step_y = (end.y - start.y).signum();
    let mut y = start.y;
    while y != end.y {
        y += step_y;
        path.push(Pos { y, x: end.x });
    }

    path
}

pub fn carve_corridor(grid: &mut CellGrid, path: &[Pos]) {
    for &pos in path {
        grid.set(pos, Cell::Floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> CellGrid {
        CellGrid::from_rows(rows).expect("test grid should parse")
    }

    #[test]
    fn corridor_path_runs_horizontal_then_vertical() {
        let path = corridor_path(Pos { y: 1, x: 1 }, Pos { y: 3, x: 3 });
        assert_eq!(
            path,
            vec![
                Pos { y: 1, x: 1 },
                Pos { y: 1, x: 2 },
                Pos { y: 1, x: 3 },
                Pos { y: 2, x: 3 },
                Pos { y: 3, x: 3 },
            ]
        );
        assert_eq!(corridor_path(Pos { y: 2, x: 2 }, Pos { y: 2, x: 2 }), vec![Pos { y: 2, x: 2 }]);
        assert_eq!(corridor_path(Pos { y: 0, x: 4 }, Pos { y: 0, x: 2 }).len(), 3);
    }

    #[test]
    fn two_regions_become_one_including_the_corridor() {
        let mut cave = grid(&["..#####", "..#####", "#####..", "#####.."]);
        let before = find_regions(&cave);
        assert_eq!(before.len(), 2);

        let path = corridor_path(before[0].anchor, before[1].anchor);
        let outcome = connect_regions(&mut cave, before.clone());

        assert_eq!(outcome.corridors_carved, 1);
        assert_eq!(outcome.regions.len(), 1);
        assert!(path.iter().all(|&pos| cave.cell_at(pos).is_floor()));

        let merged = &outcome.regions[0];
        let mut expected: Vec<Pos> =
            before.iter().flat_map(|region| region.cells.iter().copied()).chain(path).collect();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(merged.cells, expected);
        assert_eq!(merged.size(), cave.floor_count());
    }

    #[test]
    fn concave_regions_still_merge_every_carve() {
        let mut cave = grid(&[
            ".....#####",
            ".###.#####",
            ".#.#.#####",
            ".###.##...",
            ".....##...",
        ]);
        let regions = find_regions(&cave);
        assert_eq!(regions.len(), 3);

        let outcome = connect_regions(&mut cave, regions);

        assert_eq!(outcome.regions.len(), 1);
        assert!(outcome.corridors_carved <= 2);
        assert_eq!(outcome.regions[0].size(), cave.floor_count());
    }

    #[test]
    fn nearest_pair_prefers_lowest_indices_on_ties() {
        let cave = grid(&[".#.#."]);
        let regions = find_regions(&cave);
        assert_eq!(nearest_region_pair(&regions), Some((0, 1)));
        assert_eq!(nearest_region_pair(&regions[..1]), None);
    }

    #[test]
    fn single_or_no_region_is_left_alone() {
        let mut solid = CellGrid::filled(4, 4, Cell::Wall);
        let outcome = connect_regions(&mut solid, Vec::new());
        assert_eq!(outcome, ConnectOutcome { regions: Vec::new(), corridors_carved: 0 });
        assert_eq!(solid.floor_count(), 0);

        let mut open = CellGrid::filled(4, 4, Cell::Floor);
        let regions = find_regions(&open);
        let outcome = connect_regions(&mut open, regions.clone());
        assert_eq!(outcome.corridors_carved, 0);
        assert_eq!(outcome.regions, regions);
    }
}
