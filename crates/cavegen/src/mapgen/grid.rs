//! Binary Wall/Floor grid shared by every pipeline stage.

use std::fmt;

use crate::types::{Cell, Pos};

/// Fixed-size row-major grid of [`Cell`]s. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    /// Parses rows of `#` (Wall) and `.` (Floor). Returns `None` for empty input,
    /// ragged rows, or any other character.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first()?.chars().count();
        if width == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for symbol in row.chars() {
                cells.push(match symbol {
                    '#' => Cell::Wall,
                    '.' => Cell::Floor,
                    _ => return None,
                });
            }
        }

        Some(Self { width, height: rows.len(), cells })
    }

    pub(super) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Off-grid positions read as Wall.
    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.index(pos).map_or(Cell::Wall, |index| self.cells[index])
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Writes `cell` at `pos`; off-grid writes are ignored.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if let Some(index) = self.index(pos) {
            self.cells[index] = cell;
        }
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_floor()).count()
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub(super) fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                let symbol = match cell {
                    Cell::Wall => '#',
                    Cell::Floor => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
