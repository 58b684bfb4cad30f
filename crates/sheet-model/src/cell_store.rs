//! `CellDataSource`/`ConditionalFormatProvider` — the traits the rest of the
//! workspace consumes (`spec.md` §6) — plus `InMemoryCellStore`, a reference
//! implementation. The spec treats the cell store as externally backed; a
//! library shipping this core still needs something to test `sheet-render`
//! and `sheet-actions` against, so we ship one, the way the teacher's
//! `core-model` ships a concrete `Buffer` alongside the traits that describe
//! how higher layers read it.

use ahash::AHashMap;

use crate::cell::Cell;
use crate::coord::Coord;
use crate::format::Format;

/// The smallest rectangle containing all non-empty cells, or `None` if the
/// store is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsedRange {
    pub start: Coord,
    pub end: Coord,
}

/// Conditional-format evaluation result for one cell (`spec.md` §6). Data
/// bars and icons are opaque payloads the core never interprets; only
/// `format_overrides` and `color_scale` are merged into the cell's resolved
/// format before rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionalFormatResult {
    pub format_overrides: Option<Format>,
    pub color_scale: Option<Format>,
    pub data_bar: Option<DataBarPayload>,
    pub icon: Option<IconPayload>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataBarPayload {
    pub fraction: f32,
    pub color: crate::format::Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconPayload {
    pub icon_set: String,
    pub index: u8,
}

/// All operations are total and pure (`spec.md` §6): no cache invalidation,
/// no mutation, no failure.
pub trait CellDataSource {
    fn get_cell(&self, coord: Coord) -> Option<&Cell>;
    fn get_used_range(&self) -> Option<UsedRange>;
    /// Rows with content in `col`, ascending.
    fn get_rows_in_column(&self, col: u32) -> Vec<u32>;
    /// Columns with content in `row`, ascending.
    fn get_columns_in_row(&self, row: u32) -> Vec<u32>;
    fn has_content(&self, coord: Coord) -> bool;
}

/// Optional collaborator (`spec.md` §6); a source with no conditional
/// formatting simply isn't wired in.
pub trait ConditionalFormatProvider {
    fn eval(&self, coord: Coord) -> Option<ConditionalFormatResult>;
}

/// A plain in-memory sparse grid, keyed by `(row, col)`. Used by the
/// workspace's own tests and available to hosts that don't need a backing
/// store more sophisticated than a hash map (e.g. demos, fixtures).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCellStore {
    cells: AHashMap<(u32, u32), Cell>,
    /// Maintained incrementally so `get_used_range` stays O(1) rather than
    /// rescanning the map on every render.
    used_range: Option<UsedRange>,
}

impl InMemoryCellStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cell(&mut self, coord: Coord, cell: Cell) {
        if cell == Cell::empty() {
            self.cells.remove(&(coord.row, coord.col));
        } else {
            self.expand_used_range(coord);
            self.cells.insert((coord.row, coord.col), cell);
        }
        tracing::trace!(target: "model.store", row = coord.row, col = coord.col, "set_cell");
    }

    pub fn remove_cell(&mut self, coord: Coord) {
        self.cells.remove(&(coord.row, coord.col));
    }

    fn expand_used_range(&mut self, coord: Coord) {
        self.used_range = Some(match self.used_range {
            None => UsedRange {
                start: coord,
                end: coord,
            },
            Some(r) => UsedRange {
                start: Coord::new(r.start.row.min(coord.row), r.start.col.min(coord.col)),
                end: Coord::new(r.end.row.max(coord.row), r.end.col.max(coord.col)),
            },
        });
    }
}

impl CellDataSource for InMemoryCellStore {
    fn get_cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&(coord.row, coord.col))
    }

    fn get_used_range(&self) -> Option<UsedRange> {
        self.used_range
    }

    fn get_rows_in_column(&self, col: u32) -> Vec<u32> {
        let mut rows: Vec<u32> = self
            .cells
            .keys()
            .filter(|(_, c)| *c == col)
            .map(|(r, _)| *r)
            .collect();
        rows.sort_unstable();
        rows
    }

    fn get_columns_in_row(&self, row: u32) -> Vec<u32> {
        let mut cols: Vec<u32> = self
            .cells
            .keys()
            .filter(|(r, _)| *r == row)
            .map(|(_, c)| *c)
            .collect();
        cols.sort_unstable();
        cols
    }

    fn has_content(&self, coord: Coord) -> bool {
        self.cells
            .get(&(coord.row, coord.col))
            .is_some_and(Cell::has_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::CellValue;

    #[test]
    fn used_range_expands_with_inserts() {
        let mut store = InMemoryCellStore::new();
        assert_eq!(store.get_used_range(), None);
        store.set_cell(Coord::new(5, 5), Cell::with_value(CellValue::Number(1.0)));
        assert_eq!(
            store.get_used_range(),
            Some(UsedRange {
                start: Coord::new(5, 5),
                end: Coord::new(5, 5)
            })
        );
        store.set_cell(Coord::new(2, 8), Cell::with_value(CellValue::Number(2.0)));
        assert_eq!(
            store.get_used_range(),
            Some(UsedRange {
                start: Coord::new(2, 5),
                end: Coord::new(5, 8)
            })
        );
    }

    #[test]
    fn rows_and_columns_are_sorted() {
        let mut store = InMemoryCellStore::new();
        store.set_cell(Coord::new(3, 1), Cell::with_value(CellValue::Boolean(true)));
        store.set_cell(Coord::new(1, 1), Cell::with_value(CellValue::Boolean(true)));
        assert_eq!(store.get_rows_in_column(1), vec![1, 3]);
        store.set_cell(Coord::new(1, 4), Cell::with_value(CellValue::Boolean(true)));
        assert_eq!(store.get_columns_in_row(1), vec![1, 4]);
    }

    #[test]
    fn has_content_false_for_formula_only_empty_value() {
        let mut store = InMemoryCellStore::new();
        let mut cell = Cell::empty();
        cell.formula = Some("=A1".to_string());
        store.set_cell(Coord::new(0, 0), cell);
        assert!(store.has_content(Coord::new(0, 0)));
        assert!(!store.has_content(Coord::new(1, 1)));
    }
}
