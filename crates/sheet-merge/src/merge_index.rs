//! `MergeIndex` (C3): membership and anchor resolution for merged cell
//! regions (`spec.md` §4.2).
//!
//! Anchors live in a flat map keyed by `(row, col)`. Membership for an
//! arbitrary cell is resolved through a per-row sorted list of non-
//! overlapping column intervals — the representation the spec itself
//! suggests ("the simplest correct implementation is a per-row list of
//! active column intervals, queried in O(log regions per row)").

use std::collections::BTreeMap;

use ahash::AHashMap;
use sheet_model::Coord;

use crate::error::MergeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeLookup {
    None,
    Anchor { row_span: u16, col_span: u16 },
    Hidden { anchor_row: u32, anchor_col: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    col_start: u32,
    col_end: u32, // inclusive
    anchor_row: u32,
    anchor_col: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MergeIndex {
    anchors: AHashMap<(u32, u32), (u16, u16)>,
    /// row -> column intervals covered by a merge touching that row, sorted
    /// by `col_start`.
    rows: BTreeMap<u32, Vec<Interval>>,
    generation: u64,
}

impl MergeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Create a merge region anchored at `(anchor_row, anchor_col)` spanning
    /// `row_span` rows and `col_span` columns. Fails with
    /// `MergeError::InvalidMerge` if any cell in the region is already part
    /// of another merge (`spec.md` §4.2: "no merge region overlaps
    /// another").
    pub fn merge(
        &mut self,
        anchor_row: u32,
        anchor_col: u32,
        row_span: u16,
        col_span: u16,
    ) -> Result<(), MergeError> {
        let row_span = row_span.max(1);
        let col_span = col_span.max(1);
        let col_start = anchor_col;
        let col_end = anchor_col + (col_span as u32 - 1);

        for row in anchor_row..anchor_row + row_span as u32 {
            if let Some(list) = self.rows.get(&row)
                && list
                    .iter()
                    .any(|iv| iv.col_start <= col_end && col_start <= iv.col_end)
            {
                return Err(MergeError::InvalidMerge);
            }
        }

        for row in anchor_row..anchor_row + row_span as u32 {
            let list = self.rows.entry(row).or_default();
            let iv = Interval {
                col_start,
                col_end,
                anchor_row,
                anchor_col,
            };
            let pos = list.partition_point(|e| e.col_start < iv.col_start);
            list.insert(pos, iv);
        }
        self.anchors
            .insert((anchor_row, anchor_col), (row_span, col_span));
        self.generation += 1;
        tracing::trace!(target: "merge.index", anchor_row, anchor_col, row_span, col_span, "merge");
        Ok(())
    }

    /// Remove the merge region anchored at `(anchor_row, anchor_col)`.
    /// No-op (total) if no such region exists.
    pub fn unmerge(&mut self, anchor_row: u32, anchor_col: u32) {
        let Some((row_span, _col_span)) = self.anchors.remove(&(anchor_row, anchor_col)) else {
            return;
        };
        for row in anchor_row..anchor_row + row_span as u32 {
            if let Some(list) = self.rows.get_mut(&row) {
                list.retain(|iv| !(iv.anchor_row == anchor_row && iv.anchor_col == anchor_col));
                if list.is_empty() {
                    self.rows.remove(&row);
                }
            }
        }
        self.generation += 1;
        tracing::trace!(target: "merge.index", anchor_row, anchor_col, "unmerge");
    }

    /// Look up `(row, col)`: `None` if not merged, `Anchor` if it is the
    /// top-left cell of a region, `Hidden` (pointing at the anchor) for
    /// every other cell in the region.
    pub fn lookup(&self, coord: Coord) -> MergeLookup {
        let Some(list) = self.rows.get(&coord.row) else {
            return MergeLookup::None;
        };
        let pos = list.partition_point(|iv| iv.col_end < coord.col);
        let Some(iv) = list.get(pos) else {
            return MergeLookup::None;
        };
        if iv.col_start > coord.col {
            return MergeLookup::None;
        }
        if iv.anchor_row == coord.row && iv.anchor_col == coord.col {
            let (row_span, col_span) = self.anchors[&(iv.anchor_row, iv.anchor_col)];
            MergeLookup::Anchor { row_span, col_span }
        } else {
            MergeLookup::Hidden {
                anchor_row: iv.anchor_row,
                anchor_col: iv.anchor_col,
            }
        }
    }

    pub fn span_of(&self, anchor_row: u32, anchor_col: u32) -> Option<(u16, u16)> {
        self.anchors.get(&(anchor_row, anchor_col)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_and_hidden_resolve() {
        let mut idx = MergeIndex::new();
        idx.merge(1, 1, 2, 3).unwrap();
        assert_eq!(
            idx.lookup(Coord::new(1, 1)),
            MergeLookup::Anchor {
                row_span: 2,
                col_span: 3
            }
        );
        assert_eq!(
            idx.lookup(Coord::new(2, 3)),
            MergeLookup::Hidden {
                anchor_row: 1,
                anchor_col: 1
            }
        );
        assert_eq!(idx.lookup(Coord::new(5, 5)), MergeLookup::None);
    }

    #[test]
    fn overlap_is_rejected() {
        let mut idx = MergeIndex::new();
        idx.merge(0, 0, 2, 2).unwrap();
        assert_eq!(idx.merge(1, 1, 2, 2), Err(MergeError::InvalidMerge));
        // Adjacent, non-overlapping region is fine.
        assert!(idx.merge(0, 2, 2, 2).is_ok());
    }

    #[test]
    fn unmerge_clears_all_member_cells() {
        let mut idx = MergeIndex::new();
        idx.merge(0, 0, 2, 2).unwrap();
        idx.unmerge(0, 0);
        assert_eq!(idx.lookup(Coord::new(0, 0)), MergeLookup::None);
        assert_eq!(idx.lookup(Coord::new(1, 1)), MergeLookup::None);
        // Region is mergeable again.
        assert!(idx.merge(0, 0, 2, 2).is_ok());
    }

    #[test]
    fn unmerge_unknown_anchor_is_noop() {
        let mut idx = MergeIndex::new();
        idx.unmerge(9, 9);
        assert_eq!(idx.lookup(Coord::new(9, 9)), MergeLookup::None);
    }
}
