//! `VirtualRenderer` (C4): the lazy viewport materialization algorithm of
//! `spec.md` §4.3, steps 1-5.

use std::cell::RefCell;

use ahash::AHashSet;
use sheet_geometry::DimensionIndex;
use sheet_merge::{MergeIndex, MergeLookup};
use sheet_model::{CellDataSource, ConditionalFormatProvider, Coord, value::CellValue};

use crate::camera::Camera;
use crate::frame::{
    ColMetric, ContentBounds, FreezeLines, PixelRect, RenderFrame, RowMetric, ScrollOffset,
    ValueType, ViewportCell,
};

/// Resolved visible index window for one axis, overscan already applied and
/// clamped (`spec.md` §4.3 step 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisWindow {
    first: u32,
    last: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BoundsCacheKey {
    scroll_x: u64,
    scroll_y: u64,
    width: u64,
    height: u64,
    frozen_rows: u32,
    frozen_cols: u32,
    zoom: u32,
    overscan_rows: u32,
    overscan_cols: u32,
    row_generation: u64,
    col_generation: u64,
}

impl BoundsCacheKey {
    fn from_camera(camera: &Camera, row_dim: &DimensionIndex, col_dim: &DimensionIndex) -> Self {
        Self {
            scroll_x: camera.scroll.x.to_bits(),
            scroll_y: camera.scroll.y.to_bits(),
            width: camera.viewport_width.to_bits(),
            height: camera.viewport_height.to_bits(),
            frozen_rows: camera.frozen_rows,
            frozen_cols: camera.frozen_cols,
            zoom: camera.zoom.to_bits(),
            overscan_rows: camera.overscan_rows,
            overscan_cols: camera.overscan_cols,
            row_generation: row_dim.generation(),
            col_generation: col_dim.generation(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedBounds {
    rows: AxisWindow,
    cols: AxisWindow,
}

/// Produces `RenderFrame`s from the dimension, merge, and cell providers.
/// Never mutates them (`spec.md` §5: "the renderer *must never* mutate
/// these stores"). Memoizes the visible-window computation per camera and
/// dimension generation, per the spec's caching note — changing the merge
/// provider (a separate generation counter) never invalidates this cache.
pub struct VirtualRenderer {
    cache: RefCell<Option<(BoundsCacheKey, CachedBounds)>>,
}

impl Default for VirtualRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualRenderer {
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(None),
        }
    }

    fn visible_window(
        &self,
        camera: &Camera,
        row_dim: &DimensionIndex,
        col_dim: &DimensionIndex,
    ) -> CachedBounds {
        let key = BoundsCacheKey::from_camera(camera, row_dim, col_dim);
        if let Some((cached_key, bounds)) = *self.cache.borrow() {
            if cached_key == key {
                return bounds;
            }
        }

        let row_pane_end = row_dim.offset_of(camera.frozen_rows);
        let col_pane_end = col_dim.offset_of(camera.frozen_cols);

        let top = row_pane_end + camera.scroll.y.max(0.0) as u64;
        let bottom = top + camera.viewport_height.max(0.0) as u64;
        let left = col_pane_end + camera.scroll.x.max(0.0) as u64;
        let right = left + camera.viewport_width.max(0.0) as u64;

        let r0 = row_dim.index_at(top).max(camera.frozen_rows);
        let r1 = row_dim.index_at(bottom).max(r0);
        let c0 = col_dim.index_at(left).max(camera.frozen_cols);
        let c1 = col_dim.index_at(right).max(c0);

        let rows = AxisWindow {
            first: r0.saturating_sub(camera.overscan_rows).max(camera.frozen_rows),
            last: (r1 + camera.overscan_rows).min(row_dim.max_index()),
        };
        let cols = AxisWindow {
            first: c0.saturating_sub(camera.overscan_cols).max(camera.frozen_cols),
            last: (c1 + camera.overscan_cols).min(col_dim.max_index()),
        };

        let bounds = CachedBounds { rows, cols };
        *self.cache.borrow_mut() = Some((key, bounds));
        bounds
    }

    /// `spec.md` §4.3, the five-step algorithm.
    pub fn render(
        &self,
        camera: &Camera,
        row_dim: &DimensionIndex,
        col_dim: &DimensionIndex,
        merge: &MergeIndex,
        cells: &dyn CellDataSource,
        formats: Option<&dyn ConditionalFormatProvider>,
    ) -> RenderFrame {
        let bounds = self.visible_window(camera, row_dim, col_dim);

        let row_indices = axis_indices(camera.frozen_rows, bounds.rows);
        let col_indices = axis_indices(camera.frozen_cols, bounds.cols);

        let mut emitted_offscreen_anchors: AHashSet<(u32, u32)> = AHashSet::new();
        let mut out_cells = Vec::new();

        for &r in &row_indices {
            if row_dim.is_hidden(r) {
                continue;
            }
            for &c in &col_indices {
                if col_dim.is_hidden(c) {
                    continue;
                }
                let coord = Coord::new(r, c);
                match merge.lookup(coord) {
                    MergeLookup::None => {
                        out_cells.push(self.build_cell(coord, 1, 1, row_dim, col_dim, cells, formats));
                    }
                    MergeLookup::Anchor { row_span, col_span } => {
                        out_cells.push(self.build_cell(
                            coord, row_span, col_span, row_dim, col_dim, cells, formats,
                        ));
                    }
                    MergeLookup::Hidden {
                        anchor_row,
                        anchor_col,
                    } => {
                        let anchor_visible = row_indices.contains(&anchor_row)
                            && col_indices.contains(&anchor_col)
                            && !row_dim.is_hidden(anchor_row)
                            && !col_dim.is_hidden(anchor_col);
                        if anchor_visible {
                            continue; // the anchor iteration will emit it
                        }
                        if !emitted_offscreen_anchors.insert((anchor_row, anchor_col)) {
                            continue;
                        }
                        let anchor_coord = Coord::new(anchor_row, anchor_col);
                        if let MergeLookup::Anchor { row_span, col_span } = merge.lookup(anchor_coord)
                        {
                            out_cells.push(self.build_cell(
                                anchor_coord,
                                row_span,
                                col_span,
                                row_dim,
                                col_dim,
                                cells,
                                formats,
                            ));
                        }
                    }
                }
            }
        }

        let rows: Vec<RowMetric> = row_indices
            .iter()
            .filter(|r| !row_dim.is_hidden(**r))
            .map(|&r| RowMetric {
                index: r,
                offset: row_dim.offset_of(r) as f64,
                size: row_dim.size_of(r) as f64,
            })
            .collect();
        let cols: Vec<ColMetric> = col_indices
            .iter()
            .filter(|c| !col_dim.is_hidden(**c))
            .map(|&c| ColMetric {
                index: c,
                offset: col_dim.offset_of(c) as f64,
                size: col_dim.size_of(c) as f64,
            })
            .collect();

        RenderFrame {
            cells: out_cells,
            rows,
            cols,
            scroll: camera.scroll,
            content_bounds: ContentBounds {
                width: col_dim.total_extent() as f64,
                height: row_dim.total_extent() as f64,
            },
            visible_bounds: PixelRect {
                x: camera.scroll.x,
                y: camera.scroll.y,
                width: camera.viewport_width,
                height: camera.viewport_height,
            },
            freeze_lines: FreezeLines {
                row_line: row_dim.offset_of(camera.frozen_rows) as f64,
                col_line: col_dim.offset_of(camera.frozen_cols) as f64,
            },
            zoom: camera.zoom,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_cell(
        &self,
        coord: Coord,
        row_span: u16,
        col_span: u16,
        row_dim: &DimensionIndex,
        col_dim: &DimensionIndex,
        cells: &dyn CellDataSource,
        formats: Option<&dyn ConditionalFormatProvider>,
    ) -> ViewportCell {
        let cell = cells.get_cell(coord);
        let value = cell.map(|c| &c.value).cloned().unwrap_or(CellValue::Empty);
        let value_type = match &value {
            CellValue::Empty => ValueType::Empty,
            CellValue::Number(_) => ValueType::Number,
            CellValue::Boolean(_) => ValueType::Boolean,
            CellValue::Text(_) => ValueType::Text,
            CellValue::Error(_) => ValueType::Error,
            CellValue::Formatted(_) => ValueType::Formatted,
        };

        let mut format = cell.and_then(|c| c.format.clone()).unwrap_or_default();
        if let Some(provider) = formats {
            if let Some(cf) = provider.eval(coord) {
                if let Some(overrides) = cf.format_overrides {
                    format = format.merge_over(&overrides);
                }
                if let Some(scale) = cf.color_scale {
                    format = format.merge_over(&scale);
                }
            }
        }
        let horizontal_align = format.resolved_horizontal_align(&value);
        let vertical_align = format.vertical_align.unwrap_or_default();

        let x = col_dim.offset_of(coord.col) as f64;
        let y = row_dim.offset_of(coord.row) as f64;
        let mut width = 0f64;
        for c in coord.col..coord.col + col_span as u32 {
            width += col_dim.size_of(c) as f64;
        }
        let mut height = 0f64;
        for r in coord.row..coord.row + row_span as u32 {
            height += row_dim.size_of(r) as f64;
        }

        ViewportCell {
            coord,
            rect: PixelRect {
                x,
                y,
                width,
                height,
            },
            value_type,
            display_text: cell.and_then(|c| c.display_value.clone()),
            horizontal_align,
            vertical_align,
            format: if format.is_empty() { None } else { Some(format) },
            row_span,
            col_span,
        }
    }

    /// The inverse of `render`: resolve a pixel point to a cell coordinate.
    /// Points outside the content area (negative coordinates, the
    /// conventional header band) return the `-1` sentinel on the
    /// corresponding axis (`spec.md` §4.3 "Hit testing").
    pub fn point_to_cell(
        &self,
        camera: &Camera,
        row_dim: &DimensionIndex,
        col_dim: &DimensionIndex,
        merge: &MergeIndex,
        x: f64,
        y: f64,
    ) -> (i64, i64) {
        if x < 0.0 || y < 0.0 {
            return (-1, -1);
        }

        let row_pane_end = row_dim.offset_of(camera.frozen_rows);
        let col_pane_end = col_dim.offset_of(camera.frozen_cols);

        let row = if y < row_pane_end as f64 {
            row_dim.index_at(y as u64)
        } else {
            let absolute = row_pane_end + camera.scroll.y.max(0.0) as u64 + (y - row_pane_end as f64) as u64;
            row_dim.index_at(absolute)
        };
        let col = if x < col_pane_end as f64 {
            col_dim.index_at(x as u64)
        } else {
            let absolute = col_pane_end + camera.scroll.x.max(0.0) as u64 + (x - col_pane_end as f64) as u64;
            col_dim.index_at(absolute)
        };

        match merge.lookup(Coord::new(row, col)) {
            MergeLookup::Hidden {
                anchor_row,
                anchor_col,
            } => (anchor_row as i64, anchor_col as i64),
            _ => (row as i64, col as i64),
        }
    }
}

fn axis_indices(frozen: u32, window: AxisWindow) -> Vec<u32> {
    let mut out: Vec<u32> = (0..frozen).collect();
    let start = window.first.max(frozen);
    if start <= window.last {
        out.extend(start..=window.last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_model::{Cell, InMemoryCellStore, value::CellValue};

    fn small_grid() -> (DimensionIndex, DimensionIndex, MergeIndex, InMemoryCellStore) {
        let rows = DimensionIndex::new(20, 1_000_000);
        let cols = DimensionIndex::new(80, 16_000);
        let merge = MergeIndex::new();
        let mut store = InMemoryCellStore::new();
        for r in 0..10 {
            store.set_cell(Coord::new(r, 0), Cell::with_value(CellValue::Number(r as f64)));
        }
        (rows, cols, merge, store)
    }

    #[test]
    fn render_totality_no_duplicate_cells() {
        let (rows, cols, merge, store) = small_grid();
        let renderer = VirtualRenderer::new();
        let mut camera = Camera::new(400.0, 300.0);
        camera.overscan_rows = 2;
        camera.overscan_cols = 2;
        let frame = renderer.render(&camera, &rows, &cols, &merge, &store, None);
        let mut seen = AHashSet::new();
        for cell in &frame.cells {
            assert!(seen.insert((cell.coord.row, cell.coord.col)), "duplicate cell emitted");
        }
        assert!(!frame.cells.is_empty());
    }

    #[test]
    fn merged_anchor_offscreen_still_emits_full_span() {
        let (rows, cols, mut merge, store) = small_grid();
        // Anchor starts above the viewport but spans into it.
        merge.merge(0, 0, 5, 1).unwrap();
        let renderer = VirtualRenderer::new();
        let mut camera = Camera::new(400.0, 300.0);
        camera.scroll.y = rows.offset_of(3) as f64; // scroll so the row-0 anchor is offscreen
        camera.overscan_rows = 0;
        let frame = renderer.render(&camera, &rows, &cols, &merge, &store, None);
        let anchor_cells: Vec<_> = frame.cells.iter().filter(|c| c.coord == Coord::new(0, 0)).collect();
        assert_eq!(anchor_cells.len(), 1, "anchor must appear exactly once even offscreen");
        assert_eq!(anchor_cells[0].row_span, 5);
        // None of rows 1..5 col 0 (hidden members) should appear separately.
        for r in 1..5 {
            assert!(frame.cells.iter().all(|c| c.coord != Coord::new(r, 0)));
        }
    }

    #[test]
    fn point_to_cell_resolves_hidden_to_anchor() {
        let (rows, cols, mut merge, store) = small_grid();
        merge.merge(2, 2, 2, 2).unwrap();
        let renderer = VirtualRenderer::new();
        let camera = Camera::new(400.0, 300.0);
        let x = cols.offset_of(3) as f64 + 1.0;
        let y = rows.offset_of(3) as f64 + 1.0;
        let (row, col) = renderer.point_to_cell(&camera, &rows, &cols, &merge, x, y);
        assert_eq!((row, col), (2, 2));
    }

    #[test]
    fn point_to_cell_header_sentinel() {
        let (rows, cols, merge, _store) = small_grid();
        let renderer = VirtualRenderer::new();
        let camera = Camera::new(400.0, 300.0);
        assert_eq!(
            renderer.point_to_cell(&camera, &rows, &cols, &merge, -1.0, 50.0),
            (-1, -1)
        );
    }

    #[test]
    fn changing_merge_does_not_invalidate_bounds_cache() {
        let (rows, cols, mut merge, store) = small_grid();
        let renderer = VirtualRenderer::new();
        let camera = Camera::new(400.0, 300.0);
        let _ = renderer.render(&camera, &rows, &cols, &merge, &store, None);
        let key_before = renderer.cache.borrow().unwrap().0;
        merge.merge(0, 0, 2, 2).unwrap();
        let _ = renderer.render(&camera, &rows, &cols, &merge, &store, None);
        let key_after = renderer.cache.borrow().unwrap().0;
        assert_eq!(key_before, key_after, "merge generation must not affect bounds cache key");
    }
}
