//! Property-based coverage for `VirtualRenderer::render`'s core guarantee
//! (`spec.md` §8: "every emitted frame contains no duplicate coordinates,
//! and every visible logical cell is represented exactly once — either
//! directly or via its merge anchor"), mirroring the teacher's
//! `core-render` proptest style (`tests/scheduler_properties.rs`).

use ahash::AHashSet;
use proptest::prelude::*;
use sheet_geometry::DimensionIndex;
use sheet_merge::MergeIndex;
use sheet_model::InMemoryCellStore;
use sheet_render::{Camera, VirtualRenderer};

fn camera(scroll_x: f64, scroll_y: f64, width: f64, height: f64) -> Camera {
    let mut camera = Camera::new(width, height);
    camera.scroll.x = scroll_x;
    camera.scroll.y = scroll_y;
    camera
}

proptest! {
    /// No two `ViewportCell`s in one frame may share a coordinate,
    /// regardless of scroll position or viewport size.
    #[test]
    fn no_duplicate_cells_across_scroll_positions(
        scroll_x in 0.0f64..5_000.0,
        scroll_y in 0.0f64..5_000.0,
        width in 50.0f64..2_000.0,
        height in 50.0f64..2_000.0,
    ) {
        let row_dim = DimensionIndex::new(20, (1 << 20) - 1);
        let col_dim = DimensionIndex::new(80, (1 << 14) - 1);
        let merge = MergeIndex::new();
        let cells = InMemoryCellStore::new();
        let renderer = VirtualRenderer::new();

        let frame = renderer.render(&camera(scroll_x, scroll_y, width, height), &row_dim, &col_dim, &merge, &cells, None);

        let mut seen: AHashSet<(u32, u32)> = AHashSet::new();
        for cell in &frame.cells {
            prop_assert!(seen.insert((cell.coord.row, cell.coord.col)), "duplicate cell at {:?}", cell.coord);
        }
    }

    /// A merged region always contributes exactly one `ViewportCell` to the
    /// frame, never one per constituent cell, whether or not its anchor is
    /// itself inside the visible window.
    #[test]
    fn merged_region_emits_exactly_one_cell(
        scroll_x in 0.0f64..200.0,
        scroll_y in 0.0f64..200.0,
    ) {
        let row_dim = DimensionIndex::new(20, (1 << 20) - 1);
        let col_dim = DimensionIndex::new(80, (1 << 14) - 1);
        let mut merge = MergeIndex::new();
        merge.merge(2, 2, 3, 3).unwrap();
        let cells = InMemoryCellStore::new();
        let renderer = VirtualRenderer::new();

        let frame = renderer.render(&camera(scroll_x, scroll_y, 400.0, 400.0), &row_dim, &col_dim, &merge, &cells, None);

        let anchor_hits = frame.cells.iter().filter(|c| c.coord.row == 2 && c.coord.col == 2).count();
        let hidden_member_hits = frame
            .cells
            .iter()
            .filter(|c| (c.coord.row, c.coord.col) != (2, 2) && (2..=4).contains(&c.coord.row) && (2..=4).contains(&c.coord.col))
            .count();
        prop_assert!(anchor_hits <= 1);
        prop_assert_eq!(hidden_member_hits, 0);
    }
}

/// The renderer never mutates the stores it reads (`spec.md` §5): two
/// successive renders from identical inputs produce identical frames.
#[test]
fn render_is_idempotent_given_unchanged_inputs() {
    let row_dim = DimensionIndex::new(20, (1 << 20) - 1);
    let col_dim = DimensionIndex::new(80, (1 << 14) - 1);
    let merge = MergeIndex::new();
    let cells = InMemoryCellStore::new();
    let renderer = VirtualRenderer::new();
    let cam = camera(0.0, 0.0, 800.0, 600.0);

    let first = renderer.render(&cam, &row_dim, &col_dim, &merge, &cells, None);
    let second = renderer.render(&cam, &row_dim, &col_dim, &merge, &cells, None);
    assert_eq!(first.cells.len(), second.cells.len());
    assert_eq!(first.content_bounds, second.content_bounds);
}
