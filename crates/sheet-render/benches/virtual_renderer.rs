use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sheet_geometry::DimensionIndex;
use sheet_merge::MergeIndex;
use sheet_model::{Cell, Coord, InMemoryCellStore, value::CellValue};
use sheet_render::{Camera, VirtualRenderer};

const MAX_ROW: u32 = (1 << 20) - 1;
const MAX_COL: u32 = (1 << 14) - 1;

fn million_row_grid() -> (DimensionIndex, DimensionIndex, MergeIndex, InMemoryCellStore) {
    let rows = DimensionIndex::new(20, MAX_ROW);
    let cols = DimensionIndex::new(80, MAX_COL);
    let merge = MergeIndex::new();
    let mut store = InMemoryCellStore::new();
    for r in (0..MAX_ROW).step_by(1000) {
        store.set_cell(Coord::new(r, 0), Cell::with_value(CellValue::Number(r as f64)));
    }
    (rows, cols, merge, store)
}

fn bench_frame_construction_scrolled_deep(c: &mut Criterion) {
    let (rows, cols, merge, store) = million_row_grid();
    let renderer = VirtualRenderer::new();
    let mut camera = Camera::new(1200.0, 800.0);
    camera.scroll.y = rows.offset_of(MAX_ROW - 2_000) as f64;

    c.bench_function("virtual_renderer/frame_deep_in_1m_rows", |b| {
        b.iter(|| {
            let frame = renderer.render(black_box(&camera), &rows, &cols, &merge, &store, None);
            black_box(frame.cells.len());
        })
    });
}

fn bench_frame_construction_top_of_sheet(c: &mut Criterion) {
    let (rows, cols, merge, store) = million_row_grid();
    let renderer = VirtualRenderer::new();
    let camera = Camera::new(1200.0, 800.0);

    c.bench_function("virtual_renderer/frame_top_of_sheet", |b| {
        b.iter(|| {
            let frame = renderer.render(black_box(&camera), &rows, &cols, &merge, &store, None);
            black_box(frame.cells.len());
        })
    });
}

criterion_group!(benches, bench_frame_construction_scrolled_deep, bench_frame_construction_top_of_sheet);
criterion_main!(benches);
