use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sheet_geometry::DimensionIndex;

fn populated_index(overrides: usize, max_index: u32) -> DimensionIndex {
    let mut dim = DimensionIndex::new(20, max_index);
    for i in 0..overrides {
        let idx = (i as u32 * 37) % max_index;
        dim.set_size(idx, 40).unwrap();
    }
    dim
}

fn bench_offset_of(c: &mut Criterion) {
    let dim = populated_index(10_000, (1 << 20) - 1);
    c.bench_function("dimension_index/offset_of_1m_rows", |b| {
        b.iter(|| {
            black_box(dim.offset_of(black_box(900_000)));
        })
    });
}

fn bench_index_at(c: &mut Criterion) {
    let dim = populated_index(10_000, (1 << 20) - 1);
    let total = dim.total_extent();
    c.bench_function("dimension_index/index_at_1m_rows", |b| {
        b.iter(|| {
            black_box(dim.index_at(black_box(total / 2)));
        })
    });
}

fn bench_set_size(c: &mut Criterion) {
    c.bench_function("dimension_index/set_size_sequential", |b| {
        b.iter_batched(
            || DimensionIndex::new(20, (1 << 20) - 1),
            |mut dim| {
                for i in 0..1_000u32 {
                    dim.set_size(i, 30).unwrap();
                }
                black_box(dim.total_extent());
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_offset_of, bench_index_at, bench_set_size);
criterion_main!(benches);
