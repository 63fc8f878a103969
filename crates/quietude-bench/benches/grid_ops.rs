//! Criterion micro-benchmarks for layer fill, attribute access and the
//! coordinate transform.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use quietude_bench::{meadow_area, REFERENCE_DIMS};
use quietude_core::{AttrKey, GridDims, LayerCategory};
use quietude_grid::{AttrTable, Cell, GridLayer};

/// Benchmark: fill a reference-size layer with default tables.
fn bench_layer_fill_defaults(c: &mut Criterion) {
    let (y, x) = REFERENCE_DIMS;
    let dims = GridDims::new(y, x).unwrap();

    c.bench_function("layer_fill_defaults_32x64", |b| {
        b.iter(|| {
            let mut layer = GridLayer::new(dims, LayerCategory::Earth);
            layer.fill_defaults().unwrap();
            black_box(&layer);
        });
    });
}

/// Benchmark: build the full meadow profile (two layers, varied tables).
fn bench_meadow_build(c: &mut Criterion) {
    let (y, x) = REFERENCE_DIMS;
    c.bench_function("meadow_area_build_32x64", |b| {
        b.iter(|| black_box(meadow_area(y, x).unwrap()));
    });
}

/// Benchmark: replace one key in a full table.
fn bench_attr_replace(c: &mut Criterion) {
    let mut table = AttrTable::defaults_for(LayerCategory::Floater);
    c.bench_function("attr_table_replace_health", |b| {
        let mut hp = 0;
        b.iter(|| {
            hp = (hp + 1) % 100;
            table.set(AttrKey::Health, Cell::int(hp)).unwrap();
        });
    });
}

/// Benchmark: coordinate → index → coordinate over a whole layer.
fn bench_coord_transform(c: &mut Criterion) {
    let (y, x) = REFERENCE_DIMS;
    let dims = GridDims::new(y, x).unwrap();
    c.bench_function("coord_transform_round_trip_2048", |b| {
        b.iter(|| {
            for index in 0..dims.layer_size() {
                let (y, x) = dims.index_to_coords(black_box(index)).unwrap();
                black_box(dims.coords_to_index(y, x).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_layer_fill_defaults,
    bench_meadow_build,
    bench_attr_replace,
    bench_coord_transform
);
criterion_main!(benches);
