use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rastermap::{Config, IndexBuilder, LocationIndex, QueryBox, RasterRequest, TileSelector};

fn street_grid(side: u64) -> LocationIndex {
    let mut builder = IndexBuilder::new();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            let lon = -122.2998 + col as f64 * 0.0001;
            let lat = 37.8921 - row as f64 * 0.0001;
            builder.add_vertex(id, lon, lat).unwrap();
            if col == 0 {
                builder
                    .set_attribute(id, "name", &format!("Street {}", row))
                    .unwrap();
            }
        }
    }
    for row in 0..side {
        let way: Vec<u64> = (0..side).map(|col| row * side + col).collect();
        builder.add_way(&way).unwrap();
    }
    builder.build()
}

fn benchmark_tile_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_selection");
    let selector = TileSelector::new(&Config::default()).unwrap();

    let overview = RasterRequest::new(
        QueryBox::new(-122.2998, -122.2119, 37.8921, 37.8228),
        1024.0,
        768.0,
    );
    group.bench_function("overview", |b| {
        b.iter(|| selector.raster(black_box(&overview)))
    });

    let street = RasterRequest::new(
        QueryBox::new(-122.2416, -122.2405, 37.8765, 37.8754),
        892.0,
        875.0,
    );
    group.bench_function("street_level", |b| {
        b.iter(|| selector.raster(black_box(&street)))
    });

    group.finish();
}

fn benchmark_location_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("location_queries");
    let index = street_grid(100);

    group.bench_function("closest_10k", |b| {
        b.iter(|| index.closest(black_box(-122.295), black_box(37.889)).unwrap())
    });

    group.bench_function("prefix_search", |b| {
        b.iter(|| index.search_by_prefix(black_box("stre")))
    });

    group.bench_function("exact_search", |b| {
        b.iter(|| index.search(black_box("Street")))
    });

    group.finish();
}

fn benchmark_index_build(c: &mut Criterion) {
    c.bench_function("build_grid_2500", |b| b.iter(|| street_grid(black_box(50))));
}

criterion_group!(
    benches,
    benchmark_tile_selection,
    benchmark_location_queries,
    benchmark_index_build
);

criterion_main!(benches);
