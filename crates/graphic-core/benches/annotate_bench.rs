use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphic_core::{AnnotationLayout, Annotation, BreakpointSet, Bounds, GeoCount, Graphic, GraphicConfig, MapGraphic};

fn gen_map(n: usize) -> MapGraphic {
    let mut annotations = BTreeMap::new();
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let id = format!("p{i}");
        let t = i as f64 / n as f64;
        data.push(GeoCount { id: id.clone(), lat: 41.65 + 0.4 * t, lng: -87.9 + 0.4 * (t * 7.0).fract(), count: 10.0 + i as f64 });
        let breakpoints = BreakpointSet::new(vec![
            (0.0, AnnotationLayout { dx: 10.0, dy: -8.0, width: 90.0, flip: false }),
            (600.0, AnnotationLayout { dx: -14.0, dy: 0.0, width: 140.0, flip: true }),
        ])
        .expect("valid breakpoints");
        annotations.insert(id, Annotation { breakpoints, html: format!("Point {i}") });
    }
    let config = GraphicConfig {
        bounds: Bounds { north: 42.05, south: 41.64, east: -87.5, west: -87.94 },
        aspect: 0.75,
        annotations,
        map_labels: Vec::new(),
        datum_radius: None,
        dash_policy: Default::default(),
        redraw: Default::default(),
    };
    MapGraphic::new(config, data)
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate_map");
    for &n in &[10usize, 100, 1_000] {
        let map = gen_map(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &map, |b, map| {
            b.iter(|| {
                let scene = map.draw(black_box(800.0)).expect("draw");
                black_box(scene.to_svg().len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_annotate);
criterion_main!(benches);
