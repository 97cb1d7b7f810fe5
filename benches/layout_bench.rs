use beadloop::catalog::{BeadPrototype, CategoryId, PrototypeId};
use beadloop::engine::DesignEngine;
use beadloop::geometry::LoopLayout;
use beadloop::options::LayoutOptions;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn prototype(i: usize, diameter_mm: f32) -> BeadPrototype {
    BeadPrototype {
        id: PrototypeId(format!("bench-{i}")),
        name: format!("bench bead {i}"),
        category_id: CategoryId("bench".to_owned()),
        diameter_mm,
        unit_price: 5.0,
        image: "bench.png".to_owned(),
        dominant_color: None,
    }
}

fn layout_benchmark(c: &mut Criterion) {
    let opts = LayoutOptions::default();
    let diameters: Vec<f32> = (0..24).map(|i| 6.0 + (i % 5) as f32).collect();
    let _ = c.bench_function("loop_layout_compute_24", |b| {
        b.iter(|| black_box(LoopLayout::compute(black_box(&diameters), &opts)));
    });
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");

    for count in [4usize, 12, 24] {
        let mut engine = DesignEngine::new();
        for i in 0..count {
            let _ = engine.add_bead(prototype(i, 10.0));
        }

        let _ = group.bench_function(format!("{count}_beads"), |b| {
            b.iter(|| black_box(engine.tick()));
        });
    }
    group.finish();
}

criterion_group!(benches, layout_benchmark, tick_benchmark);
criterion_main!(benches);
