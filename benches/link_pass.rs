//! Benchmarks the per-frame hot path: the O(n²) link scan and a full
//! simulation step, both at the population cap.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plexfield::{Field, Lifecycle, SpawnContext, Vec2, VisualConfig};

fn full_field() -> Field {
    let mut field = Field::new(
        Lifecycle::default(),
        VisualConfig::default(),
        SpawnContext::seeded(42),
    );
    // Large enough to hit the 100-particle cap.
    field.attach(Vec2::new(1920.0, 1080.0));
    field
}

fn bench_link_pass(c: &mut Criterion) {
    let field = full_field();
    let mut links = Vec::new();

    c.bench_function("link_instances_100_particles", |b| {
        b.iter(|| {
            field.link_instances(&mut links);
            black_box(links.len())
        })
    });
}

fn bench_step(c: &mut Criterion) {
    let mut field = full_field();

    c.bench_function("step_100_particles", |b| {
        b.iter(|| {
            field.step();
            black_box(field.frame())
        })
    });
}

criterion_group!(benches, bench_link_pass, bench_step);
criterion_main!(benches);
