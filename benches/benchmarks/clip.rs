use std::f64::consts::TAU;

use criterion::{BatchSize, Criterion, criterion_group};
use hormann::Polygon;
use rand::Rng;

const VERTICES: usize = 1000;

fn random_polygon() -> Polygon<f64> {
    let mut rng = rand::rng();
    let step = TAU / VERTICES as f64;

    (0..VERTICES)
        .map(|index| {
            let angle = (index as f64 + rng.random_range(0.0..0.5)) * step;
            let radius = rng.random_range(1.0..2.0);
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect()
}

fn random_operands() -> [Polygon<f64>; 2] {
    [random_polygon(), random_polygon()]
}

pub fn large_polygons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large polygons");

    group.bench_function("union", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| subject.union(clip),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("intersection", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| subject.intersection(clip),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("difference", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| subject.difference(clip),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("reversed difference", |b| {
        b.iter_batched(
            random_operands,
            |[subject, clip]| subject.reversed_difference(clip),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, large_polygons);
