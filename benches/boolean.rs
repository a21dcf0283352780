//! Benchmarks for boolean set operations and ring predicates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plangraph::polygon::{inside, point_in_face, ring_equals, set_operation};
use plangraph::{BooleanConfig, Point2, SetOperation};

/// A regular polygon approximating a circle, counter-clockwise.
fn generate_round_room(num_points: usize, cx: f64, radius: f64) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * 2.0 * std::f64::consts::PI;
            Point2::new(cx + radius * t.cos(), radius * t.sin())
        })
        .collect()
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(x0, y0),
        Point2::new(x1, y0),
        Point2::new(x1, y1),
        Point2::new(x0, y1),
    ]
}

fn bench_set_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_operation");
    let config = BooleanConfig::default();

    for size in [16, 128, 1024] {
        let a = generate_round_room(size, 0.0, 500.0);
        let b = generate_round_room(size, 400.0, 500.0);
        group.throughput(Throughput::Elements(size as u64));

        for op in [
            SetOperation::Union,
            SetOperation::Intersection,
            SetOperation::Difference,
        ] {
            group.bench_function(BenchmarkId::new(op.as_str(), size), |bench| {
                bench.iter(|| set_operation(op, black_box(&a), black_box(&b), &config))
            });
        }
    }

    group.finish();
}

fn bench_adjacent_rooms(c: &mut Criterion) {
    let left = rect(0.0, 0.0, 400.0, 300.0);
    let right = rect(400.0, 0.0, 700.0, 300.0);
    let config = BooleanConfig::default();

    c.bench_function("union_adjacent_rooms", |b| {
        b.iter(|| set_operation(SetOperation::Union, black_box(&left), black_box(&right), &config))
    });
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_predicates");

    for size in [64, 1024] {
        let ring = generate_round_room(size, 0.0, 100.0);
        let hole = generate_round_room(size, 0.0, 30.0);
        let mut rotated = ring.clone();
        rotated.rotate_left(size / 3);
        rotated.reverse();
        let probe = Point2::new(50.0, 10.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("inside_with_hole", size), &size, |b, _| {
            let rings = [ring.clone(), hole.clone()];
            b.iter(|| inside(black_box(probe), &rings, false))
        });

        group.bench_with_input(BenchmarkId::new("point_in_face", size), &size, |b, _| {
            b.iter(|| point_in_face(black_box(probe), &ring))
        });

        group.bench_with_input(BenchmarkId::new("ring_equals", size), &size, |b, _| {
            b.iter(|| ring_equals(black_box(&ring), black_box(&rotated)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_set_operations,
    bench_adjacent_rooms,
    bench_predicates
);
criterion_main!(benches);
