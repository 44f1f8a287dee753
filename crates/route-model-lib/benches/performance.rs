//! Performance benchmarks for route-model-lib
//!
//! Run with: cargo bench --package route-model-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use route_model_lib::{
    BoundingBox, Coordinate, InstructionAssembler, RawTurnEvent, RouteModel, RouteUpdate,
    TurnInstructionKind, icon_for,
};
use std::hint::black_box;

/// Generate a wiggly path with the specified number of points.
fn generate_path(num_points: usize, base_lat: f64, base_lon: f64) -> Vec<Coordinate> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            Coordinate::new(
                base_lat + t * 0.1 + (t * 50.0).sin() * 0.001,
                base_lon + t * 0.1 + (t * 30.0).cos() * 0.001,
            )
        })
        .collect()
}

/// One turn event every `spacing` points, cycling through all sign codes
fn generate_events(num_points: usize, spacing: usize) -> Vec<RawTurnEvent> {
    (0..num_points)
        .step_by(spacing)
        .enumerate()
        .map(|(i, first)| RawTurnEvent {
            sign: (i % 10) as i32 - 3,
            distance: 120.0,
            text: format!("Instruction {i}"),
            street_name: Some(format!("Street {}", i / 3)),
            interval: (first, (first + spacing).min(num_points - 1)),
            turn_angle: Some(i as f64 * 0.1),
        })
        .collect()
}

// ============================================================================
// Core Benchmarks
// ============================================================================

fn bench_bounding_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounding_box");

    for size in [1_000, 100_000, 1_000_000] {
        let path = generate_path(size, 51.5, -0.1);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &path, |b, path| {
            b.iter(|| BoundingBox::from_coordinates(black_box(path)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &path, |b, path| {
            b.iter(|| BoundingBox::from_coordinates_par(black_box(path)))
        });
    }

    group.finish();
}

fn bench_icon_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("icons");

    group.bench_function("fixed_table", |b| {
        b.iter(|| {
            for kind in TurnInstructionKind::ALL {
                black_box(icon_for(black_box(kind), None));
            }
        })
    });

    let angles: Vec<f64> = (0..1000).map(|i| (i as f64 / 1000.0 - 0.5) * 4.0 * std::f64::consts::PI).collect();
    group.throughput(Throughput::Elements(angles.len() as u64));
    group.bench_function("roundabout", |b| {
        b.iter(|| {
            for &angle in &angles {
                black_box(icon_for(TurnInstructionKind::Roundabout, Some(black_box(angle))));
            }
        })
    });

    group.finish();
}

fn bench_model_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_update");
    group.sample_size(20);

    let assembler = InstructionAssembler::default();
    for size in [10_000, 200_000] {
        let path = generate_path(size, 48.8, 2.3);
        let events = generate_events(size, 250);

        group.bench_with_input(BenchmarkId::new("assemble_and_update", size), &size, |b, _| {
            let mut route = RouteModel::new();
            b.iter(|| {
                let update = RouteUpdate::assemble(
                    &assembler,
                    path.clone(),
                    &events,
                    size as f64 * 10.0,
                    size as f64,
                    None,
                )
                .unwrap();
                route.update(update);
                black_box(route.bounding_box())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bounding_box,
    bench_icon_classification,
    bench_model_update
);
criterion_main!(benches);
