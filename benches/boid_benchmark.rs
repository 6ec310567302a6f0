/*
 * Fish Boids Benchmark
 *
 * Measures the per-frame cost of the simulation: a single boid update
 * (chain propagation plus draw-call emission) and a full school tick for
 * growing populations.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use fishboids::params::{BoidSpec, LARGE_FISH, SMALL_FISH};
use fishboids::{factory, BoidParams, Canvas, Color, DrawList, School, SchoolConfig, Viewport};

const VIEWPORT: Viewport = Viewport {
    width: 1920.0,
    height: 1080.0,
};

// Benchmark a single boid update for both body profiles
fn bench_boid_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("boid_update");

    for (name, radii) in [("small", &SMALL_FISH[..]), ("large", &LARGE_FISH[..])] {
        group.bench_function(name, |b| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut boid = factory::build(Color::Gray, radii, &BoidParams::default(), VIEWPORT, &mut rng)
                .expect("valid profile");
            let mut canvas = DrawList::new();

            b.iter(|| {
                canvas.clear();
                boid.update(VIEWPORT, &mut rng, &mut canvas);
                black_box(canvas.len());
            });
        });
    }

    group.finish();
}

// Benchmark the whole school tick for different population sizes
fn bench_school_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("school_tick");

    for num_boids in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let config = SchoolConfig {
                boids: (0..n).map(|_| BoidSpec::new(Color::Gray, &SMALL_FISH)).collect(),
                ..Default::default()
            };
            let mut school = School::from_config(&config, VIEWPORT, StdRng::seed_from_u64(7))
                .expect("valid population");
            let mut canvas = DrawList::new();

            b.iter(|| {
                school.tick(&mut canvas);
                black_box(canvas.len());
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_boid_update, bench_school_tick
}

criterion_main!(benches);
