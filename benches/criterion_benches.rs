#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use sokoban_search::config::{Config, Method};
use sokoban_search::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_detour_bidirectional(c: &mut Criterion) {
    bench_level(c, Method::Bidirectional, "levels/custom/03-detour.txt", 100);
}

#[allow(unused)]
fn bench_detour_iterative_deepening(c: &mut Criterion) {
    bench_level(c, Method::IterativeDeepening, "levels/custom/03-detour.txt", 100);
}

#[allow(unused)]
fn bench_no_solution_bidirectional(c: &mut Criterion) {
    // both frontiers run out
    bench_level(c, Method::Bidirectional, "levels/custom/04-no-solution.txt", 100);
}

fn bench_level(c: &mut Criterion, method: Method, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();
    let config = Config::new(method);

    c.bench(
        &method.to_string(),
        Benchmark::new(level_path, move |b| {
            b.iter(|| criterion::black_box(level.solve(criterion::black_box(config))))
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_detour_bidirectional,
    bench_detour_iterative_deepening,
    bench_no_solution_bidirectional,
);
criterion_main!(benches);
