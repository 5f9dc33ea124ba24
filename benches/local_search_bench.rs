//! Criterion benchmarks for the GRASP local search.
//!
//! Uses random QBF instances with coefficients in `[-10, 10)` to measure
//! move evaluation and repair overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_grasp::local_search::{
    CandidatePools, LocalSearchConfig, LocalSearchRunner, MovePolicy, RepairStrategy, Repairer,
};
use u_grasp::{Qbf, Solution};
use u_numflow::random::create_rng;

// ===========================================================================
// Random QBF instance
// ===========================================================================

fn random_qbf(n: usize, seed: u64) -> Qbf {
    let mut rng = create_rng(seed);
    let matrix: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(-10.0..10.0)).collect())
        .collect();
    Qbf::new(matrix).expect("square finite matrix").inverse()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search_qbf");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let qbf = random_qbf(n, 42);
        for policy in [MovePolicy::BestImprovement, MovePolicy::FirstImprovement] {
            let config = LocalSearchConfig::default().with_policy(policy).with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), n),
                &(&qbf, config),
                |b, (q, c)| {
                    b.iter(|| {
                        let mut sol = Solution::empty();
                        let result = LocalSearchRunner::run(black_box(*q), &mut sol, black_box(c));
                        black_box((sol, result))
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair_full_selection");
    group.sample_size(10);

    let n = 1000;
    let qbf = random_qbf(n, 7);
    for strategy in [
        RepairStrategy::RightElement,
        RepairStrategy::CheaperRemoval,
        RepairStrategy::Randomized,
    ] {
        let repairer = Repairer::new(strategy, 0.5);
        group.bench_function(BenchmarkId::from_parameter(format!("{strategy:?}")), |b| {
            let mut rng = create_rng(42);
            b.iter(|| {
                let mut sol = Solution::from_elements(0..n);
                let mut pools = CandidatePools::new(n, &sol);
                let removed = repairer.repair(&qbf, &mut sol, &mut pools, &mut rng);
                black_box(removed)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_local_search, bench_repair);
criterion_main!(benches);
