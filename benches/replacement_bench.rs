//! Throughput of each eviction policy on a skewed synthetic workload.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{Latencies, PolicyKind, Simulator};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ACCESSES: usize = 10_000;
const DISTINCT_PAGES: u32 = 64;
const HOT_PAGES: u32 = 8;

/// Deterministic skewed reference string: a hot set of 8 pages gets
/// roughly half the traffic.
fn workload() -> (Vec<u32>, Latencies) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let reference: Vec<u32> = (0..ACCESSES)
        .map(|_| {
            if rng.random_bool(0.5) {
                rng.random_range(0..HOT_PAGES)
            } else {
                rng.random_range(0..DISTINCT_PAGES)
            }
        })
        .collect();
    let latencies: Vec<u64> = (0..ACCESSES).map(|_| rng.random_range(1..=50)).collect();

    (reference, Latencies::Explicit(latencies))
}

fn bench_policies(c: &mut Criterion) {
    let (reference, latencies) = workload();
    let mut group = c.benchmark_group("simulate");

    for frames in [4usize, 16, 32] {
        for policy in PolicyKind::ALL {
            let sim = Simulator::new(frames, policy).unwrap();
            group.bench_with_input(
                BenchmarkId::new(policy.tag(), frames),
                &reference,
                |b, reference| b.iter(|| sim.run(black_box(reference), &latencies).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
