//! Simulation throughput per policy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{simulate, Policy};

/// Deterministic pseudo-random reference string with some locality.
fn reference_string(len: usize, pages: u32) -> Vec<u32> {
    let mut state: u32 = 0x9e37_79b9;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // Every fourth reference revisits a small hot set
            if i % 4 == 0 {
                state % 4
            } else {
                state % pages
            }
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for len in [100usize, 1_000] {
        let refs = reference_string(len, 32);
        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.name(), len), &refs, |b, refs| {
                b.iter(|| simulate(black_box(refs), 8, policy).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
