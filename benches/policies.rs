//! Throughput benchmarks for the four eviction policies.
//!
//! Replays a fixed pseudo-random reference sequence so numbers are
//! comparable across runs. Optimal is expected to dominate the chart:
//! its victim selection scans the remaining sequence on every miss.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pagesim::{run, PageRef, Policy, SimConfig};

const SEQUENCE_LEN: usize = 4096;
const PAGE_UNIVERSE: u64 = 64;
const FRAMES: usize = 16;

fn reference_sequence() -> Vec<PageRef> {
    let mut rng = StdRng::seed_from_u64(2024);
    (0..SEQUENCE_LEN)
        .map(|_| PageRef::new(rng.gen_range(0..PAGE_UNIVERSE)))
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let refs = reference_sequence();
    let config = SimConfig::new(FRAMES).with_seed(7);

    let mut group = c.benchmark_group("policies");
    for policy in Policy::ALL {
        group.bench_function(policy.name(), |b| {
            b.iter(|| run(policy, black_box(&refs), &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
