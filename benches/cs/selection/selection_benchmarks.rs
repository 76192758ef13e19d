use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orderstat::{deterministic_select, randomized_select_with_rng};

const SIZES: [usize; 10] = [
    1_000, 2_500, 5_000, 7_500, 10_000, 15_000, 20_000, 30_000, 40_000, 50_000,
];

fn random_input(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let upper = size as u64 * 10;
    (0..size).map(|_| rng.gen_range(0..=upper)).collect()
}

fn bench_median_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("median_selection");
    let mut pivot_rng = StdRng::seed_from_u64(0xBADC0DE);

    for &size in SIZES.iter() {
        let input = random_input(size, size as u64);
        let k = size / 2;

        group.bench_with_input(BenchmarkId::new("median_of_medians", size), &input, |b, v| {
            b.iter(|| deterministic_select(black_box(v), black_box(k)))
        });

        group.bench_with_input(BenchmarkId::new("quickselect", size), &input, |b, v| {
            b.iter(|| randomized_select_with_rng(black_box(v), black_box(k), &mut pivot_rng))
        });

        group.bench_with_input(BenchmarkId::new("std_select_nth_unstable", size), &input, |b, v| {
            // the selectors above clone their input too
            b.iter(|| {
                let mut work = v.clone();
                *work.select_nth_unstable(black_box(k)).1
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_median_selection);
criterion_main!(benches);
