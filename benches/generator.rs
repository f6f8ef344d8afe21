use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rand::{SeedableRng, rngs::StdRng};
use randstr::{Generator, RngEntropy};

pub fn criterion_benchmark(c: &mut Criterion) {
    for length in &[16, 64, 256, 1024] {
        c.bench_with_input(BenchmarkId::new("os-entropy", length), length, |b, &n| {
            let mut generator = Generator::os();
            b.iter(|| generator.generate(black_box(n)));
        });
        c.bench_with_input(BenchmarkId::new("std-rng", length), length, |b, &n| {
            let mut generator = Generator::new(RngEntropy::new(StdRng::seed_from_u64(0)));
            b.iter(|| generator.generate(black_box(n)));
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
