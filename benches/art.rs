use agrupar::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Synthetic gesture-like vectors: `n_classes` tight clusters in the unit
/// hypercube, round-robin over classes so training interleaves categories.
fn generate_samples(n: usize, dim: usize, n_classes: usize) -> Vec<Vector<f32>> {
    (0..n)
        .map(|i| {
            let class = i % n_classes;
            let center = (class as f32 + 0.5) / n_classes as f32;
            let data: Vec<f32> = (0..dim)
                .map(|d| {
                    let jitter = ((i * 31 + d * 17) % 100) as f32 / 5000.0;
                    (center + jitter).clamp(0.0, 1.0)
                })
                .collect();
            Vector::from_vec(data)
        })
        .collect()
}

fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("art_train");

    for n_classes in [4, 16, 64].iter() {
        let samples = generate_samples(1_000, 42, *n_classes);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_classes),
            n_classes,
            |b, _| {
                b.iter(|| {
                    let mut art = FuzzyArt::new(0.92, 0.001, 1.0).unwrap();
                    for x in &samples {
                        black_box(art.train(x).unwrap());
                    }
                    art.n_categories()
                });
            },
        );
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("art_classify");

    for n_classes in [4, 16, 64].iter() {
        let samples = generate_samples(1_000, 42, *n_classes);
        let mut art = FuzzyArt::new(0.92, 0.001, 1.0).unwrap();
        for x in &samples {
            art.train(x).unwrap();
        }
        group.bench_with_input(
            BenchmarkId::from_parameter(n_classes),
            n_classes,
            |b, _| {
                b.iter(|| {
                    for x in &samples {
                        black_box(art.classify(x).unwrap());
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_train, bench_classify);
criterion_main!(benches);
