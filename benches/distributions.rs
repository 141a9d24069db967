use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use classic_sorts::{bucket_sort, quick_sort};

const LEN: usize = 50_000;

fn generate_uniform(rng: &mut StdRng, length: usize) -> Vec<f64> {
    (0..length).map(|_| rng.gen_range(0.0..1.0)).collect()
}

fn generate_exponential(rng: &mut StdRng, length: usize) -> Vec<f64> {
    let exp = Exp::<f64>::new(10.0).unwrap();
    (0..length).map(|_| exp.sample(rng).min(1.0)).collect()
}

fn generate_almost_sorted(rng: &mut StdRng, length: usize) -> Vec<f64> {
    let mut data: Vec<f64> = (0..length).map(|i| i as f64 / length as f64).collect();
    for _ in 0..length / 100 {
        let a = rng.gen_range(0..length);
        let b = rng.gen_range(0..length);
        data.swap(a, b);
    }
    data
}

fn benchmark_distributions(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let inputs = [
        ("uniform", generate_uniform(&mut rng, LEN), true),
        ("exponential", generate_exponential(&mut rng, LEN), true),
        // last-element pivoting degenerates here, quick sort would recurse LEN deep
        ("almost sorted", generate_almost_sorted(&mut rng, LEN), false),
    ];

    for (name, data, with_quick) in inputs.iter() {
        let mut group = c.benchmark_group(*name);
        group.bench_function("bucket 256", |b| {
            b.iter(|| bucket_sort(black_box(data), 256, 0.0, 1.0))
        });
        if *with_quick {
            group.bench_function("quick", |b| {
                b.iter_batched_ref(|| data.clone(), |arr| { quick_sort(black_box(arr)); }, BatchSize::LargeInput)
            });
        }
        group.finish();
    }
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_distributions);
criterion_main!(benches);
