use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use scanclust::cluster::{Dataset, Dbscan};

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Synthetic blobs around a handful of centers.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 3;
    let centers: Vec<Vec<f32>> = (0..8)
        .map(|_| (0..d).map(|_| rng.random::<f32>() * 100.0).collect())
        .collect();

    let data: Vec<Vec<f32>> = (0..n)
        .map(|i| {
            let c = &centers[i % centers.len()];
            c.iter().map(|x| x + rng.random::<f32>() * 4.0).collect()
        })
        .collect();
    let dataset = Dataset::new(data).unwrap();

    group.bench_function("run_n1000_d3", |b| {
        b.iter(|| {
            let model = Dbscan::new(1.5, 4);
            model.run(black_box(&dataset)).unwrap();
        })
    });

    group.bench_function("sweep_n1000_d3_3eps", |b| {
        b.iter(|| {
            let model = Dbscan::new(1.0, 4);
            model.sweep(black_box(&dataset), &[0.5, 1.5, 5.0]).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
