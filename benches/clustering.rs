use boxscan::cluster::{Clustering, Dbscan};
use boxscan::index::IndexKind;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Synthetic blobs plus uniform background noise.
    let mut rng = StdRng::seed_from_u64(42);
    let n_blobs = 10;
    let per_blob = 180;
    let mut data: Vec<[f64; 3]> = Vec::with_capacity(n_blobs * per_blob + 200);
    for _ in 0..n_blobs {
        let center: [f64; 3] = [
            rng.random_range(0.0..10.0),
            rng.random_range(0.0..10.0),
            rng.random_range(0.0..10.0),
        ];
        for _ in 0..per_blob {
            data.push(center.map(|c| c + rng.random_range(-0.2..0.2)));
        }
    }
    for _ in 0..200 {
        data.push([
            rng.random_range(0.0..10.0),
            rng.random_range(0.0..10.0),
            rng.random_range(0.0..10.0),
        ]);
    }

    for (name, kind) in [("grid", IndexKind::Grid), ("brute_force", IndexKind::BruteForce)] {
        group.bench_function(format!("fit_predict_n2000_d3_{name}"), |b| {
            b.iter(|| {
                let model = Dbscan::new([0.1, 0.1, 0.1], 4).with_index(kind);
                model.fit_predict(black_box(&data)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
