//! Criterion benchmarks for centroid training and prediction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dnose_core::{ProfileRegistry, TrainingRow, TrainingSet};
use dnose_ml::CentroidClassifier;
use dnose_sensor::SensorSimulator;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn simulated_set(samples_per_profile: usize) -> TrainingSet {
    let registry = ProfileRegistry::builtin();
    let simulator = SensorSimulator::new();
    let mut rng = StdRng::seed_from_u64(0xD05E);

    let mut set = TrainingSet::new();
    for profile in registry.profiles() {
        for _ in 0..samples_per_profile {
            let capture = simulator.capture(profile, &mut rng).unwrap();
            set.push(TrainingRow::new(capture.fingerprint, profile.family));
        }
    }
    set
}

fn bench_train(c: &mut Criterion) {
    let set = simulated_set(120);
    c.bench_function("train_480_rows", |b| {
        b.iter(|| {
            let mut classifier = CentroidClassifier::new();
            classifier.train(black_box(&set)).unwrap();
        })
    });
}

fn bench_predict(c: &mut Criterion) {
    let set = simulated_set(120);
    let mut classifier = CentroidClassifier::new();
    classifier.train(&set).unwrap();
    let fingerprint = set.rows()[0].fingerprint.clone();

    c.bench_function("predict_single", |b| {
        b.iter(|| classifier.predict(black_box(&fingerprint)).unwrap())
    });
}

criterion_group!(benches, bench_train, bench_predict);
criterion_main!(benches);
