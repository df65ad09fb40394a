use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exo_core::PhysicalParameters;
use exo_curve::{detection_bundle, LightCurveConfig, PeriodogramSpec};

fn bench_detection(c: &mut Criterion) {
    let star = PhysicalParameters::new(9.48803557, 2.9575, 2.26, 5455.0, 4.467, 0.927, 15.347)
        .expect("valid star");
    let config = LightCurveConfig::default();
    let spec = PeriodogramSpec::default();
    c.bench_function("detection_bundle_30d", |b| {
        b.iter(|| detection_bundle(black_box(&star), &config, &spec, 2024).expect("bundle"))
    });
}

criterion_group!(benches, bench_detection);
criterion_main!(benches);
