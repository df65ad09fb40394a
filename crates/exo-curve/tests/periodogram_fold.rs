use exo_core::rng::RngHandle;
use exo_core::{LightCurvePoint, PhysicalParameters};
use exo_curve::{
    detection_bundle, detrend, peak_period, phase_fold, synthesize_periodogram, LightCurveConfig,
    PeriodogramSpec,
};
use proptest::prelude::*;

fn sample_curve(n: usize) -> Vec<LightCurvePoint> {
    (0..n)
        .map(|i| LightCurvePoint { t: i as f64 / 30.0, flux: 1.0 })
        .collect()
}

proptest! {
    #[test]
    fn power_stays_in_unit_interval_and_peaks_at_period(
        period in 0.3f64..500.0,
        seed in any::<u64>(),
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let spec = PeriodogramSpec::default();
        let scan = synthesize_periodogram(period, &sample_curve(10), &spec, &mut rng).unwrap();
        prop_assert_eq!(scan.len(), 100);
        for point in &scan {
            prop_assert!((0.0..=1.0).contains(&point.power));
        }
        let peak_region = scan
            .iter()
            .filter(|p| (0.95..=1.05).contains(&(p.period / period)))
            .any(|p| p.power > 0.7);
        prop_assert!(peak_region);
    }

    #[test]
    fn folded_phases_lie_in_unit_interval(period in 0.2f64..50.0, n in 0usize..400) {
        let curve = sample_curve(n);
        let folded = phase_fold(&curve, period);
        prop_assert_eq!(folded.len(), curve.len());
        for point in &folded {
            prop_assert!(point.phase >= 0.0 && point.phase < 1.0);
        }
    }
}

#[test]
fn periodogram_scan_spans_half_to_double_period() {
    let mut rng = RngHandle::from_seed(3);
    let scan = synthesize_periodogram(10.0, &[], &PeriodogramSpec::default(), &mut rng).unwrap();
    assert!((scan[0].period - 5.0).abs() < 1e-12);
    assert!((scan[99].period - (5.0 + 0.99 * 15.0)).abs() < 1e-9);
    let peak = peak_period(&scan).expect("peak");
    assert!((peak.period / 10.0 - 1.0).abs() < 0.1);
}

#[test]
fn zero_trial_periods_is_invalid_config() {
    let spec = PeriodogramSpec { num_points: 0 };
    assert!(synthesize_periodogram(10.0, &[], &spec, &mut RngHandle::from_seed(3)).is_err());
}

#[test]
fn phase_fold_keeps_input_order() {
    let curve = sample_curve(90);
    let folded = phase_fold(&curve, 1.0);
    for (point, source) in folded.iter().zip(&curve) {
        assert_eq!(point.flux, source.flux);
        assert!((point.phase - (source.t % 1.0)).abs() < 1e-12);
    }
}

#[test]
fn detrend_subtracts_slow_sinusoid() {
    let curve = sample_curve(300);
    let detrended = detrend(&curve, 2.0);
    assert_eq!(detrended.len(), curve.len());
    for (out, source) in detrended.iter().zip(&curve) {
        assert_eq!(out.t, source.t);
        let expected = source.flux - (source.t / 6.0).sin() * 0.002;
        assert!((out.flux - expected).abs() < 1e-15);
    }
}

#[test]
fn detection_bundle_is_reproducible_per_seed() {
    let star = PhysicalParameters::new(3.36, 1.2, 1.25, 3500.0, 4.8, 0.4, 12.1).unwrap();
    let config = LightCurveConfig::default();
    let spec = PeriodogramSpec::default();
    let a = detection_bundle(&star, &config, &spec, 2024).unwrap();
    let b = detection_bundle(&star, &config, &spec, 2024).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_eq!(a.raw_light_curve.len(), a.detrended.len());
    assert_eq!(a.raw_light_curve.len(), a.phase_folded.len());
    assert_eq!(a.periodogram.len(), 100);
}
