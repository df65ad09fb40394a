use exo_classify::sequence::{score_sequence, summarize, FluxSummary};
use exo_classify::{predict_hybrid, predict_tabular, SequenceSpec, KEPLER_TABLE};
use exo_core::rng::RngHandle;
use exo_core::{Disposition, ModelUsed, PhysicalParameters};
use proptest::prelude::*;

fn kepler_452b() -> PhysicalParameters {
    PhysicalParameters::new(384.8, 12.5, 1.6, 5757.0, 4.32, 1.05, 13.4).unwrap()
}

fn kepler_999b() -> PhysicalParameters {
    PhysicalParameters::new(1.2, 0.3, 0.3, 7000.0, 4.0, 1.5, 16.0).unwrap()
}

proptest! {
    #[test]
    fn hybrid_distribution_sums_to_one(
        period in 0.2f64..800.0,
        duration in 0.0f64..30.0,
        prad in 0.1f64..40.0,
        teff in 2500.0f64..9000.0,
        logg in 3.0f64..5.0,
        srad in 0.1f64..5.0,
        mag in 5.0f64..18.0,
        seed in any::<u64>(),
    ) {
        let params =
            PhysicalParameters::new(period, duration, prad, teff, logg, srad, mag).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        let result = predict_hybrid(&params, &SequenceSpec::default(), &mut rng).unwrap();
        prop_assert!((result.probabilities.total() - 1.0).abs() < 1e-9);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert_eq!(result.confidence, result.probabilities.max());
        prop_assert_eq!(result.model_used, ModelUsed::Hybrid);
    }
}

#[test]
fn tabular_scores_long_period_earth_analog_as_confirmed() {
    let probs = predict_tabular(&kepler_452b());
    assert!((probs.confirmed - 1.0 / 1.4).abs() < 1e-9);
    assert!((probs.candidate - 0.3 / 1.4).abs() < 1e-9);
    assert!((probs.false_positive - 0.1 / 1.4).abs() < 1e-9);
}

#[test]
fn tabular_penalizes_short_period_small_planet() {
    let probs = predict_tabular(&kepler_999b());
    assert!((probs.false_positive - 0.5).abs() < 1e-9);
    assert_eq!(probs.argmax(), Disposition::FalsePositive);
}

#[test]
fn hybrid_separates_confirmed_from_false_positive() {
    let mut rng = RngHandle::from_seed(7);
    let confirmed = predict_hybrid(&kepler_452b(), &SequenceSpec::default(), &mut rng).unwrap();
    let mut rng = RngHandle::from_seed(7);
    let rejected = predict_hybrid(&kepler_999b(), &SequenceSpec::default(), &mut rng).unwrap();

    assert_eq!(confirmed.disposition, Disposition::Confirmed);
    assert_eq!(rejected.disposition, Disposition::FalsePositive);
    assert!(rejected.probabilities.false_positive > confirmed.probabilities.false_positive);
}

#[test]
fn normalization_round_trips_physical_values() {
    let features = KEPLER_TABLE.normalize(&kepler_452b());
    let period = features.physical(exo_classify::Feature::Period);
    assert!((period - 384.8).abs() < 1e-9);
    assert!((features.z(exo_classify::Feature::Period) - (384.8 - 45.2) / 67.8).abs() < 1e-12);
}

#[test]
fn sequence_scores_moderate_dip_as_confirmed() {
    let probs = score_sequence(&FluxSummary {
        mean: 0.99,
        std: 0.005,
        depth: 0.03,
    });
    assert!((probs.confirmed - 0.8 / 1.8).abs() < 1e-9);
    assert_eq!(probs.argmax(), Disposition::Confirmed);
}

#[test]
fn sequence_scores_deep_noisy_dip_as_false_positive() {
    let probs = score_sequence(&FluxSummary {
        mean: 0.8,
        std: 0.2,
        depth: 0.5,
    });
    assert!((probs.false_positive - 1.2 / 1.7).abs() < 1e-9);
}

#[test]
fn summarize_rejects_empty_series() {
    let err = summarize(&[]).unwrap_err();
    assert_eq!(err.family(), "InvalidConfig");
    assert_eq!(err.info().code, "empty-flux-series");
}

#[test]
fn summarize_uses_population_statistics() {
    let summary = summarize(&[1.0, 0.9, 1.0, 0.9]).unwrap();
    assert!((summary.mean - 0.95).abs() < 1e-12);
    assert!((summary.std - 0.05).abs() < 1e-12);
    assert!((summary.depth - 0.1).abs() < 1e-12);
}

#[test]
fn hybrid_rejects_unusable_sequence_specs() {
    let mut rng = RngHandle::from_seed(4);
    let huge = SequenceSpec {
        points: usize::MAX,
        ..SequenceSpec::default()
    };
    let err = predict_hybrid(&kepler_452b(), &huge, &mut rng).unwrap_err();
    assert_eq!(err.info().code, "invalid-sequence-points");

    let noisy = SequenceSpec {
        noise_level: f64::INFINITY,
        ..SequenceSpec::default()
    };
    let err = predict_hybrid(&kepler_452b(), &noisy, &mut rng).unwrap_err();
    assert_eq!(err.info().code, "invalid-sequence-noise");
}
