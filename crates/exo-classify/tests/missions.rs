use exo_classify::mission::{predict_improve_tess, predict_tess, predict_tess_kepler};
use exo_classify::{
    classify, classify_batch, classify_for_mission, classify_with_model, try_classify,
    MissionModel, PhotometryLabel, TessLabel,
};
use exo_core::rng::RngHandle;
use exo_core::{
    ClassificationResult, Coordinates, Disposition, Mission, ModelUsed, PhysicalParameters,
    PhysicalRecord, StarRecord,
};
use proptest::prelude::*;

fn toi_270b() -> PhysicalParameters {
    PhysicalParameters::new(3.36, 1.2, 1.25, 3500.0, 4.8, 0.4, 12.1).unwrap()
}

fn star(id: &str, mission: Mission, physical: PhysicalParameters) -> StarRecord {
    StarRecord {
        id: id.to_string(),
        name: id.to_string(),
        mission,
        coordinates: Coordinates::default(),
        physical,
        discovery_date: None,
    }
}

proptest! {
    #[test]
    fn every_model_returns_a_distribution(
        period in 0.2f64..800.0,
        prad in 0.1f64..40.0,
        srad in 0.1f64..5.0,
        mag in 0.0f64..18.0,
        seed in any::<u64>(),
    ) {
        let params = PhysicalParameters::new(period, 3.0, prad, 5600.0, 4.4, srad, mag).unwrap();
        for model in MissionModel::ALL {
            let mut rng = RngHandle::from_seed(seed);
            let result = model.predict(&params, &mut rng).unwrap();
            prop_assert!((result.probabilities.total() - 1.0).abs() < 1e-9);
            prop_assert_eq!(result.model_used, model.model_used());
        }
    }
}

#[test]
fn mission_selection_is_total() {
    assert_eq!(MissionModel::for_mission(&Mission::Tess), MissionModel::Tess);
    assert_eq!(MissionModel::for_mission(&Mission::Kepler), MissionModel::Kepler);
    assert_eq!(MissionModel::for_mission(&Mission::Tres), MissionModel::ImproveTess);
    assert_eq!(MissionModel::for_mission(&Mission::K2), MissionModel::TessKepler);
    assert_eq!(
        MissionModel::for_mission(&Mission::parse("CoRoT")),
        MissionModel::Kepler
    );
}

#[test]
fn model_names_parse_back() {
    for model in MissionModel::ALL {
        assert_eq!(model.name().parse::<MissionModel>().unwrap(), model);
    }
    assert_eq!(" TESS ".parse::<MissionModel>().unwrap(), MissionModel::Tess);
    let err = "kepler-2".parse::<MissionModel>().unwrap_err();
    assert_eq!(err.info().code, "unknown-model");
}

#[test]
fn tess_model_confirms_short_period_small_planet() {
    let scores = predict_tess(&toi_270b());
    let (label, confidence) = scores.winner();
    assert_eq!(label, TessLabel::Cp);
    assert!((confidence - 0.5 / 1.2).abs() < 1e-9);

    let result = scores.into_classification(ModelUsed::XGBoost);
    assert_eq!(result.disposition, Disposition::Confirmed);
    let expected = (0.5 / 1.2) / (0.5 / 1.2 + 0.2);
    assert!((result.probabilities.confirmed - expected).abs() < 1e-9);
    assert!((result.probabilities.candidate - result.probabilities.false_positive).abs() < 1e-12);
}

#[test]
fn tess_kepler_model_favours_confirmed_for_small_radius() {
    let params = PhysicalParameters::new(10.0, 2.0, 1.5, 5600.0, 4.4, 1.0, 12.0).unwrap();
    let (label, confidence) = predict_tess_kepler(&params).winner();
    assert_eq!(label, PhotometryLabel::Confirmed);
    assert!((confidence - 0.8 / 1.7).abs() < 1e-9);
}

#[test]
fn tied_labels_resolve_to_the_first_label() {
    let params = PhysicalParameters::new(10.0, 2.0, 3.0, 5600.0, 4.4, 1.0, 1.0).unwrap();
    let scores = predict_tess_kepler(&params);
    let probabilities = scores.probabilities();
    assert_eq!(probabilities[1], probabilities[2]);
    let (label, confidence) = scores.winner();
    assert_eq!(label, PhotometryLabel::Candidate);
    assert!((confidence - 0.5 / 1.4).abs() < 1e-9);
}

#[test]
fn improve_tess_model_rejects_faint_targets() {
    let params = PhysicalParameters::new(3.0, 2.0, 10.0, 6000.0, 4.3, 1.2, 11.0).unwrap();
    let result = predict_improve_tess(&params).into_classification(ModelUsed::Lstm);
    assert_eq!(result.disposition, Disposition::FalsePositive);
    assert!((result.probabilities.false_positive - 0.5 / 0.7).abs() < 1e-9);
}

#[test]
fn missing_period_falls_back() {
    let record = PhysicalRecord {
        prad: Some(1.6),
        srad: Some(1.05),
        ..PhysicalRecord::default()
    };
    let mut rng = RngHandle::from_seed(1);
    assert_eq!(classify(&record, &mut rng), ClassificationResult::fallback());
    assert_eq!(
        classify_for_mission(&record, &Mission::Tess, &mut rng),
        ClassificationResult::fallback()
    );

    let err = try_classify(&record, &mut rng).unwrap_err();
    assert_eq!(err.family(), "MissingPhysicalData");
    assert_eq!(err.info().code, "missing-period");
}

#[test]
fn explicit_model_overrides_mission() {
    let record = PhysicalRecord::from(toi_270b());
    let mut rng = RngHandle::from_seed(3);
    let result = classify_with_model(&record, MissionModel::Kepler, &mut rng);
    assert_eq!(result.model_used, ModelUsed::Hybrid);
    let result = classify_for_mission(&record, &Mission::Tess, &mut rng);
    assert_eq!(result.model_used, ModelUsed::XGBoost);
}

#[test]
fn batch_is_reproducible_and_order_preserving() {
    let stars = vec![
        star("TIC-1", Mission::Tess, toi_270b()),
        star(
            "KIC-1",
            Mission::Kepler,
            PhysicalParameters::new(384.8, 12.5, 1.6, 5757.0, 4.32, 1.05, 13.4).unwrap(),
        ),
        star("EPIC-1", Mission::K2, toi_270b()),
    ];
    let first = classify_batch(&stars, 42);
    let second = classify_batch(&stars, 42);
    assert_eq!(first, second);

    let ids: Vec<_> = first.iter().map(|row| row.star_id.as_str()).collect();
    assert_eq!(ids, ["TIC-1", "KIC-1", "EPIC-1"]);
    assert_eq!(first[0].model, MissionModel::Tess);
    assert_eq!(first[1].model, MissionModel::Kepler);
    assert_eq!(first[2].model, MissionModel::TessKepler);
}

#[test]
fn batch_star_streams_are_distinct() {
    let a = exo_classify::batch_star_seed(42, 0);
    let b = exo_classify::batch_star_seed(42, 1);
    assert_ne!(a, b);
    assert_eq!(a, exo_classify::batch_star_seed(42, 0));
}
