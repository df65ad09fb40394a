#![doc = "Heuristic disposition scorers: tabular, sequence, hybrid and mission-keyed."]

pub mod classify;
pub mod hybrid;
pub mod importance;
pub mod mission;
pub mod normalization;
pub mod sequence;
pub mod tabular;
pub mod validate;

pub use classify::{
    batch_star_seed, classify, classify_batch, classify_for_mission, classify_params,
    classify_with_model, try_classify, try_classify_params, try_classify_with_model,
    ClassifiedStar,
};
pub use hybrid::{predict_hybrid, TABULAR_WEIGHT};
pub use importance::{global_feature_importance, FEATURE_IMPORTANCE};
pub use mission::{MissionModel, PhotometryLabel, SurveyLabel, TessLabel};
pub use normalization::{Feature, NormalizationTable, TabularFeatures, KEPLER_TABLE, TESS_TABLE};
pub use sequence::{FluxSummary, SequenceSpec};
pub use tabular::predict_tabular;
pub use validate::{validate_physical, ValidationReport};
