//! End-to-end analysis of one star.

use std::collections::BTreeMap;

use exo_classify::{
    classify_params, validate_physical, MissionModel, SequenceSpec, ValidationReport,
};
use exo_core::rng::{
    RngHandle, CLASSIFIER_SUBSTREAM, LIGHT_CURVE_SUBSTREAM, PERIODOGRAM_SUBSTREAM,
};
use exo_core::{
    derive_substream_seed, stable_hash_string, ClassificationResult, ExoError, PhysicalRecord,
    RunProvenance, SchemaVersion, StarRecord,
};
use exo_curve::{detection_bundle, DetectionData, LightCurveConfig, PeriodogramSpec};
use exo_explain::{explain, ExplainabilityReport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Knobs for [`analyze_star`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOpts {
    /// Master seed; each stage derives its own substream.
    pub seed: u64,
    /// Light curve sampling.
    pub light_curve: LightCurveConfig,
    /// Period scan resolution.
    pub periodogram: PeriodogramSpec,
    /// Sequence scorer flux series.
    pub sequence: SequenceSpec,
    /// Model override; `None` selects by mission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<MissionModel>,
}

impl Default for AnalysisOpts {
    fn default() -> Self {
        Self {
            seed: 42,
            light_curve: LightCurveConfig::default(),
            periodogram: PeriodogramSpec::default(),
            sequence: SequenceSpec::default(),
            model: None,
        }
    }
}

impl AnalysisOpts {
    /// Checks every stage's settings before any series is allocated.
    pub fn validate(&self) -> Result<(), ExoError> {
        self.light_curve.validate()?;
        self.periodogram.validate()?;
        self.sequence.validate()
    }
}

/// Everything the presentation layer shows for one star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// SHA-256 of the canonical report with this field empty.
    pub analysis_hash: String,
    /// The analysed star.
    pub star: StarRecord,
    /// Model that produced the classification.
    pub model: MissionModel,
    /// Detection-stage series.
    pub detection: DetectionData,
    /// Classifier output.
    pub classification: ClassificationResult,
    /// Explainability payload.
    pub explainability: ExplainabilityReport,
    /// Physical plausibility checks.
    pub validation: ValidationReport,
    /// Seeds and versions.
    pub provenance: RunProvenance,
}

fn make_provenance(seed: u64) -> RunProvenance {
    let stage_seeds = [
        ("lightCurve", LIGHT_CURVE_SUBSTREAM),
        ("periodogram", PERIODOGRAM_SUBSTREAM),
        ("classifier", CLASSIFIER_SUBSTREAM),
    ]
    .into_iter()
    .map(|(stage, substream)| (stage.to_string(), derive_substream_seed(seed, substream)))
    .collect();

    let mut tool_versions = BTreeMap::new();
    tool_versions.insert("exo-app".to_string(), env!("CARGO_PKG_VERSION").to_string());

    RunProvenance {
        schema_version: SchemaVersion::default(),
        seed,
        stage_seeds,
        tool_versions,
    }
}

/// Runs detection, classification, explanation and validation for `star`.
pub fn analyze_star(star: &StarRecord, opts: &AnalysisOpts) -> Result<AnalysisReport, ExoError> {
    opts.validate()?;
    let params = &star.physical;
    let detection = detection_bundle(params, &opts.light_curve, &opts.periodogram, opts.seed)?;

    let model = opts
        .model
        .unwrap_or_else(|| MissionModel::for_mission(&star.mission));
    let mut classifier_rng = RngHandle::substream(opts.seed, CLASSIFIER_SUBSTREAM);
    let classification = classify_params(params, model, &opts.sequence, &mut classifier_rng);

    let explainability = explain(params, Some(&classification));
    let validation = validate_physical(&PhysicalRecord::from(*params));
    debug!(star = %star.id, valid = validation.valid, "validated physical record");

    let mut report = AnalysisReport {
        analysis_hash: String::new(),
        star: star.clone(),
        model,
        detection,
        classification,
        explainability,
        validation,
        provenance: make_provenance(opts.seed),
    };
    report.analysis_hash = stable_hash_string(&report)?;

    info!(
        star = %star.id,
        model = model.name(),
        disposition = %report.classification.disposition,
        hash = %report.analysis_hash,
        "analysis complete"
    );
    Ok(report)
}

/// Recomputes the hash of `report` and compares it with the stored one.
pub fn verify_hash(report: &AnalysisReport) -> Result<bool, ExoError> {
    let mut unhashed = report.clone();
    unhashed.analysis_hash = String::new();
    Ok(stable_hash_string(&unhashed)? == report.analysis_hash)
}
