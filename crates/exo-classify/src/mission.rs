//! Survey-specific scorers selected by mission.
//!
//! Each survey model speaks its own label vocabulary; the winning label is
//! mapped onto the canonical three-way disposition.

use std::fmt::{self, Display};
use std::str::FromStr;

use exo_core::errors::{ErrorInfo, ExoError};
use exo_core::{
    ClassificationResult, Disposition, Mission, ModelUsed, PhysicalParameters, Probabilities,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::hybrid::predict_hybrid;
use crate::normalization::{magnitude_flux, Feature, TESS_TABLE};
use crate::sequence::SequenceSpec;

/// Probability given to every non-winning class by the label models.
const LOSING_CLASS_FLOOR: f64 = 0.1;

/// Scorer family chosen for a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionModel {
    /// Tabular + sequence hybrid trained on Kepler.
    Kepler,
    /// Tabular scorer trained on TESS objects of interest.
    Tess,
    /// Flux/radius sequence scorer trained on combined TESS and Kepler data.
    TessKepler,
    /// Flux sequence scorer trained on TrES photometry.
    ImproveTess,
}

impl MissionModel {
    /// All models, in CLI listing order.
    pub const ALL: [MissionModel; 4] = [
        MissionModel::Kepler,
        MissionModel::Tess,
        MissionModel::TessKepler,
        MissionModel::ImproveTess,
    ];

    /// Model used for stars observed by `mission`.
    ///
    /// Missions without a dedicated model fall back to the Kepler hybrid.
    pub fn for_mission(mission: &Mission) -> Self {
        match mission {
            Mission::Tess => MissionModel::Tess,
            Mission::Kepler => MissionModel::Kepler,
            Mission::Tres => MissionModel::ImproveTess,
            Mission::K2 => MissionModel::TessKepler,
            Mission::Other(_) => MissionModel::Kepler,
        }
    }

    /// Stable kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            MissionModel::Kepler => "kepler",
            MissionModel::Tess => "tess",
            MissionModel::TessKepler => "tess-kepler",
            MissionModel::ImproveTess => "improve-tess",
        }
    }

    /// Scorer family reported in the classification result.
    pub fn model_used(&self) -> ModelUsed {
        match self {
            MissionModel::Kepler => ModelUsed::Hybrid,
            MissionModel::Tess => ModelUsed::XGBoost,
            MissionModel::TessKepler | MissionModel::ImproveTess => ModelUsed::Lstm,
        }
    }

    /// Runs the model on `params` with the default sequence shape.
    pub fn predict<R: Rng + ?Sized>(
        &self,
        params: &PhysicalParameters,
        rng: &mut R,
    ) -> Result<ClassificationResult, ExoError> {
        self.predict_with(params, &SequenceSpec::default(), rng)
    }

    /// Runs the model on `params`; `sequence` only affects the Kepler hybrid.
    pub fn predict_with<R: Rng + ?Sized>(
        &self,
        params: &PhysicalParameters,
        sequence: &SequenceSpec,
        rng: &mut R,
    ) -> Result<ClassificationResult, ExoError> {
        match self {
            MissionModel::Kepler => predict_hybrid(params, sequence, rng),
            MissionModel::Tess => Ok(predict_tess(params).into_classification(self.model_used())),
            MissionModel::TessKepler => {
                Ok(predict_tess_kepler(params).into_classification(self.model_used()))
            }
            MissionModel::ImproveTess => {
                Ok(predict_improve_tess(params).into_classification(self.model_used()))
            }
        }
    }
}

impl Display for MissionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MissionModel {
    type Err = ExoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_lowercase();
        MissionModel::ALL
            .into_iter()
            .find(|model| model.name() == wanted)
            .ok_or_else(|| {
                ExoError::InvalidConfig(
                    ErrorInfo::new("unknown-model", format!("unknown model '{value}'"))
                        .with_hint("expected one of kepler, tess, tess-kepler, improve-tess"),
                )
            })
    }
}

/// Label vocabulary that maps onto the canonical disposition.
pub trait SurveyLabel: Copy + fmt::Debug {
    /// Canonical disposition for this label.
    fn disposition(&self) -> Disposition;
}

/// TESS object-of-interest dispositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TessLabel {
    /// Planet candidate.
    Pc,
    /// Confirmed planet.
    Cp,
    /// False positive.
    Fp,
    /// Ambiguous planet candidate.
    Apc,
    /// False alarm.
    Fa,
    /// Known planet.
    Kp,
}

impl SurveyLabel for TessLabel {
    fn disposition(&self) -> Disposition {
        match self {
            TessLabel::Cp => Disposition::Confirmed,
            TessLabel::Pc | TessLabel::Apc | TessLabel::Kp => Disposition::Candidate,
            TessLabel::Fp | TessLabel::Fa => Disposition::FalsePositive,
        }
    }
}

/// Three-way vocabulary of the photometry-only models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotometryLabel {
    /// No planetary signal.
    NoPlanet,
    /// Planet candidate.
    Candidate,
    /// Confirmed planet.
    Confirmed,
}

impl SurveyLabel for PhotometryLabel {
    fn disposition(&self) -> Disposition {
        match self {
            PhotometryLabel::Confirmed => Disposition::Confirmed,
            PhotometryLabel::Candidate => Disposition::Candidate,
            PhotometryLabel::NoPlanet => Disposition::FalsePositive,
        }
    }
}

/// Raw per-label scores of one survey model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScores<L: SurveyLabel, const N: usize> {
    labels: [L; N],
    scores: [f64; N],
}

impl<L: SurveyLabel, const N: usize> LabelScores<L, N> {
    fn new(labels: [L; N], scores: [f64; N]) -> Self {
        Self { labels, scores }
    }

    fn add(&mut self, label_index: usize, amount: f64) {
        self.scores[label_index] += amount;
    }

    /// Scores normalized to sum to one.
    pub fn probabilities(&self) -> [f64; N] {
        let total: f64 = self.scores.iter().sum();
        let mut out = [0.0; N];
        for (slot, score) in out.iter_mut().zip(self.scores.iter()) {
            *slot = score / total;
        }
        out
    }

    /// First label holding the maximum probability, with that probability.
    pub fn winner(&self) -> (L, f64) {
        let probabilities = self.probabilities();
        let mut best = 0;
        for (idx, probability) in probabilities.iter().enumerate().skip(1) {
            if *probability > probabilities[best] {
                best = idx;
            }
        }
        (self.labels[best], probabilities[best])
    }

    /// Maps the winning label onto the canonical disposition.
    ///
    /// The winning class receives the winning label's probability, the other
    /// two receive a fixed floor, and the triple is renormalized.
    pub fn into_classification(self, model_used: ModelUsed) -> ClassificationResult {
        let (label, confidence) = self.winner();
        let winning = label.disposition();
        let share = |d: Disposition| if d == winning { confidence } else { LOSING_CLASS_FLOOR };
        let probabilities = Probabilities::from_scores(
            share(Disposition::Confirmed),
            share(Disposition::Candidate),
            share(Disposition::FalsePositive),
        );
        ClassificationResult::from_probabilities(probabilities, model_used)
    }
}

/// TESS tabular scorer over six TOI labels.
pub fn predict_tess(params: &PhysicalParameters) -> LabelScores<TessLabel, 6> {
    const PC: usize = 0;
    const CP: usize = 1;
    const FP: usize = 2;

    let features = TESS_TABLE.normalize(params);
    let period = features.physical(Feature::Period);
    let prad = features.physical(Feature::PlanetRadius);
    let teff = features.physical(Feature::Temperature);
    let radius_ratio = features.physical(Feature::RadiusRatio);

    let mut scores = LabelScores::new(
        [
            TessLabel::Pc,
            TessLabel::Cp,
            TessLabel::Fp,
            TessLabel::Apc,
            TessLabel::Fa,
            TessLabel::Kp,
        ],
        [0.1; 6],
    );

    if period < 5.0 {
        if prad < 2.0 {
            scores.add(CP, 0.4);
            scores.add(PC, 0.2);
        } else {
            scores.add(FP, 0.3);
        }
    } else if period < 20.0 {
        if prad < 3.0 {
            scores.add(PC, 0.3);
            scores.add(CP, 0.2);
        } else {
            scores.add(FP, 0.2);
        }
    } else {
        scores.add(PC, 0.2);
    }

    if radius_ratio < 0.3 {
        scores.add(CP, 0.3);
    } else if radius_ratio < 1.5 {
        scores.add(PC, 0.2);
    } else if radius_ratio > 5.0 {
        scores.add(FP, 0.4);
    }

    if teff > 4500.0 && teff < 6500.0 {
        if prad < 2.5 {
            scores.add(CP, 0.2);
        } else {
            scores.add(PC, 0.2);
        }
    }

    scores
}

const NO_PLANET: usize = 0;
const CANDIDATE: usize = 1;
const CONFIRMED: usize = 2;

const PHOTOMETRY_LABELS: [PhotometryLabel; 3] = [
    PhotometryLabel::NoPlanet,
    PhotometryLabel::Candidate,
    PhotometryLabel::Confirmed,
];

/// Combined TESS+Kepler scorer over magnitude-derived flux and planet radius.
pub fn predict_tess_kepler(params: &PhysicalParameters) -> LabelScores<PhotometryLabel, 3> {
    let flux = magnitude_flux(params.apparent_magnitude());
    let prad = params.planet_radius_earth();

    let mut scores = LabelScores::new(PHOTOMETRY_LABELS, [0.2, 0.3, 0.5]);

    if flux > 0.05 && flux < 0.2 {
        if prad < 2.0 {
            scores.add(CONFIRMED, 0.4);
        } else {
            scores.add(CANDIDATE, 0.3);
        }
    } else if flux < 0.01 {
        scores.add(NO_PLANET, 0.4);
    } else {
        scores.add(CANDIDATE, 0.2);
    }

    if prad > 0.5 && prad < 3.0 {
        scores.add(CONFIRMED, 0.3);
    } else if prad > 3.0 {
        scores.add(CANDIDATE, 0.2);
    } else {
        scores.add(NO_PLANET, 0.2);
    }

    scores
}

/// TrES scorer over magnitude-derived flux.
pub fn predict_improve_tess(params: &PhysicalParameters) -> LabelScores<PhotometryLabel, 3> {
    let flux = magnitude_flux(params.apparent_magnitude());

    let mut scores = LabelScores::new(PHOTOMETRY_LABELS, [0.3, 0.4, 0.3]);

    if flux > 0.08 && flux < 0.15 {
        scores.add(CONFIRMED, 0.4);
        scores.add(CANDIDATE, 0.2);
    } else if flux < 0.05 {
        scores.add(NO_PLANET, 0.4);
    } else {
        scores.add(CANDIDATE, 0.3);
    }

    scores
}
