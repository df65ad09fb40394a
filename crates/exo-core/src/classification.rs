//! Disposition labels and classification results.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Three-way classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disposition {
    /// Confirmed planet.
    Confirmed,
    /// Planet candidate awaiting confirmation.
    Candidate,
    /// Signal explained by something other than a planet.
    FalsePositive,
}

impl Disposition {
    /// Evaluation order used to break probability ties.
    pub const TIE_ORDER: [Disposition; 3] = [
        Disposition::Candidate,
        Disposition::Confirmed,
        Disposition::FalsePositive,
    ];

    /// Upper-case label used in serialized payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Disposition::Confirmed => "CONFIRMED",
            Disposition::Candidate => "CANDIDATE",
            Disposition::FalsePositive => "FALSE_POSITIVE",
        }
    }
}

impl Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scorer family that produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelUsed {
    /// Tabular threshold scorer.
    XGBoost,
    /// Sequence (flux series) scorer.
    #[serde(rename = "LSTM")]
    Lstm,
    /// Weighted blend of tabular and sequence scorers.
    Hybrid,
}

/// Probability mass per disposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    /// Probability of a confirmed planet.
    #[serde(rename = "CONFIRMED")]
    pub confirmed: f64,
    /// Probability of a candidate.
    #[serde(rename = "CANDIDATE")]
    pub candidate: f64,
    /// Probability of a false positive.
    #[serde(rename = "FALSE_POSITIVE")]
    pub false_positive: f64,
}

impl Probabilities {
    /// Normalises raw non-negative scores so that they sum to one.
    ///
    /// Degenerate inputs (non-positive or non-finite total) yield the uniform
    /// distribution.
    pub fn from_scores(confirmed: f64, candidate: f64, false_positive: f64) -> Self {
        let total = confirmed + candidate + false_positive;
        if !total.is_finite() || total <= 0.0 {
            return Self {
                confirmed: 1.0 / 3.0,
                candidate: 1.0 / 3.0,
                false_positive: 1.0 / 3.0,
            };
        }
        Self {
            confirmed: confirmed / total,
            candidate: candidate / total,
            false_positive: false_positive / total,
        }
    }

    /// Probability assigned to `disposition`.
    pub fn get(&self, disposition: Disposition) -> f64 {
        match disposition {
            Disposition::Confirmed => self.confirmed,
            Disposition::Candidate => self.candidate,
            Disposition::FalsePositive => self.false_positive,
        }
    }

    /// Weighted sum `self * own + other * (1 - own)`, class by class.
    pub fn blend(&self, other: &Probabilities, own_weight: f64) -> Self {
        let other_weight = 1.0 - own_weight;
        Self {
            confirmed: self.confirmed * own_weight + other.confirmed * other_weight,
            candidate: self.candidate * own_weight + other.candidate * other_weight,
            false_positive: self.false_positive * own_weight + other.false_positive * other_weight,
        }
    }

    /// Sum of the three probabilities.
    pub fn total(&self) -> f64 {
        self.confirmed + self.candidate + self.false_positive
    }

    /// Largest of the three probabilities.
    pub fn max(&self) -> f64 {
        self.confirmed.max(self.candidate).max(self.false_positive)
    }

    /// Disposition with the largest probability; ties resolve in
    /// [`Disposition::TIE_ORDER`].
    pub fn argmax(&self) -> Disposition {
        let mut best = Disposition::TIE_ORDER[0];
        for candidate in Disposition::TIE_ORDER.into_iter().skip(1) {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }
}

/// Final classification payload consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Winning disposition.
    pub disposition: Disposition,
    /// Probability of the winning disposition.
    pub confidence: f64,
    /// Normalised distribution over the three dispositions.
    pub probabilities: Probabilities,
    /// Scorer family that produced the result.
    pub model_used: ModelUsed,
}

impl ClassificationResult {
    /// Builds a result whose disposition and confidence follow from `probabilities`.
    pub fn from_probabilities(probabilities: Probabilities, model_used: ModelUsed) -> Self {
        Self {
            disposition: probabilities.argmax(),
            confidence: probabilities.max(),
            probabilities,
            model_used,
        }
    }

    /// Result substituted whenever classification fails internally.
    pub fn fallback() -> Self {
        Self {
            disposition: Disposition::Candidate,
            confidence: 0.5,
            probabilities: Probabilities {
                confirmed: 0.3,
                candidate: 0.5,
                false_positive: 0.2,
            },
            model_used: ModelUsed::Hybrid,
        }
    }
}

/// Named weight describing how much a feature drives a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    /// Human readable feature name.
    pub name: String,
    /// Relative importance weight.
    pub value: f64,
}

impl FeatureImportance {
    /// Creates a named importance weight.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
