//! Presentation-oriented explanations derived from physical parameters.
//!
//! Every output is a pure function of [`PhysicalParameters`]. A classification
//! may be passed along for logging but never changes the report.

pub mod confidence;
pub mod decision;
pub mod importance;
pub mod sanity;

use exo_core::{ClassificationResult, FeatureImportance, PhysicalParameters};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use confidence::{confidence_breakdown, ConfidenceBreakdown};
pub use decision::{decision_path, Decision, DecisionNode, Impact};
pub use importance::feature_importances;
pub use sanity::{sanity_checks, CheckStatus, SanityCheck};

/// Full explainability payload for one star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainabilityReport {
    /// Feature weights sorted descending.
    pub feature_importances: Vec<FeatureImportance>,
    /// Plausibility checks in fixed order.
    pub sanity_checks: Vec<SanityCheck>,
    /// Four-node decision trace.
    pub decision_path: Vec<DecisionNode>,
    /// Weighted confidence factors.
    pub confidence_breakdown: ConfidenceBreakdown,
}

/// Builds the explainability report for `params`.
pub fn explain(
    params: &PhysicalParameters,
    classification: Option<&ClassificationResult>,
) -> ExplainabilityReport {
    if let Some(result) = classification {
        debug!(
            disposition = %result.disposition,
            confidence = result.confidence,
            "explaining classified star"
        );
    }
    ExplainabilityReport {
        feature_importances: feature_importances(params),
        sanity_checks: sanity_checks(params),
        decision_path: decision_path(params),
        confidence_breakdown: confidence_breakdown(params),
    }
}
