//! Threshold scorer over the nine tabular features ("XGBoost-like").

use exo_core::{PhysicalParameters, Probabilities};

use crate::normalization::{Feature, TabularFeatures, KEPLER_TABLE};

const BASE_SCORE: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
struct Scores {
    confirmed: f64,
    candidate: f64,
    false_positive: f64,
}

impl Scores {
    fn into_probabilities(self) -> Probabilities {
        Probabilities::from_scores(self.confirmed, self.candidate, self.false_positive)
    }
}

/// Scores already-normalized Kepler features.
pub fn score_tabular(features: &TabularFeatures) -> Probabilities {
    let period = features.physical(Feature::Period);
    let prad = features.physical(Feature::PlanetRadius);
    let teff = features.physical(Feature::Temperature);
    let radius_ratio = features.physical(Feature::RadiusRatio);
    let orbital_density = features.physical(Feature::OrbitalDensity);

    let mut s = Scores {
        confirmed: BASE_SCORE,
        candidate: BASE_SCORE,
        false_positive: BASE_SCORE,
    };

    if period < 3.0 {
        if prad < 0.5 {
            s.false_positive += 0.4;
            s.candidate += 0.1;
        } else {
            s.false_positive += 0.3;
            s.candidate += 0.2;
        }
    } else if period < 10.0 {
        if prad < 2.0 {
            s.candidate += 0.4;
            s.confirmed += 0.1;
        } else {
            s.candidate += 0.3;
            s.false_positive += 0.1;
        }
    } else if period < 50.0 {
        if prad < 3.0 {
            s.candidate += 0.3;
            s.confirmed += 0.2;
        } else {
            s.candidate += 0.2;
            s.confirmed += 0.1;
        }
    } else if prad < 2.0 {
        s.confirmed += 0.5;
    } else {
        s.confirmed += 0.3;
        s.candidate += 0.2;
    }

    if radius_ratio < 0.5 {
        s.confirmed += 0.2;
    } else if radius_ratio < 2.0 {
        s.candidate += 0.2;
    } else if radius_ratio > 10.0 {
        s.false_positive += 0.4;
    }

    if teff > 5000.0 && teff < 7000.0 {
        if prad < 3.0 {
            s.confirmed += 0.2;
        } else {
            s.candidate += 0.2;
        }
    }

    if orbital_density > 1.0 {
        s.false_positive += 0.3;
    } else if orbital_density < 0.01 {
        s.confirmed += 0.2;
    }

    s.into_probabilities()
}

/// Normalizes `params` with the Kepler table and scores them.
pub fn predict_tabular(params: &PhysicalParameters) -> Probabilities {
    score_tabular(&KEPLER_TABLE.normalize(params))
}
