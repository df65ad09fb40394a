use std::fs;
use std::path::Path;

use exo_classify::SequenceSpec;
use exo_core::errors::{ErrorInfo, ExoError};
use exo_curve::{LightCurveConfig, PeriodogramSpec};
use serde::{Deserialize, Serialize};

use crate::report::AnalysisOpts;

fn config_error(code: &str, message: impl Into<String>) -> ExoError {
    ExoError::InvalidConfig(ErrorInfo::new(code, message))
}

fn default_seed() -> u64 {
    42
}

/// Pipeline configuration as read from YAML.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Master seed for all stages.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Light curve sampling.
    #[serde(default)]
    pub light_curve: LightCurveConfig,
    /// Period scan resolution.
    #[serde(default)]
    pub periodogram: PeriodogramSpec,
    /// Sequence scorer flux series.
    #[serde(default)]
    pub sequence: SequenceSpec,
    /// Simulated API latency in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            light_curve: LightCurveConfig::default(),
            periodogram: PeriodogramSpec::default(),
            sequence: SequenceSpec::default(),
            latency_ms: 0,
        }
    }
}

impl PipelineConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ExoError> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|err| config_error("config-parse", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self, ExoError> {
        let text = fs::read_to_string(path).map_err(|err| {
            ExoError::InvalidConfig(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Rejects settings no stage can run with.
    pub fn validate(&self) -> Result<(), ExoError> {
        self.analysis_opts(None).validate()
    }

    /// Analysis options for this configuration, with `seed` overriding the
    /// configured seed when given.
    pub fn analysis_opts(&self, seed: Option<u64>) -> AnalysisOpts {
        AnalysisOpts {
            seed: seed.unwrap_or(self.seed),
            light_curve: self.light_curve,
            periodogram: self.periodogram,
            sequence: self.sequence,
            model: None,
        }
    }
}
