//! Structured error types shared across exo crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ExoError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (field names, offending values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the exo pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ExoError {
    /// Sampling or scan configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(ErrorInfo),
    /// A required physical field is absent.
    #[error("missing physical data: {0}")]
    MissingPhysicalData(ErrorInfo),
    /// A physical field is present but outside its admissible domain.
    #[error("invalid physical data: {0}")]
    InvalidPhysicalData(ErrorInfo),
    /// A navigation transition was requested from the wrong screen.
    #[error("invalid transition: {0}")]
    InvalidTransition(ErrorInfo),
    /// A catalog lookup did not match any star.
    #[error("not found: {0}")]
    NotFound(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl ExoError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ExoError::InvalidConfig(info)
            | ExoError::MissingPhysicalData(info)
            | ExoError::InvalidPhysicalData(info)
            | ExoError::InvalidTransition(info)
            | ExoError::NotFound(info)
            | ExoError::Serde(info) => info,
        }
    }

    /// Returns the stable family name used in logs and serialized errors.
    pub fn family(&self) -> &'static str {
        match self {
            ExoError::InvalidConfig(_) => "InvalidConfig",
            ExoError::MissingPhysicalData(_) => "MissingPhysicalData",
            ExoError::InvalidPhysicalData(_) => "InvalidPhysicalData",
            ExoError::InvalidTransition(_) => "InvalidTransition",
            ExoError::NotFound(_) => "NotFound",
            ExoError::Serde(_) => "Serde",
        }
    }
}
