//! Provenance and schema descriptors attached to analysis artefacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Seeds and tool versions needed to reproduce an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunProvenance {
    /// Schema version of the enclosing report.
    pub schema_version: SchemaVersion,
    /// Master deterministic seed used for all randomness.
    pub seed: u64,
    /// Seed actually used by each named stage.
    pub stage_seeds: BTreeMap<String, u64>,
    /// Version map for the crates involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}
