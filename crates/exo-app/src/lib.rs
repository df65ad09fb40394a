//! Application layer of the exo pipeline: the demo catalog, navigation
//! state, pipeline configuration and end-to-end analysis reports.

pub mod catalog;
pub mod config;
pub mod latency;
pub mod report;
pub mod state;

pub use catalog::Catalog;
pub use config::PipelineConfig;
pub use latency::simulated_fetch;
pub use report::{analyze_star, verify_hash, AnalysisOpts, AnalysisReport};
pub use state::{AppState, Screen, Tab};
