//! Analysis result types and per-trial summaries

pub mod result;
pub mod summary;

pub use result::{AnalysisMetadata, TrialAnalysis};
pub use summary::TrialSummary;
