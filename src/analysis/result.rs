//! Analysis result types

use serde::{Deserialize, Serialize};

use crate::analysis::summary::TrialSummary;
use crate::segmentation::CycleSegmentation;

/// Complete analysis of one trial
///
/// The derived columns are the contract with external collaborators (plot
/// generators, statistical-test drivers). Every column has one entry per
/// frame; missing cells are explicit `None`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialAnalysis {
    /// Joint angle at the elbow, `None` where the triplet was degenerate
    pub joint_angles: Vec<Option<f64>>,

    /// Wrist displacement from the previous frame, 0.0 at index 0
    pub step_distances: Vec<f64>,

    /// Angular velocity of the joint angle, `None` at index 0 and across
    /// missing angles
    pub angular_velocities: Vec<Option<f64>>,

    /// Cycle and phase run-length annotations
    pub segmentation: CycleSegmentation,

    /// Per-trial aggregates for downstream statistics
    pub summary: TrialSummary,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Number of frames analyzed (after any trimming)
    pub frame_count: usize,

    /// Trial duration in seconds at the configured frame rate
    pub duration_seconds: f64,

    /// Frame rate used for time and velocity scaling, in Hz
    pub frame_rate_hz: f64,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Frames whose angle could not be measured (degenerate triplets)
    pub degenerate_frame_count: usize,

    /// Number of completed gait cycles found by segmentation
    pub completed_cycle_count: usize,

    /// Algorithm version
    pub algorithm_version: String,

    /// Data-quality warnings (high degenerate share, no completed cycles, etc.)
    pub warnings: Vec<String>,
}
