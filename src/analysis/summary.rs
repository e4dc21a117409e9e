//! Per-trial summary statistics
//!
//! Aggregates derived from the output columns for downstream comparison
//! across conditions: completed cycle durations in seconds, mean angular
//! velocity, and stance/swing frame counts.

use serde::{Deserialize, Serialize};

use crate::segmentation::CycleSegmentation;
use crate::trial::Phase;

/// Per-trial aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialSummary {
    /// Duration of each completed cycle in seconds, in order of completion
    ///
    /// A cycle of k frames spans k - 1 inter-frame intervals, hence the
    /// conversion (k - 1) / frame_rate.
    pub cycle_durations_seconds: Vec<f64>,

    /// Mean angular velocity over frames where it is defined, if any
    pub mean_angular_velocity: Option<f64>,

    /// Frames labeled stance
    pub stance_frame_count: usize,

    /// Frames labeled swing
    pub swing_frame_count: usize,
}

impl TrialSummary {
    /// Build the summary from the derived columns
    pub fn from_columns(
        segmentation: &CycleSegmentation,
        angular_velocities: &[Option<f64>],
        phases: &[Phase],
        frame_rate_hz: f64,
    ) -> Self {
        let cycle_durations_seconds = segmentation
            .cycle_lengths
            .iter()
            .flatten()
            .map(|&len| (len as f64 - 1.0) / frame_rate_hz)
            .collect();

        let defined: Vec<f64> = angular_velocities.iter().flatten().copied().collect();
        let mean_angular_velocity = if defined.is_empty() {
            None
        } else {
            Some(defined.iter().sum::<f64>() / defined.len() as f64)
        };

        let stance_frame_count = phases.iter().filter(|p| **p == Phase::Stance).count();
        let swing_frame_count = phases.len() - stance_frame_count;

        Self {
            cycle_durations_seconds,
            mean_angular_velocity,
            stance_frame_count,
            swing_frame_count,
        }
    }

    /// Mean completed-cycle duration in seconds, if any cycle completed
    pub fn mean_cycle_duration_seconds(&self) -> Option<f64> {
        if self.cycle_durations_seconds.is_empty() {
            return None;
        }
        Some(
            self.cycle_durations_seconds.iter().sum::<f64>()
                / self.cycle_durations_seconds.len() as f64,
        )
    }
}
