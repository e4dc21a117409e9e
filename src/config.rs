//! Configuration parameters for trial analysis

use crate::features::angle::AngleUnit;

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Unit for the joint-angle column (default: Degrees)
    pub angle_unit: AngleUnit,

    /// Camera frame rate in Hz (default: 60.0)
    ///
    /// Used to convert frame counts to seconds and to scale angular velocity.
    pub frame_rate_hz: f64,

    /// Number of trailing frames to discard before analysis (default: 0)
    ///
    /// Tracking quality degrades as the animal leaves the field of view, so
    /// recordings often carry a few unusable frames at the end.
    pub trim_trailing_frames: usize,

    /// Flip the y coordinate of every landmark before analysis (default: false)
    ///
    /// Pose estimators emit image coordinates with y growing downward; enable
    /// this to get flexion angles in the anatomical convention.
    pub invert_y_axis: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Degrees,
            frame_rate_hz: 60.0,
            trim_trailing_frames: 0,
            invert_y_axis: false,
        }
    }
}
