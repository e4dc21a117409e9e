//! # Stride Kinematics
//!
//! A gait analysis engine for limb-tracking experiments, extracting per-frame
//! kinematic features from 2-D tracked keypoints and segmenting the gait-phase
//! signal into discrete step cycles.
//!
//! ## Features
//!
//! - **Joint angle**: angle at the elbow between the wrist and shoulder rays,
//!   with a missing-value sentinel for degenerate tracking
//! - **Step displacement**: Euclidean wrist displacement between consecutive frames
//! - **Angular velocity**: frame-rate-scaled derivative of the joint angle
//! - **Cycle segmentation**: run-length counters and sparse boundary markers
//!   for step cycles and stance/swing phase runs
//!
//! ## Quick Start
//!
//! ```no_run
//! use stride_kinematics::{analyze_trial, AnalysisConfig, ColumnLayout, Trial};
//!
//! // Headerless rows from the tracking export (positional columns)
//! let rows: Vec<Vec<f64>> = vec![]; // Your tracked data
//! let trial = Trial::from_rows(&rows, ColumnLayout::default())?;
//!
//! let result = analyze_trial(&trial, AnalysisConfig::default())?;
//!
//! println!("{} completed cycles", result.metadata.completed_cycle_count);
//! # Ok::<(), stride_kinematics::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Trial input → Preprocessing → Feature Extraction → Cycle Segmentation → Summary → Output
//! ```
//!
//! Each stage is also callable on its own; see the module documentation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod preprocessing;
pub mod segmentation;
pub mod trial;

// Re-export main types
pub use analysis::result::{AnalysisMetadata, TrialAnalysis};
pub use analysis::summary::TrialSummary;
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use segmentation::CycleSegmentation;
pub use trial::{ColumnLayout, Frame, Phase, Point2, Trial};

/// Main analysis function
///
/// Runs the full pipeline over one trial: configured preprocessing, feature
/// extraction, cycle segmentation, and summary assembly.
///
/// # Arguments
///
/// * `trial` - Validated frame table for one trial
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// [`TrialAnalysis`] with the derived per-frame columns, per-trial summary,
/// and metadata
///
/// # Errors
///
/// Returns [`AnalysisError`] if the configuration is invalid or the trial is
/// emptied by preprocessing. Degenerate per-frame geometry is not an error;
/// affected frames carry the missing-value sentinel and are counted in the
/// metadata.
///
/// # Example
///
/// ```
/// use stride_kinematics::{analyze_trial, AnalysisConfig, ColumnLayout, Trial};
///
/// let rows: Vec<Vec<f64>> = (0..8)
///     .map(|i| {
///         let phase = [1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0][i];
///         vec![i as f64, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, phase]
///     })
///     .collect();
/// let trial = Trial::from_rows(&rows, ColumnLayout::default())?;
/// let result = analyze_trial(&trial, AnalysisConfig::default())?;
/// assert_eq!(result.segmentation.cycle_counter, vec![1, 2, 3, 4, 1, 2, 3, 4]);
/// # Ok::<(), stride_kinematics::AnalysisError>(())
/// ```
pub fn analyze_trial(
    trial: &Trial,
    config: AnalysisConfig,
) -> Result<TrialAnalysis, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting trial analysis: {} frames at {} Hz",
        trial.len(),
        config.frame_rate_hz
    );

    if !(config.frame_rate_hz.is_finite() && config.frame_rate_hz > 0.0) {
        return Err(AnalysisError::InvalidInput(format!(
            "Frame rate must be positive and finite, got {}",
            config.frame_rate_hz
        )));
    }

    // Preprocessing works on a private copy; the caller's trial is untouched.
    let mut frames = trial.frames().to_vec();

    if config.invert_y_axis {
        preprocessing::invert_y_axis(&mut frames);
    }

    if config.trim_trailing_frames > 0 {
        preprocessing::trim_trailing(&mut frames, config.trim_trailing_frames);
    }

    if frames.is_empty() {
        return Err(AnalysisError::ProcessingError(
            "Trial is empty after preprocessing".to_string(),
        ));
    }

    // Feature extraction
    let joint_angles = features::angle::joint_angles(&frames, config.angle_unit);
    let step_distances = features::distance::step_distances(&frames);
    let angular_velocities =
        features::angular_velocity::angular_velocities(&joint_angles, config.frame_rate_hz);

    let degenerate_frame_count = joint_angles.iter().filter(|a| a.is_none()).count();
    if degenerate_frame_count > 0 {
        log::warn!(
            "{} of {} frames have degenerate keypoint geometry",
            degenerate_frame_count,
            frames.len()
        );
    }

    // Cycle segmentation
    let phases: Vec<Phase> = frames.iter().map(|f| f.phase).collect();
    let segmentation = segmentation::segment_cycles(&phases)?;

    // Summary and metadata
    let summary = TrialSummary::from_columns(
        &segmentation,
        &angular_velocities,
        &phases,
        config.frame_rate_hz,
    );

    let mut warnings = Vec::new();
    if degenerate_frame_count * 10 > frames.len() {
        warnings.push(format!(
            "More than 10% of frames ({}/{}) have unmeasurable joint geometry",
            degenerate_frame_count,
            frames.len()
        ));
    }
    let completed_cycle_count = segmentation.completed_cycle_count();
    if completed_cycle_count == 0 {
        warnings.push("No completed gait cycles in trial".to_string());
    }

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    Ok(TrialAnalysis {
        joint_angles,
        step_distances,
        angular_velocities,
        segmentation,
        summary,
        metadata: AnalysisMetadata {
            frame_count: frames.len(),
            duration_seconds: frames.len() as f64 / config.frame_rate_hz,
            frame_rate_hz: config.frame_rate_hz,
            processing_time_ms,
            degenerate_frame_count,
            completed_cycle_count,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            warnings,
        },
    })
}
