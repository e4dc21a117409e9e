//! Joint angle extraction
//!
//! Computes the angle at the elbow between the rays elbow→wrist and
//! elbow→shoulder, independently per frame:
//!
//! 1. BA = wrist − elbow, BC = shoulder − elbow
//! 2. cos θ = (BA · BC) / (‖BA‖ ‖BC‖), clamped to [−1, 1]
//! 3. θ = arccos, converted to the requested unit
//!
//! The clamp guards against floating-point round-off pushing the cosine
//! slightly outside [−1, 1], where arccos is undefined. It is a correctness
//! requirement, not an optimization.
//!
//! # Example
//!
//! ```
//! use stride_kinematics::features::angle::{calculate_angle, AngleUnit};
//! use stride_kinematics::trial::Point2;
//!
//! let angle = calculate_angle(
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     AngleUnit::Degrees,
//! );
//! assert!((angle.unwrap() - 90.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::trial::{Frame, Point2};

/// Unit for reported angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Degrees (default for reported columns)
    Degrees,
    /// Radians
    Radians,
}

/// Compute the joint angle at the elbow vertex
///
/// Noisy tracking routinely collapses two landmarks onto the same pixel, so a
/// degenerate triplet (either ray of zero length) is an expected, recoverable
/// condition: the result is `None`, the missing-value sentinel, and never an
/// error. Callers append the sentinel to the output column and continue.
///
/// # Arguments
///
/// * `wrist` - Wrist landmark (ray A endpoint)
/// * `elbow` - Elbow landmark (the angle vertex)
/// * `shoulder` - Shoulder landmark (ray C endpoint)
/// * `unit` - Unit of the returned angle
///
/// # Returns
///
/// The angle at the elbow in the requested unit, or `None` for degenerate
/// geometry.
pub fn calculate_angle(
    wrist: Point2,
    elbow: Point2,
    shoulder: Point2,
    unit: AngleUnit,
) -> Option<f64> {
    let ba = (wrist.x - elbow.x, wrist.y - elbow.y);
    let bc = (shoulder.x - elbow.x, shoulder.y - elbow.y);

    let norm_ba = (ba.0 * ba.0 + ba.1 * ba.1).sqrt();
    let norm_bc = (bc.0 * bc.0 + bc.1 * bc.1).sqrt();

    if norm_ba == 0.0 || norm_bc == 0.0 {
        return None;
    }

    let dot = ba.0 * bc.0 + ba.1 * bc.1;
    let cos_theta = (dot / (norm_ba * norm_bc)).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();

    Some(match unit {
        AngleUnit::Degrees => theta.to_degrees(),
        AngleUnit::Radians => theta,
    })
}

/// Compute the joint-angle column for a whole trial
///
/// One entry per frame, recomputed independently; `None` marks frames with
/// degenerate geometry.
pub fn joint_angles(frames: &[Frame], unit: AngleUnit) -> Vec<Option<f64>> {
    frames
        .iter()
        .map(|f| calculate_angle(f.wrist, f.elbow, f.shoulder, unit))
        .collect()
}
