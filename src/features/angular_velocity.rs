//! Angular velocity extraction
//!
//! Backward finite difference of the joint-angle column scaled by the frame
//! rate: ω[i] = (θ[i] − θ[i−1]) · frame_rate. The unit follows the angle
//! column (degrees/s or rad/s).
//!
//! Index 0 has no predecessor and is missing. A missing angle poisons both
//! differences it participates in; the sentinel propagates rather than being
//! interpolated away.

/// Compute the angular-velocity column from the joint-angle column
///
/// # Arguments
///
/// * `angles` - Per-frame joint angles, `None` where geometry was degenerate
/// * `frame_rate_hz` - Camera frame rate used to scale frame differences to
///   per-second velocity
///
/// # Returns
///
/// One entry per frame; `None` at index 0 and wherever either operand angle
/// is missing.
pub fn angular_velocities(angles: &[Option<f64>], frame_rate_hz: f64) -> Vec<Option<f64>> {
    let mut velocities = Vec::with_capacity(angles.len());
    let mut prev: Option<f64> = None;

    for &angle in angles {
        let velocity = match (prev, angle) {
            (Some(a), Some(b)) => Some((b - a) * frame_rate_hz),
            _ => None,
        };
        velocities.push(velocity);
        prev = angle;
    }

    if let Some(first) = velocities.first_mut() {
        *first = None;
    }

    velocities
}
