//! Coordinate axis correction
//!
//! Pose estimators report landmark positions in image coordinates, where y
//! grows downward. Flexion/extension angles and vertical displacement read
//! backwards in that convention, so analyses of limb kinematics flip the y
//! axis first.

use crate::trial::Frame;

/// Flip the y coordinate of every landmark in place
pub fn invert_y_axis(frames: &mut [Frame]) {
    for frame in frames.iter_mut() {
        frame.wrist.y = -frame.wrist.y;
        frame.elbow.y = -frame.elbow.y;
        frame.shoulder.y = -frame.shoulder.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::angle::{calculate_angle, AngleUnit};
    use crate::trial::{Phase, Point2};

    #[test]
    fn test_flips_all_landmarks() {
        let mut frames = vec![Frame {
            wrist: Point2::new(1.0, 2.0),
            elbow: Point2::new(3.0, -4.0),
            shoulder: Point2::new(5.0, 6.0),
            phase: Phase::Swing,
        }];
        invert_y_axis(&mut frames);
        assert_eq!(frames[0].wrist, Point2::new(1.0, -2.0));
        assert_eq!(frames[0].elbow, Point2::new(3.0, 4.0));
        assert_eq!(frames[0].shoulder, Point2::new(5.0, -6.0));
    }

    #[test]
    fn test_angle_invariant_under_flip() {
        // Mirroring all three points preserves the included angle
        let mut frames = vec![Frame {
            wrist: Point2::new(2.0, 1.0),
            elbow: Point2::new(0.0, 0.0),
            shoulder: Point2::new(-1.0, 3.0),
            phase: Phase::Stance,
        }];
        let before = calculate_angle(
            frames[0].wrist,
            frames[0].elbow,
            frames[0].shoulder,
            AngleUnit::Degrees,
        )
        .unwrap();
        invert_y_axis(&mut frames);
        let after = calculate_angle(
            frames[0].wrist,
            frames[0].elbow,
            frames[0].shoulder,
            AngleUnit::Degrees,
        )
        .unwrap();
        assert!((before - after).abs() < 1e-9);
    }
}
