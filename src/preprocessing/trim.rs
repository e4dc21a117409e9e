//! Trailing-frame trim
//!
//! The last frames of a recording are often unusable: the animal leaves the
//! camera's field of view and the tracker extrapolates garbage positions.
//! Discarding a fixed number of trailing frames before analysis avoids
//! feeding those artifacts into the counters.

use crate::trial::Frame;

/// Remove up to `count` frames from the end of the trial
///
/// If the trial has `count` or fewer frames it is left untouched; trimming a
/// trial away entirely would turn a recoverable nuisance into a hard failure
/// downstream.
pub fn trim_trailing(frames: &mut Vec<Frame>, count: usize) {
    if count == 0 || frames.len() <= count {
        return;
    }
    frames.truncate(frames.len() - count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial::{Phase, Point2};

    fn dummy_frames(n: usize) -> Vec<Frame> {
        (0..n)
            .map(|i| Frame {
                wrist: Point2::new(i as f64, 0.0),
                elbow: Point2::new(0.0, 0.0),
                shoulder: Point2::new(0.0, 1.0),
                phase: Phase::Stance,
            })
            .collect()
    }

    #[test]
    fn test_trims_requested_count() {
        let mut frames = dummy_frames(10);
        trim_trailing(&mut frames, 4);
        assert_eq!(frames.len(), 6);
        assert_eq!(frames.last().unwrap().wrist.x, 5.0);
    }

    #[test]
    fn test_short_trial_untouched() {
        let mut frames = dummy_frames(3);
        trim_trailing(&mut frames, 4);
        assert_eq!(frames.len(), 3);

        let mut exact = dummy_frames(4);
        trim_trailing(&mut exact, 4);
        assert_eq!(exact.len(), 4);
    }

    #[test]
    fn test_zero_count_noop() {
        let mut frames = dummy_frames(5);
        trim_trailing(&mut frames, 0);
        assert_eq!(frames.len(), 5);
    }
}
