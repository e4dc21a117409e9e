//! Cycle and phase run-length counters
//!
//! A single left-to-right pass over the phase sequence produces four columns:
//!
//! 1. **Cycle counter** - frames elapsed since the most recent cycle onset.
//!    A cycle onset at frame `i` means the previous frame was swing and
//!    either the current frame is stance or `i` is the final frame of the
//!    trial (the end-of-trial case force-closes a trailing cycle).
//! 2. **Cycle length marker** - the completed cycle's total frame count,
//!    present exactly at the last frame of each completed cycle, missing
//!    everywhere else.
//! 3. **Phase counter** - frames elapsed within the current uninterrupted
//!    stance or swing run; any value change restarts it.
//! 4. **Phase length marker** - same sparse relationship to the phase counter
//!    as the cycle length marker has to the cycle counter.
//!
//! The cycle-onset predicate and the phase-transition predicate are distinct:
//! onset compares the previous frame against the current-or-final condition,
//! transition compares adjacent values directly. They produce different
//! counters when stance or swing runs are one frame long, and must not be
//! merged.
//!
//! The scan carries its inter-frame state in an explicit struct rather than
//! reaching back into the output vectors by index.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::trial::Phase;

/// Run-length annotations for one trial
///
/// All four sequences have one entry per frame. Missing marker cells are
/// explicit `None`s, never omitted, so the columns line up with the frame
/// table when appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSegmentation {
    /// Frames into the current cycle, restarting at 1 on each cycle onset
    pub cycle_counter: Vec<u32>,

    /// Completed cycle length, present only at the last frame of each
    /// completed cycle
    pub cycle_lengths: Vec<Option<u32>>,

    /// Frames into the current phase run, restarting at 1 on each transition
    pub phase_counter: Vec<u32>,

    /// Completed phase run length, present only at the last frame of each
    /// completed run
    pub phase_lengths: Vec<Option<u32>>,
}

impl CycleSegmentation {
    /// Number of completed cycles (cycles closed by an onset after them)
    pub fn completed_cycle_count(&self) -> usize {
        self.cycle_lengths.iter().flatten().count()
    }

    /// Number of completed phase runs
    pub fn completed_phase_run_count(&self) -> usize {
        self.phase_lengths.iter().flatten().count()
    }
}

/// Inter-frame scan state
///
/// The previous counter values and the previous phase are the only state the
/// pass needs; everything else is derived per frame.
struct ScanState {
    cycle_count: u32,
    phase_count: u32,
    prev: Phase,
}

/// Segment a phase sequence into cycle and phase run annotations
///
/// # Arguments
///
/// * `phases` - Per-frame stance/swing sequence, length >= 1
///
/// # Returns
///
/// [`CycleSegmentation`] with the four per-frame columns
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty sequence. Out-of-range
/// indicator values cannot reach this function; they are rejected when the
/// trial is constructed.
///
/// # Example
///
/// ```
/// use stride_kinematics::segmentation::segment_cycles;
/// use stride_kinematics::trial::Phase::{Stance, Swing};
///
/// let seg = segment_cycles(&[Stance, Stance, Swing, Swing, Stance])?;
/// assert_eq!(seg.cycle_counter, vec![1, 2, 3, 4, 1]);
/// assert_eq!(seg.cycle_lengths[3], Some(4));
/// # Ok::<(), stride_kinematics::AnalysisError>(())
/// ```
pub fn segment_cycles(phases: &[Phase]) -> Result<CycleSegmentation, AnalysisError> {
    if phases.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty phase sequence".to_string(),
        ));
    }

    let n = phases.len();
    let mut cycle_counter = Vec::with_capacity(n);
    let mut phase_counter = Vec::with_capacity(n);

    let mut state = ScanState {
        cycle_count: 1,
        phase_count: 1,
        prev: phases[0],
    };
    cycle_counter.push(state.cycle_count);
    phase_counter.push(state.phase_count);

    for (i, &phase) in phases.iter().enumerate().skip(1) {
        // Onset looks at the previous frame plus the current-or-final
        // condition; transition compares adjacent values. Not the same test.
        let cycle_onset = state.prev == Phase::Swing && (i == n - 1 || phase == Phase::Stance);
        state.cycle_count = if cycle_onset {
            1
        } else {
            state.cycle_count + 1
        };

        let phase_transition = phase != state.prev;
        state.phase_count = if phase_transition {
            1
        } else {
            state.phase_count + 1
        };

        cycle_counter.push(state.cycle_count);
        phase_counter.push(state.phase_count);
        state.prev = phase;
    }

    let cycle_lengths = boundary_markers(&cycle_counter);
    let phase_lengths = boundary_markers(&phase_counter);

    log::debug!(
        "Segmented {} frames: {} completed cycles, {} completed phase runs",
        n,
        cycle_lengths.iter().flatten().count(),
        phase_lengths.iter().flatten().count()
    );

    Ok(CycleSegmentation {
        cycle_counter,
        cycle_lengths,
        phase_counter,
        phase_lengths,
    })
}

/// Sparse end-of-run markers for a restarting counter
///
/// `out[i]` holds `counter[i]` exactly when the counter restarts at `i + 1`,
/// so each completed run's total length appears at its last frame. The final
/// entry is always `None` (no successor to test).
fn boundary_markers(counter: &[u32]) -> Vec<Option<u32>> {
    let n = counter.len();
    (0..n)
        .map(|i| {
            if i + 1 < n && counter[i + 1] == 1 {
                Some(counter[i])
            } else {
                None
            }
        })
        .collect()
}
