//! Trial frame table
//!
//! In-memory representation of one trial: an ordered sequence of frames, each
//! carrying the tracked limb landmarks and a binary gait-phase indicator.
//!
//! Trials are built from headerless tabular rows addressed by fixed positional
//! index through a [`ColumnLayout`]. Validation happens once, at construction:
//! a row shorter than the layout fails with `InsufficientColumns`, and any
//! indicator value outside {0, 1} fails with `InvalidIndicator`. Downstream
//! code only ever sees typed, validated frames.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A 2-D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Binary gait phase for the limb under study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Limb in the air (indicator 0)
    Swing,
    /// Limb in ground contact (indicator 1)
    Stance,
}

impl Phase {
    /// Parse a raw indicator value
    ///
    /// Only exact 0.0 and 1.0 are accepted. Anything else (including NaN and
    /// fractional values from interpolated labels) is a hard error, since a
    /// silently coerced indicator would corrupt every downstream counter for
    /// the trial.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidIndicator` for any value outside {0, 1}.
    pub fn from_indicator(value: f64, frame: usize) -> Result<Self, AnalysisError> {
        if value == 0.0 {
            Ok(Phase::Swing)
        } else if value == 1.0 {
            Ok(Phase::Stance)
        } else {
            Err(AnalysisError::InvalidIndicator { frame, value })
        }
    }

    /// The raw indicator value (0 or 1)
    pub fn indicator(&self) -> u8 {
        match self {
            Phase::Swing => 0,
            Phase::Stance => 1,
        }
    }
}

/// One sampled time step of tracked motion data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Wrist landmark
    pub wrist: Point2,
    /// Elbow landmark (the angle vertex)
    pub elbow: Point2,
    /// Shoulder landmark
    pub shoulder: Point2,
    /// Gait phase of the limb in this frame
    pub phase: Phase,
}

/// Positional column indices for headerless tabular input
///
/// The tracked tables carry no header row; columns are addressed by fixed
/// position. Defaults match the upstream pose-estimation export: wrist x,y in
/// columns 0,1, elbow in 2,3, shoulder in 4,5, and the phase indicator in
/// column 7.
#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    /// Column of the wrist x coordinate (y is the next column)
    pub wrist_x: usize,
    /// Column of the elbow x coordinate (y is the next column)
    pub elbow_x: usize,
    /// Column of the shoulder x coordinate (y is the next column)
    pub shoulder_x: usize,
    /// Column of the binary phase indicator
    pub phase: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            wrist_x: 0,
            elbow_x: 2,
            shoulder_x: 4,
            phase: 7,
        }
    }
}

impl ColumnLayout {
    /// Minimum row width this layout can read from
    pub fn required_columns(&self) -> usize {
        let coord_max = self.wrist_x.max(self.elbow_x).max(self.shoulder_x) + 1;
        coord_max.max(self.phase) + 1
    }
}

/// One trial's frame table
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    frames: Vec<Frame>,
}

impl Trial {
    /// Build a trial directly from frames
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if `frames` is empty.
    pub fn new(frames: Vec<Frame>) -> Result<Self, AnalysisError> {
        if frames.is_empty() {
            return Err(AnalysisError::InvalidInput("Empty trial".to_string()));
        }
        Ok(Self { frames })
    }

    /// Build a trial from headerless positional rows
    ///
    /// Each row is one frame. Columns are read at the positions given by
    /// `layout`; columns not referenced by the layout are ignored (they belong
    /// to other landmarks used by external collaborators).
    ///
    /// # Errors
    ///
    /// * `AnalysisError::InvalidInput` if `rows` is empty
    /// * `AnalysisError::InsufficientColumns` if any row is shorter than the layout requires
    /// * `AnalysisError::InvalidIndicator` if the phase column holds a value outside {0, 1}
    pub fn from_rows(rows: &[Vec<f64>], layout: ColumnLayout) -> Result<Self, AnalysisError> {
        if rows.is_empty() {
            return Err(AnalysisError::InvalidInput("Empty trial".to_string()));
        }

        let required = layout.required_columns();
        let mut frames = Vec::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() < required {
                return Err(AnalysisError::InsufficientColumns {
                    required,
                    found: row.len(),
                });
            }

            frames.push(Frame {
                wrist: Point2::new(row[layout.wrist_x], row[layout.wrist_x + 1]),
                elbow: Point2::new(row[layout.elbow_x], row[layout.elbow_x + 1]),
                shoulder: Point2::new(row[layout.shoulder_x], row[layout.shoulder_x + 1]),
                phase: Phase::from_indicator(row[layout.phase], i)?,
            });
        }

        Ok(Self { frames })
    }

    /// Number of frames in the trial
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if the trial holds no frames
    ///
    /// A constructed `Trial` is never empty; this exists for completeness on
    /// the slice-like API.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frames of the trial, in time order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Phase indicator sequence, one entry per frame
    pub fn phases(&self) -> Vec<Phase> {
        self.frames.iter().map(|f| f.phase).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(wx: f64, wy: f64, ex: f64, ey: f64, sx: f64, sy: f64, phase: f64) -> Vec<f64> {
        // Columns 6 and 8+ belong to landmarks this layout does not read.
        vec![wx, wy, ex, ey, sx, sy, 0.0, phase]
    }

    #[test]
    fn test_from_rows_default_layout() {
        let rows = vec![
            row(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 1.0),
            row(1.5, 2.5, 3.0, 4.0, 5.0, 6.0, 0.0),
        ];
        let trial = Trial::from_rows(&rows, ColumnLayout::default()).unwrap();

        assert_eq!(trial.len(), 2);
        assert_eq!(trial.frames()[0].wrist, Point2::new(1.0, 2.0));
        assert_eq!(trial.frames()[0].elbow, Point2::new(3.0, 4.0));
        assert_eq!(trial.frames()[0].shoulder, Point2::new(5.0, 6.0));
        assert_eq!(trial.frames()[0].phase, Phase::Stance);
        assert_eq!(trial.frames()[1].phase, Phase::Swing);
    }

    #[test]
    fn test_from_rows_empty() {
        let result = Trial::from_rows(&[], ColumnLayout::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_from_rows_short_row() {
        let rows = vec![vec![1.0, 2.0, 3.0]];
        let result = Trial::from_rows(&rows, ColumnLayout::default());
        assert_eq!(
            result,
            Err(AnalysisError::InsufficientColumns {
                required: 8,
                found: 3
            })
        );
    }

    #[test]
    fn test_from_rows_invalid_indicator() {
        let rows = vec![
            row(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 1.0),
            row(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.5),
        ];
        let result = Trial::from_rows(&rows, ColumnLayout::default());
        assert_eq!(
            result,
            Err(AnalysisError::InvalidIndicator {
                frame: 1,
                value: 0.5
            })
        );
    }

    #[test]
    fn test_indicator_rejects_nan() {
        let result = Phase::from_indicator(f64::NAN, 3);
        assert!(matches!(
            result,
            Err(AnalysisError::InvalidIndicator { frame: 3, .. })
        ));
    }

    #[test]
    fn test_required_columns_default() {
        assert_eq!(ColumnLayout::default().required_columns(), 8);
    }
}
