//! Error types for the gait analysis engine

use std::fmt;

/// Errors that can occur during trial analysis
///
/// Degenerate keypoint geometry is deliberately not represented here: a frame
/// whose angle cannot be measured yields a missing-value sentinel and processing
/// continues. These variants cover whole-trial failures that the caller must
/// handle explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid input parameters (empty trial, nonpositive frame rate, etc.)
    InvalidInput(String),

    /// Input table lacks the columns required by the layout.
    /// The caller should skip the whole trial.
    InsufficientColumns {
        /// Number of columns the layout requires
        required: usize,
        /// Number of columns actually present
        found: usize,
    },

    /// Phase indicator column contains a value outside {0, 1}.
    /// Continuing would corrupt every downstream counter for the trial.
    InvalidIndicator {
        /// Frame index of the offending value
        frame: usize,
        /// The raw value found
        value: f64,
    },

    /// Processing error during analysis
    ProcessingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::InsufficientColumns { required, found } => write!(
                f,
                "Insufficient columns: layout requires {} but row has {}",
                required, found
            ),
            AnalysisError::InvalidIndicator { frame, value } => write!(
                f,
                "Invalid phase indicator at frame {}: {} (expected 0 or 1)",
                frame, value
            ),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
