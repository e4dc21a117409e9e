//! Trial preprocessing
//!
//! Optional corrections applied to the frame table before feature extraction:
//! - Axis convention fix (image coordinates to anatomical coordinates)
//! - Trailing-frame trim (discard end-of-recording tracking artifacts)

pub mod axis;
pub mod trim;

pub use axis::invert_y_axis;
pub use trim::trim_trailing;
