//! Gait cycle segmentation
//!
//! Converts the per-frame binary stance/swing indicator into cycle and phase
//! boundary annotations: run-length counters plus sparse end-of-run length
//! markers.

pub mod cycle;

pub use cycle::{segment_cycles, CycleSegmentation};
