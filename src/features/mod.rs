//! Feature extraction modules
//!
//! Per-frame kinematic features computed from the tracked landmarks:
//! - Joint angle at the elbow vertex
//! - Step displacement of the wrist between consecutive frames
//! - Angular velocity of the joint angle

pub mod angle;
pub mod angular_velocity;
pub mod distance;
