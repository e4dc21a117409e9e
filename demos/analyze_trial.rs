//! Example: Analyze a single synthetic trial
//!
//! This example builds a short synthetic walking trial and prints the derived
//! columns and summary.

use stride_kinematics::{analyze_trial, AnalysisConfig, Frame, Phase, Point2, Trial};

/// Build a synthetic trial: the wrist swings around a fixed elbow while the
/// phase alternates between stance and swing runs.
fn synthetic_trial(cycles: usize, stance_len: usize, swing_len: usize) -> Trial {
    let mut frames = Vec::new();
    let cycle_len = stance_len + swing_len;

    for i in 0..cycles * cycle_len {
        let in_cycle = i % cycle_len;
        let phase = if in_cycle < stance_len {
            Phase::Stance
        } else {
            Phase::Swing
        };

        // Elbow fixed, wrist sweeping, shoulder above the elbow
        let theta = (i as f64 / cycle_len as f64) * std::f64::consts::TAU;
        frames.push(Frame {
            wrist: Point2::new(10.0 * theta.cos(), 10.0 * theta.sin()),
            elbow: Point2::new(0.0, 0.0),
            shoulder: Point2::new(0.0, 15.0),
            phase,
        });
    }

    Trial::new(frames).expect("synthetic trial is nonempty")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let trial = synthetic_trial(5, 12, 8);
    let config = AnalysisConfig::default();

    let result = analyze_trial(&trial, config)?;

    println!("Analysis Results:");
    println!("  Frames: {}", result.metadata.frame_count);
    println!("  Duration: {:.2} s", result.metadata.duration_seconds);
    println!(
        "  Completed cycles: {}",
        result.metadata.completed_cycle_count
    );
    if let Some(mean) = result.summary.mean_cycle_duration_seconds() {
        println!("  Mean cycle duration: {:.3} s", mean);
    }
    if let Some(omega) = result.summary.mean_angular_velocity {
        println!("  Mean angular velocity: {:.2} deg/s", omega);
    }
    println!(
        "  Stance/swing frames: {}/{}",
        result.summary.stance_frame_count, result.summary.swing_frame_count
    );
    println!(
        "  Degenerate frames: {}",
        result.metadata.degenerate_frame_count
    );
    println!(
        "  Processing time: {:.2} ms",
        result.metadata.processing_time_ms
    );
    for warning in &result.metadata.warnings {
        println!("  Warning: {}", warning);
    }

    Ok(())
}
