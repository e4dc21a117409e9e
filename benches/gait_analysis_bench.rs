//! Performance benchmarks for trial analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stride_kinematics::{analyze_trial, AnalysisConfig, Frame, Phase, Point2, Trial};

/// Synthetic trial: 10 minutes at 60 Hz with 16-frame gait cycles.
fn synthetic_trial(frames: usize) -> Trial {
    let frames: Vec<Frame> = (0..frames)
        .map(|i| {
            let theta = i as f64 * 0.1;
            Frame {
                wrist: Point2::new(5.0 * theta.cos(), 5.0 * theta.sin()),
                elbow: Point2::new(0.0, 0.0),
                shoulder: Point2::new(0.0, 8.0),
                phase: if i % 16 < 10 {
                    Phase::Stance
                } else {
                    Phase::Swing
                },
            }
        })
        .collect();
    Trial::new(frames).expect("nonempty")
}

fn bench_analyze_trial(c: &mut Criterion) {
    let trial = synthetic_trial(60 * 600);
    let config = AnalysisConfig::default();

    c.bench_function("analyze_trial_10min", |b| {
        b.iter(|| {
            let _ = analyze_trial(black_box(&trial), black_box(config.clone()));
        });
    });
}

criterion_group!(benches, bench_analyze_trial);
criterion_main!(benches);
