//! Example: Analyze multiple trial files in parallel
//!
//! Usage:
//!   cargo run --release --example analyze_batch -- [--jobs N] [--json] <file1.csv> <file2.csv> ...
//!
//! Input files are headerless CSV exports from the tracking pipeline, one row
//! per frame, columns addressed positionally (wrist x,y = 0,1; elbow = 2,3;
//! shoulder = 4,5; phase indicator = 7).
//!
//! Notes:
//! - Parallelism is across trials (batch-level). Each trial analysis is still
//!   single-threaded; trials are independent so this is safe.
//! - Default workers: (available CPU threads - 1), keeping one core free.

use rayon::prelude::*;
use serde::Serialize;
use stride_kinematics::{analyze_trial, AnalysisConfig, AnalysisError, ColumnLayout, Trial};

use std::env;
use std::time::Instant;

/// Read a headerless positional CSV into rows of f64 cells.
fn read_rows(path: &str) -> Result<Vec<Vec<f64>>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|cell| cell.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

fn load_trial(path: &str) -> Result<Trial, Box<dyn std::error::Error>> {
    let rows = read_rows(path)?;
    Ok(Trial::from_rows(&rows, ColumnLayout::default())?)
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1).max(1))
        .unwrap_or(1)
}

#[derive(Clone, Serialize)]
struct ItemOut {
    path: String,
    ok: bool,
    frames: usize,
    completed_cycles: usize,
    mean_cycle_duration_s: Option<f64>,
    mean_angular_velocity: Option<f64>,
    degenerate_frames: usize,
    processing_ms: f32,
    error: Option<String>,
}

impl ItemOut {
    fn failure(path: String, error: String) -> Self {
        Self {
            path,
            ok: false,
            frames: 0,
            completed_cycles: 0,
            mean_cycle_duration_s: None,
            mean_angular_velocity: None,
            degenerate_frames: 0,
            processing_ms: 0.0,
            error: Some(error),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut jobs: Option<usize> = None;
    let mut json = false;
    let mut paths: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--jobs" => {
                let value = args.next().ok_or("--jobs requires a value")?;
                jobs = Some(value.parse()?);
            }
            "--json" => json = true,
            "--help" => {
                eprintln!(
                    "Usage: analyze_batch [--jobs N] [--json] <file1.csv> <file2.csv> ..."
                );
                return Ok(());
            }
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one trial CSV path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} trials, jobs={}", paths.len(), jobs);

    let config = AnalysisConfig::default();

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .expect("Failed to build rayon thread pool");

    let outs: Vec<ItemOut> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let trial = match load_trial(path) {
                    Ok(trial) => trial,
                    Err(e) => {
                        // Structural failures skip the trial, never the batch
                        if let Some(err) = e.downcast_ref::<AnalysisError>() {
                            if matches!(err, AnalysisError::InsufficientColumns { .. }) {
                                eprintln!("Skipping {}: {}", path, err);
                            }
                        }
                        return ItemOut::failure(path.clone(), e.to_string());
                    }
                };
                match analyze_trial(&trial, config.clone()) {
                    Ok(result) => ItemOut {
                        path: path.clone(),
                        ok: true,
                        frames: result.metadata.frame_count,
                        completed_cycles: result.metadata.completed_cycle_count,
                        mean_cycle_duration_s: result.summary.mean_cycle_duration_seconds(),
                        mean_angular_velocity: result.summary.mean_angular_velocity,
                        degenerate_frames: result.metadata.degenerate_frame_count,
                        processing_ms: result.metadata.processing_time_ms,
                        error: None,
                    },
                    Err(e) => ItemOut::failure(path.clone(), e.to_string()),
                }
            })
            .collect()
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&outs)?);
    } else {
        for out in &outs {
            if out.ok {
                println!(
                    "{}: {} frames, {} cycles, mean cycle {:.3} s, {:.2} ms",
                    out.path,
                    out.frames,
                    out.completed_cycles,
                    out.mean_cycle_duration_s.unwrap_or(f64::NAN),
                    out.processing_ms
                );
            } else {
                println!(
                    "{}: FAILED ({})",
                    out.path,
                    out.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    let ok = outs.iter().filter(|o| o.ok).count();
    eprintln!(
        "Done: {}/{} trials in {:.2} s",
        ok,
        outs.len(),
        t0.elapsed().as_secs_f32()
    );

    Ok(())
}
