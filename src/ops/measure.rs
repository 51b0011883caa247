//! Bulk measurement and benchmarking.
//!
//! A benchmark repeatedly asks every shape in a snapshot for its volume and
//! then its surface area, timing the two phases separately. It runs on a
//! background thread and checks a [`CancelToken`] between iterations, so a
//! cancelled run still returns the timings it already collected.

use std::hint::black_box;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;

use crate::core::{AnyShape, Measure, ShapeKind};
use crate::ops::collection::Snapshot;

/// Surface area and volume of one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub kind: ShapeKind,
    pub surface_area: f64,
    pub volume: f64,
    /// V/SA, 0 when the surface area is 0
    pub efficiency: f64,
}

impl Measurement {
    pub fn of(shape: &AnyShape) -> Self {
        Measurement {
            name: shape.name().to_string(),
            kind: shape.kind(),
            surface_area: shape.surface_area(),
            volume: shape.volume(),
            efficiency: shape.efficiency(),
        }
    }
}

/// Measure every shape in parallel. Output order matches input order.
pub fn measure_all(shapes: &[Arc<AnyShape>]) -> Vec<Measurement> {
    shapes.par_iter().map(|s| Measurement::of(s)).collect()
}

/// Cooperative cancellation flag shared between a caller and a worker.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Shared counter of completed iterations.
#[derive(Debug, Clone)]
pub struct BenchProgress {
    completed: Arc<AtomicU64>,
    total: u64,
}

impl BenchProgress {
    pub fn new(total: u64) -> Self {
        BenchProgress {
            completed: Arc::new(AtomicU64::new(0)),
            total,
        }
    }

    fn record(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Benchmark parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Passes over the whole snapshot
    pub iterations: u64,
    /// Stop early once this much time has passed
    pub time_limit: Option<Duration>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            iterations: crate::util::config::DEFAULT_BENCH_ITERATIONS,
            time_limit: None,
        }
    }
}

/// How a benchmark run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum BenchStatus {
    Complete,
    /// Stopped early; timings cover only the completed iterations.
    Cancelled { completed_iterations: u64 },
}

impl BenchStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, BenchStatus::Complete)
    }
}

/// Timing for one phase (all volume calls, or all surface area calls).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseTiming {
    pub operations: u64,
    pub total_ms: f64,
    pub avg_ns: f64,
    pub ops_per_sec: f64,
}

impl PhaseTiming {
    fn new(operations: u64, elapsed: Duration) -> Self {
        let nanos = elapsed.as_nanos() as f64;
        let secs = elapsed.as_secs_f64();
        PhaseTiming {
            operations,
            total_ms: nanos / 1_000_000.0,
            avg_ns: if operations == 0 { 0.0 } else { nanos / operations as f64 },
            ops_per_sec: if secs > 0.0 { operations as f64 / secs } else { 0.0 },
        }
    }
}

/// A single shape measured once, with the time it took.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeTiming {
    #[serde(flatten)]
    pub measurement: Measurement,
    pub nanos: u64,
}

/// Result of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub status: BenchStatus,
    pub shapes: usize,
    pub iterations_requested: u64,
    pub iterations_completed: u64,
    pub volume: PhaseTiming,
    pub surface_area: PhaseTiming,
    pub per_shape: Vec<ShapeTiming>,
}

/// Run a benchmark on the calling thread.
///
/// `cancel` is checked before every iteration; the time limit, if any, trips
/// it. `progress` counts finished iterations.
pub fn run_benchmark(
    shapes: &[Arc<AnyShape>],
    config: &BenchConfig,
    cancel: &CancelToken,
    progress: &BenchProgress,
) -> BenchReport {
    tracing::debug!(
        "benchmark: {} shape(s), {} iteration(s)",
        shapes.len(),
        config.iterations
    );

    let start = Instant::now();
    let mut volume_time = Duration::ZERO;
    let mut area_time = Duration::ZERO;
    let mut completed = 0u64;

    while completed < config.iterations {
        if let Some(limit) = config.time_limit {
            if start.elapsed() >= limit {
                tracing::debug!("benchmark hit its time limit after {:?}", limit);
                cancel.cancel();
            }
        }
        if cancel.is_cancelled() {
            break;
        }

        let t = Instant::now();
        for shape in shapes {
            black_box(shape.volume());
        }
        volume_time += t.elapsed();

        let t = Instant::now();
        for shape in shapes {
            black_box(shape.surface_area());
        }
        area_time += t.elapsed();

        completed += 1;
        progress.record();
    }

    let status = if completed < config.iterations {
        tracing::warn!(
            "benchmark cancelled after {} of {} iteration(s)",
            completed,
            config.iterations
        );
        BenchStatus::Cancelled {
            completed_iterations: completed,
        }
    } else {
        BenchStatus::Complete
    };

    let per_shape = shapes
        .iter()
        .map(|shape| {
            let t = Instant::now();
            let measurement = Measurement::of(shape);
            ShapeTiming {
                measurement,
                nanos: t.elapsed().as_nanos() as u64,
            }
        })
        .collect();

    let operations = completed * shapes.len() as u64;
    BenchReport {
        status,
        shapes: shapes.len(),
        iterations_requested: config.iterations,
        iterations_completed: completed,
        volume: PhaseTiming::new(operations, volume_time),
        surface_area: PhaseTiming::new(operations, area_time),
        per_shape,
    }
}

/// Error joining a benchmark worker.
#[derive(Debug, thiserror::Error)]
#[error("benchmark worker panicked")]
pub struct BenchPanicked;

/// A benchmark running on a background thread.
pub struct BenchHandle {
    cancel: CancelToken,
    progress: BenchProgress,
    worker: JoinHandle<BenchReport>,
}

impl BenchHandle {
    /// Ask the worker to stop after its current iteration.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn progress(&self) -> &BenchProgress {
        &self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the worker and take its report.
    pub fn join(self) -> Result<BenchReport, BenchPanicked> {
        self.worker.join().map_err(|_| BenchPanicked)
    }
}

/// Start a benchmark of `snapshot` on a new thread.
pub fn spawn_benchmark(snapshot: Snapshot, config: BenchConfig) -> BenchHandle {
    let cancel = CancelToken::new();
    let progress = BenchProgress::new(config.iterations);

    let worker = {
        let cancel = cancel.clone();
        let progress = progress.clone();
        thread::spawn(move || run_benchmark(&snapshot, &config, &cancel, &progress))
    };

    BenchHandle {
        cancel,
        progress,
        worker,
    }
}
