//! High-level operations.
//!
//! This module contains the work behind the `shape3d` commands: holding a
//! shape set, measuring it, and comparing its members.

pub mod analysis;
pub mod collection;
pub mod measure;

pub use analysis::{Analysis, Extreme, KindShare};
pub use collection::{ShapeCollection, Snapshot};
pub use measure::{
    measure_all, run_benchmark, spawn_benchmark, BenchConfig, BenchHandle, BenchPanicked,
    BenchProgress, BenchReport, BenchStatus, CancelToken, Measurement, PhaseTiming, ShapeTiming,
};
