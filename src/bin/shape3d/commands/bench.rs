//! `shape3d bench` command
//!
//! Times repeated volume and surface area calls over the configured shape
//! set on a background thread. A time limit cancels the run; the partial
//! timings are still reported.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::cli::BenchArgs;
use crate::commands::{Context, Reported};
use shape3d::ops::{spawn_benchmark, BenchConfig, BenchStatus, PhaseTiming};
use shape3d::util::diagnostic::suggestions;
use shape3d::util::{Diagnostic, Status};
use shape3d::ShapeResolver;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn execute(ctx: &Context, args: BenchArgs) -> Result<()> {
    let config = ctx.config()?;
    let snapshot = ctx
        .shapes_from(&config, &ShapeResolver::new())?
        .snapshot();

    if snapshot.is_empty() {
        return Err(Reported(
            Diagnostic::error("no shapes to benchmark").with_suggestion(suggestions::NO_SHAPES),
        )
        .into());
    }

    let bench = BenchConfig {
        iterations: args.iterations.unwrap_or_else(|| config.bench.iterations()),
        time_limit: args
            .time_limit_ms
            .or(config.bench.time_limit_ms)
            .map(Duration::from_millis),
    };

    ctx.shell.status(
        Status::Measuring,
        format!(
            "{} shape(s) x {} iteration(s)",
            snapshot.len(),
            bench.iterations
        ),
    );

    let handle = spawn_benchmark(snapshot, bench);
    let progress = ctx
        .shell
        .progress(handle.progress().total(), "Measuring");

    while !handle.is_finished() {
        progress.set_position(handle.progress().completed());
        thread::sleep(POLL_INTERVAL);
    }
    progress.finish();

    let report = handle.join()?;

    if let BenchStatus::Cancelled {
        completed_iterations,
    } = report.status
    {
        ctx.shell.status(
            Status::Cancelled,
            format!(
                "stopped after {} of {} iteration(s); results are partial",
                completed_iterations, report.iterations_requested
            ),
        );
    }

    if ctx.shell.is_json() {
        return ctx.shell.json(&report);
    }

    let out = &ctx.shell;
    let marker = if report.status.is_complete() {
        ""
    } else {
        " (incomplete)"
    };
    out.println(format!(
        "Performance results ({} iterations){}:",
        report.iterations_completed, marker
    ));
    out.println("");
    print_phase(ctx, "Volume Calculations", &report.volume);
    print_phase(ctx, "Surface Area Calculations", &report.surface_area);

    out.println("Per-shape breakdown:");
    for timing in &report.per_shape {
        let m = &timing.measurement;
        out.println(format!("  {} ({})", m.name, m.kind.type_name()));
        out.println(format!("   - Volume: {:.2} cubic units", m.volume));
        out.println(format!("   - Surface Area: {:.2} square units", m.surface_area));
        out.println(format!("   - Computation Time: {} nanoseconds", timing.nanos));
    }

    ctx.shell.status(Status::Finished, "benchmark");
    Ok(())
}

fn print_phase(ctx: &Context, title: &str, phase: &PhaseTiming) {
    let out = &ctx.shell;
    out.println(format!("{}:", title));
    out.println(format!("  Total Time: {:.2} ms", phase.total_ms));
    out.println(format!("  Average per Operation: {:.2} ns", phase.avg_ns));
    out.println(format!("  Operations per Second: {:.0}", phase.ops_per_sec));
    out.println("");
}
