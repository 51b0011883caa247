//! `shape3d analyze` command
//!
//! Compares the configured shapes: extremes, V/SA efficiency, averages and
//! the per-kind distribution.

use anyhow::Result;

use crate::commands::{Context, Reported};
use shape3d::ops::{Analysis, Extreme};
use shape3d::util::diagnostic::suggestions;
use shape3d::util::{Diagnostic, Status};
use shape3d::ShapeResolver;

pub fn execute(ctx: &Context) -> Result<()> {
    let shapes = ctx.shapes(&ShapeResolver::new())?.snapshot();

    ctx.shell
        .status(Status::Analyzing, format!("{} shape(s)", shapes.len()));

    let analysis = Analysis::of(&shapes).ok_or_else(|| {
        Reported(Diagnostic::error("no shapes to analyze").with_suggestion(suggestions::NO_SHAPES))
    })?;

    if ctx.shell.is_json() {
        return ctx.shell.json(&analysis);
    }

    let out = &ctx.shell;
    out.println("Extremes:");
    out.println(extreme("Largest Volume", &analysis.largest_volume, "cubic units"));
    out.println(extreme(
        "Largest Surface Area",
        &analysis.largest_surface_area,
        "square units",
    ));
    out.println(extreme("Smallest Volume", &analysis.smallest_volume, "cubic units"));
    out.println(extreme(
        "Smallest Surface Area",
        &analysis.smallest_surface_area,
        "square units",
    ));
    out.println("");

    out.println("Efficiency:");
    out.println(format!(
        "  Most Efficient (V/SA): {} ({:.4})",
        analysis.most_efficient.name, analysis.most_efficient.value
    ));
    out.println(format!(
        "  Least Efficient (V/SA): {} ({:.4})",
        analysis.least_efficient.name, analysis.least_efficient.value
    ));
    out.println("");

    out.println("Statistics:");
    out.println(format!("  Total Shapes: {}", analysis.count));
    out.println(format!(
        "  Average Volume: {:.2} cubic units",
        analysis.average_volume
    ));
    out.println(format!(
        "  Average Surface Area: {:.2} square units",
        analysis.average_surface_area
    ));
    out.println(format!(
        "  Combined Volume: {:.2} cubic units",
        analysis.total_volume
    ));
    out.println(format!(
        "  Combined Surface Area: {:.2} square units",
        analysis.total_surface_area
    ));
    out.println("");

    out.println("Distribution:");
    for (kind, share) in &analysis.distribution {
        out.println(format!(
            "  {}: {} ({:.1}%)",
            kind.type_name(),
            share.count,
            share.percent
        ));
    }

    Ok(())
}

fn extreme(label: &str, e: &Extreme, unit: &str) -> String {
    format!("  {}: {} ({:.2} {})", label, e.name, e.value, unit)
}
