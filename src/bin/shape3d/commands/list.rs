//! `shape3d list` command

use anyhow::Result;

use crate::commands::{print_shape, Context, ShapeReport};
use shape3d::ShapeResolver;

pub fn execute(ctx: &Context) -> Result<()> {
    let shapes = ctx.shapes(&ShapeResolver::new())?.snapshot();

    if ctx.shell.is_json() {
        let reports: Vec<_> = shapes.iter().map(|s| ShapeReport::of(s)).collect();
        return ctx.shell.json(&reports);
    }

    if shapes.is_empty() {
        ctx.shell.note("no shapes configured");
        return Ok(());
    }

    for (i, shape) in shapes.iter().enumerate() {
        if i > 0 {
            ctx.shell.println("");
        }
        print_shape(&ctx.shell, Some(i + 1), shape);
    }

    Ok(())
}
