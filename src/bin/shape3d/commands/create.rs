//! `shape3d create` command

use anyhow::Result;

use crate::cli::CreateArgs;
use crate::commands::{print_shape, Context, Reported, ShapeReport};
use shape3d::util::Status;
use shape3d::ShapeResolver;

pub fn execute(ctx: &Context, args: CreateArgs) -> Result<()> {
    let config = ctx.config()?;
    let color = args.color.as_deref().or(config.defaults.color.as_deref());

    let shape = ShapeResolver::new()
        .construct_named(&args.kind, &args.name, color, &args.dimensions)
        .map_err(|e| Reported(e.to_diagnostic()))?;

    if ctx.shell.is_json() {
        return ctx.shell.json(&ShapeReport::of(&shape));
    }

    ctx.shell
        .status(Status::Created, format!("{} `{}`", shape.kind(), shape.name()));
    if shape.is_degenerate() {
        ctx.shell.warn(format!(
            "`{}` is degenerate: {} is 0",
            shape.name(),
            shape.degenerate_fields().join(", ")
        ));
    }
    print_shape(&ctx.shell, None, &shape);

    Ok(())
}
