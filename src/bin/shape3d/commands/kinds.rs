//! `shape3d kinds` command
//!
//! Lists registered shape variants with their construction paths in
//! declaration order.

use anyhow::Result;
use serde::Serialize;

use crate::commands::Context;
use shape3d::resolver::{Arity, PathStyle, ShapeRegistry};
use shape3d::ShapeKind;

#[derive(Serialize)]
struct KindInfo {
    kind: ShapeKind,
    type_name: &'static str,
    paths: Vec<PathInfo>,
}

#[derive(Serialize)]
struct PathInfo {
    signature: String,
    style: PathStyle,
    arity: Arity,
}

pub fn execute(ctx: &Context) -> Result<()> {
    let registry = ShapeRegistry::new();

    let kinds: Vec<KindInfo> = registry
        .kinds()
        .map(|kind| KindInfo {
            kind,
            type_name: kind.type_name(),
            paths: registry
                .paths(kind)
                .unwrap_or_default()
                .iter()
                .map(|p| PathInfo {
                    signature: p.signature(),
                    style: p.style,
                    arity: p.arity,
                })
                .collect(),
        })
        .collect();

    if ctx.shell.is_json() {
        return ctx.shell.json(&kinds);
    }

    for info in &kinds {
        ctx.shell.println(format!("{} ({})", info.kind, info.type_name));
        for path in &info.paths {
            ctx.shell.println(format!("    {}", path.signature));
        }
    }

    Ok(())
}
