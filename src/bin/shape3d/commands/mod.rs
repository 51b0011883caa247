//! Command implementations

pub mod analyze;
pub mod bench;
pub mod completions;
pub mod create;
pub mod kinds;
pub mod list;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use serde::Serialize;

use shape3d::core::{AnyShape, Measure, ShapeSummary};
use shape3d::ops::ShapeCollection;
use shape3d::util::config::{global_config_path, load_config, project_config_path};
use shape3d::util::diagnostic::suggestions;
use shape3d::util::{Diagnostic, Shape3dConfig, Shell};
use shape3d::ShapeResolver;

/// An error that has already been turned into a diagnostic.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Reported(pub Diagnostic);

/// State shared by every command.
pub struct Context {
    config_path: Option<PathBuf>,
    pub shell: Shell,
}

impl Context {
    pub fn new(
        config_path: Option<PathBuf>,
        quiet: bool,
        verbose: bool,
        no_color: bool,
        json: bool,
    ) -> Self {
        Context {
            config_path,
            shell: Shell::from_flags(quiet, verbose, no_color, json),
        }
    }

    /// Load configuration.
    ///
    /// An explicit `--config` file must exist and parse. Otherwise the global
    /// and project files are merged, falling back to defaults.
    pub fn config(&self) -> Result<Shape3dConfig> {
        if let Some(path) = &self.config_path {
            return Shape3dConfig::load(path);
        }

        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let global = global_config_path();
        Ok(load_config(global.as_deref(), &project_config_path(&cwd)))
    }

    /// Build the configured shape set.
    pub fn shapes(&self, resolver: &ShapeResolver) -> Result<ShapeCollection> {
        self.shapes_from(&self.config()?, resolver)
    }

    pub fn shapes_from(
        &self,
        config: &Shape3dConfig,
        resolver: &ShapeResolver,
    ) -> Result<ShapeCollection> {
        ShapeCollection::from_config(config, resolver).map_err(|e| {
            let mut diag = e
                .to_diagnostic()
                .with_context("while loading the configured shape set")
                .with_suggestion(suggestions::BAD_CONFIG);
            if let Some(path) = &self.config_path {
                diag = diag.with_location(path);
            }
            Reported(diag).into()
        })
    }
}

/// JSON form of one shape.
#[derive(Serialize)]
pub struct ShapeReport {
    #[serde(flatten)]
    pub summary: ShapeSummary,
    pub efficiency: f64,
}

impl ShapeReport {
    pub fn of(shape: &AnyShape) -> Self {
        ShapeReport {
            summary: shape.summary(),
            efficiency: shape.efficiency(),
        }
    }
}

/// Print a shape with its measurements, optionally numbered.
pub fn print_shape(shell: &Shell, index: Option<usize>, shape: &AnyShape) {
    match index {
        Some(i) => shell.println(format!("{}. {}", i, shape)),
        None => shell.println(shape),
    }
    shell.println(format!(
        "   - Surface Area: {:.2} square units",
        shape.surface_area()
    ));
    shell.println(format!("   - Volume: {:.2} cubic units", shape.volume()));
    shell.println(format!(
        "   - Efficiency Ratio (V/SA): {:.4}",
        shape.efficiency()
    ));
}
