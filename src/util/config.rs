//! Configuration file support for shape3d.
//!
//! shape3d reads two configuration file locations:
//! - Global: `~/.shape3d/config.toml` - User-wide defaults
//! - Project: `./shape3d.toml` - Overrides for the current directory
//!
//! Project config takes precedence over global config. An explicit
//! `--config <path>` replaces both and must parse.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ShapeKind;

/// Name of the per-directory config file.
pub const PROJECT_CONFIG_NAME: &str = "shape3d.toml";

/// Default number of passes over the shape set in a benchmark.
pub const DEFAULT_BENCH_ITERATIONS: u64 = 100_000;

/// shape3d configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shape3dConfig {
    /// Defaults applied to shapes that leave a field out
    pub defaults: DefaultsConfig,

    /// Benchmark settings
    pub bench: BenchSettings,

    /// Starting shape set; empty means the built-in demo set
    pub shapes: Vec<ShapeEntry>,
}

/// Defaults for shape entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Color for entries without one
    pub color: Option<String>,
}

/// Benchmark configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchSettings {
    /// Passes over the shape set (None = DEFAULT_BENCH_ITERATIONS)
    pub iterations: Option<u64>,

    /// Cancel the run after this many milliseconds
    pub time_limit_ms: Option<u64>,
}

impl BenchSettings {
    pub fn iterations(&self) -> u64 {
        self.iterations.unwrap_or(DEFAULT_BENCH_ITERATIONS)
    }
}

/// One `[[shapes]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub kind: ShapeKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub dimensions: Vec<f64>,
}

impl ShapeEntry {
    pub fn new(kind: ShapeKind, name: impl Into<String>, dimensions: Vec<f64>) -> Self {
        ShapeEntry {
            kind,
            name: name.into(),
            color: None,
            dimensions,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// The demonstration set used when no shapes are configured.
pub fn demo_shapes() -> Vec<ShapeEntry> {
    vec![
        ShapeEntry::new(ShapeKind::Sphere, "Red Ball", vec![5.0]).with_color("Red"),
        ShapeEntry::new(ShapeKind::Cube, "Blue Box", vec![4.0]).with_color("Blue"),
        ShapeEntry::new(ShapeKind::Cylinder, "Silver Can", vec![2.0, 5.0]).with_color("Silver"),
        ShapeEntry::new(ShapeKind::RectangularPrism, "Brown Package", vec![6.0, 4.0, 3.0])
            .with_color("Brown"),
    ]
}

impl Shape3dConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Shape3dConfig) {
        if other.defaults.color.is_some() {
            self.defaults.color = other.defaults.color;
        }
        if other.bench.iterations.is_some() {
            self.bench.iterations = other.bench.iterations;
        }
        if other.bench.time_limit_ms.is_some() {
            self.bench.time_limit_ms = other.bench.time_limit_ms;
        }
        // shape sets replace, they do not accumulate
        if !other.shapes.is_empty() {
            self.shapes = other.shapes;
        }
    }

    /// Configured shapes, or the demo set when none are configured.
    pub fn shape_entries(&self) -> Vec<ShapeEntry> {
        if self.shapes.is_empty() {
            demo_shapes()
        } else {
            self.shapes.clone()
        }
    }

    /// Color for an entry, falling back to `[defaults] color`.
    pub fn color_for<'a>(&'a self, entry: &'a ShapeEntry) -> Option<&'a str> {
        entry
            .color
            .as_deref()
            .or(self.defaults.color.as_deref())
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (./shape3d.toml)
/// 2. Global config (~/.shape3d/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Shape3dConfig {
    let mut config = Shape3dConfig::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            config.merge(Shape3dConfig::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        config.merge(Shape3dConfig::load_or_default(project_path));
    }

    config
}

/// Get the global shape3d config directory (~/.shape3d).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".shape3d"))
}

/// Get the global config path (~/.shape3d/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (./shape3d.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_NAME)
}
