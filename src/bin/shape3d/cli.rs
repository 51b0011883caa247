//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// shape3d - surface area and volume of simple 3D solids
#[derive(Parser)]
#[command(name = "shape3d")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of ~/.shape3d/config.toml and ./shape3d.toml
    #[arg(long, global = true, value_name = "PATH", env = "SHAPE3D_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Construct one shape and print its measurements
    Create(CreateArgs),

    /// List the configured shape set
    List,

    /// Compare the configured shapes
    Analyze,

    /// Time repeated surface area and volume calculations
    Bench(BenchArgs),

    /// List shape variants and their construction paths
    Kinds,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    /// Shape variant (sphere, cube, cylinder, rectangular-prism, cone)
    pub kind: String,

    /// Dimensions in declaration order, e.g. `radius height` for a cone
    #[arg(allow_negative_numbers = true)]
    pub dimensions: Vec<f64>,

    /// Shape name
    #[arg(short, long)]
    pub name: String,

    /// Shape color
    #[arg(short, long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct BenchArgs {
    /// Passes over the shape set (defaults to `[bench] iterations`)
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Cancel the run after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub time_limit_ms: Option<u64>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
