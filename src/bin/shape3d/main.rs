//! shape3d CLI - surface area and volume of simple 3D solids

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, OutputFormat};
use commands::{Context, Reported};

fn main() {
    if let Err(e) = run() {
        match e.downcast_ref::<Reported>() {
            Some(Reported(diag)) => {
                eprint!("{}", diag.format(std::io::stderr().is_terminal()));
            }
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("shape3d=debug")
    } else if cli.quiet {
        EnvFilter::new("shape3d=error")
    } else {
        EnvFilter::new("shape3d=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let ctx = Context::new(
        cli.config,
        cli.quiet,
        cli.verbose,
        cli.no_color,
        cli.format == OutputFormat::Json,
    );

    // Execute command
    match cli.command {
        Commands::Create(args) => commands::create::execute(&ctx, args),
        Commands::List => commands::list::execute(&ctx),
        Commands::Analyze => commands::analyze::execute(&ctx),
        Commands::Bench(args) => commands::bench::execute(&ctx, args),
        Commands::Kinds => commands::kinds::execute(&ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
