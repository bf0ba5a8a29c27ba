//! # mgen CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Declarative code-generation front end.
///
/// Compiles YAML type and model declarations into the registries a code
/// generator consumes.
#[derive(Parser, Debug)]
#[command(name = "mgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Compile declarations and print the registries as JSON.
    Compile(mgen_cli::compile::CompileArgs),
    /// Validate declarations without emitting registries.
    Check(mgen_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile(args) => mgen_cli::compile::run(&args),
        Commands::Check(args) => mgen_cli::check::run(&args),
    }
}
