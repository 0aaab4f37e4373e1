use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;
mod engine;
mod ops;
mod paths;
mod resource;
mod validate;

use commands::locals;

#[derive(Parser)]
#[command(name = "nuget")]
#[command(about = "Manage NuGet local resources (http-cache, global-packages, temp)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or clear local NuGet resource directories
    Locals(locals::LocalsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Locals(args) => locals::run(args),
    }
}
