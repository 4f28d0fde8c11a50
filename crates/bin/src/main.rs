use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod script;

use cli::{Cli, Commands, RunArgs};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("varstore=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format: OutputFormat = cli.format.into();

    match cli.command {
        Some(Commands::Run(args)) => commands::run::run(&args, format),
        Some(Commands::Eval(args)) => commands::eval::run(&args, format),
        // Default to running standard input
        None => commands::run::run(&RunArgs::default(), format),
    }
}
