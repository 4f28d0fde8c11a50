//! CLI argument definitions for the varstore binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// How values are printed
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Plain text: strings unquoted, containers as JSON
    Human,
    /// Every value as JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Runtime variables script host
#[derive(Parser, Debug)]
#[command(name = "varstore")]
#[command(about = "Run variable scripts against a dotted-path variable store")]
#[command(version)]
pub struct Cli {
    /// Output format for printed values
    #[arg(short, long, global = true, default_value = "human", env = "VARSTORE_FORMAT")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a script file, or standard input when no file is given
    Run(RunArgs),
    /// Run script lines given on the command line
    Eval(EvalArgs),
}

/// Arguments for the run command
#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Script file to execute
    #[arg(short, long, env = "VARSTORE_SCRIPT")]
    pub script: Option<PathBuf>,

    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for the eval command
#[derive(clap::Args, Debug)]
pub struct EvalArgs {
    /// Script lines, one command each
    #[arg(required = true)]
    pub lines: Vec<String>,

    #[command(flatten)]
    pub session: SessionArgs,
}

/// Options shared by every way of running a script
#[derive(clap::Args, Debug, Default)]
pub struct SessionArgs {
    /// JSON object to load into the store before the script runs
    #[arg(short, long, env = "VARSTORE_INIT")]
    pub init: Option<PathBuf>,

    /// Print the whole store as JSON after the script finishes
    #[arg(short, long)]
    pub dump: bool,
}
