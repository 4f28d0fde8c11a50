//! Run command - executes a script file or standard input.

use std::{
    fs,
    io::{self, BufRead},
};

use crate::{cli::RunArgs, output::OutputFormat};

/// Run the run command
pub fn run(args: &RunArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(&args.session, format)?;

    let failures = match &args.script {
        Some(path) => {
            let script = fs::read_to_string(path)?;
            tracing::info!(path = %path.display(), "Running script");
            session.run_lines(script.lines(), |line| println!("{line}"))
        }
        None => {
            let lines = io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?;
            session.run_lines(lines, |line| println!("{line}"))
        }
    };

    super::finish(&session, &args.session, failures);
    Ok(())
}
