//! Eval command - executes script lines passed as arguments.

use crate::{cli::EvalArgs, output::OutputFormat};

/// Run the eval command
pub fn run(args: &EvalArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = super::open_session(&args.session, format)?;
    let failures = session.run_lines(&args.lines, |line| println!("{line}"));
    super::finish(&session, &args.session, failures);
    Ok(())
}
