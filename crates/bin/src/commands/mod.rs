//! Subcommand implementations.

use std::fs;

use varstore::Store;

use crate::{cli::SessionArgs, output::OutputFormat, script::Session};

pub mod eval;
pub mod run;

/// Builds the session for a script, seeding the store from `--init` if given.
fn open_session(
    args: &SessionArgs,
    format: OutputFormat,
) -> Result<Session, Box<dyn std::error::Error>> {
    let store = match &args.init {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let store = Store::from_json_str(&json)?;
            tracing::info!(path = %path.display(), variables = store.len(), "Loaded initial variables");
            store
        }
        None => Store::new(),
    };
    Ok(Session::new(store, format))
}

/// Prints the final store if requested and turns skipped lines into a failing exit.
fn finish(session: &Session, args: &SessionArgs, failures: usize) {
    if args.dump {
        println!("{}", session.store().to_json_string());
    }
    if failures > 0 {
        eprintln!("{failures} script line(s) skipped");
        std::process::exit(1);
    }
}
