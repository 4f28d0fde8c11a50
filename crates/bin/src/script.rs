//! Line-oriented variable scripts.
//!
//! Each non-blank line is one command:
//!
//! ```text
//! # comment
//! set PATH VALUE      VALUE is JSON, or raw text if it is not valid JSON
//! get PATH [KIND]     KIND is any, number, text, boolean, sprite or image
//! change PATH DELTA
//! remove PATH
//! exists PATH
//! dump
//! ```
//!
//! `@pi` and `@null` may be used as a `set` value.

use thiserror::Error;
use varstore::{
    Store, Value,
    coerce::Kind,
    constants::{null_value, pi_value},
    value::ValueError,
};

use crate::output::{OutputFormat, format_value};

/// Errors for script lines that cannot be executed.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unexpected text after '{command}': {extra}")]
    UnexpectedArgument { command: &'static str, extra: String },

    #[error("'{value}' is not a number")]
    InvalidNumber { value: String },

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// A parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { path: String, value: Value },
    Get { path: String, kind: Kind },
    Change { path: String, delta: f64 },
    Remove { path: String },
    Exists { path: String },
    Dump,
}

/// Splits off the first whitespace-delimited word.
fn next_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim_start())),
        None => Some((s, "")),
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<(&'a str, &'a str), ScriptError> {
    next_word(rest).ok_or(ScriptError::MissingArgument { command, argument })
}

fn finished(rest: &str, command: &'static str) -> Result<(), ScriptError> {
    if rest.trim().is_empty() {
        Ok(())
    } else {
        Err(ScriptError::UnexpectedArgument {
            command,
            extra: rest.trim().to_string(),
        })
    }
}

/// Parses a `set` value: a constant name, JSON, or raw text.
pub fn parse_value(raw: &str) -> Value {
    match raw {
        "@pi" => pi_value(),
        "@null" => null_value(),
        _ => serde_json::from_str::<serde_json::Value>(raw)
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(raw)),
    }
}

/// Parses one script line. Blank lines and comments parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.starts_with('#') {
        return Ok(None);
    }
    let Some((command, rest)) = next_word(line) else {
        return Ok(None);
    };

    let parsed = match command {
        "set" => {
            let (path, value) = required(rest, "set", "path")?;
            if value.is_empty() {
                return Err(ScriptError::MissingArgument {
                    command: "set",
                    argument: "value",
                });
            }
            Command::Set {
                path: path.to_string(),
                value: parse_value(value),
            }
        }
        "get" => {
            let (path, rest) = required(rest, "get", "path")?;
            let kind = match next_word(rest) {
                Some((kind, rest)) => {
                    finished(rest, "get")?;
                    kind.parse::<Kind>()?
                }
                None => Kind::Any,
            };
            Command::Get {
                path: path.to_string(),
                kind,
            }
        }
        "change" => {
            let (path, rest) = required(rest, "change", "path")?;
            let (delta, rest) = required(rest, "change", "delta")?;
            finished(rest, "change")?;
            let delta = delta
                .parse::<f64>()
                .map_err(|_| ScriptError::InvalidNumber {
                    value: delta.to_string(),
                })?;
            Command::Change {
                path: path.to_string(),
                delta,
            }
        }
        "remove" => {
            let (path, rest) = required(rest, "remove", "path")?;
            finished(rest, "remove")?;
            Command::Remove {
                path: path.to_string(),
            }
        }
        "exists" => {
            let (path, rest) = required(rest, "exists", "path")?;
            finished(rest, "exists")?;
            Command::Exists {
                path: path.to_string(),
            }
        }
        "dump" => {
            finished(rest, "dump")?;
            Command::Dump
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                command: other.to_string(),
            });
        }
    };
    Ok(Some(parsed))
}

/// A store plus the settings used to print results.
#[derive(Debug, Default)]
pub struct Session {
    store: Store,
    format: OutputFormat,
}

impl Session {
    pub fn new(store: Store, format: OutputFormat) -> Self {
        Self { store, format }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Executes a command, returning the line to print, if any.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Set { path, value } => {
                self.store.set(path, value);
                None
            }
            Command::Get { path, kind } => {
                let value = self.store.get_as(&path, kind);
                Some(format_value(value.as_ref(), self.format))
            }
            Command::Change { path, delta } => {
                self.store.change(path, delta);
                None
            }
            Command::Remove { path } => {
                self.store.remove(path);
                None
            }
            Command::Exists { path } => Some(self.store.exists(&path).to_string()),
            Command::Dump => Some(self.store.to_json_string()),
        }
    }

    /// Parses and executes `lines`, passing output to `emit`.
    ///
    /// A line that fails to parse is reported on stderr and skipped; the rest
    /// of the script still runs. Returns the number of skipped lines.
    pub fn run_lines<I, S>(&mut self, lines: I, mut emit: impl FnMut(String)) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut failures = 0;
        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            match parse_line(line.as_ref()) {
                Ok(Some(command)) => {
                    tracing::debug!(line = line_number, ?command, "Executing");
                    if let Some(output) = self.execute(command) {
                        emit(output);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(line = line_number, error = %e, "Skipping script line");
                    eprintln!("line {line_number}: {e}");
                    failures += 1;
                }
            }
        }
        failures
    }
}
