//! Output formatting helpers for human-readable and JSON output.

use varstore::Value;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Text printed for a read that found nothing.
pub const UNDEFINED: &str = "undefined";

/// Formats the result of a read.
pub fn format_value(value: Option<&Value>, format: OutputFormat) -> String {
    match (value, format) {
        (None, _) => UNDEFINED.to_string(),
        (Some(value), OutputFormat::Human) => value.to_string(),
        (Some(value), OutputFormat::Json) => value.to_json_string(),
    }
}
