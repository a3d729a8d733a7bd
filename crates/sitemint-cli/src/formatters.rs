//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across commands for JSON, text, and
//! pretty output modes. Command results are plain `Serialize` structs;
//! the formatter decides presentation.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use sitemint_core::cli::OutputFormat;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
/// use sitemint_cli::formatters::format_output;
/// use sitemint_core::cli::OutputFormat;
///
/// #[derive(Serialize)]
/// struct Summary {
///     pages_created: usize,
/// }
///
/// let output = format_output(&Summary { pages_created: 2 }, OutputFormat::Json)?;
/// assert!(output.contains("\"pages_created\": 2"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(serde_json::to_string(data)?),
        OutputFormat::Pretty => pretty_format(data),
    }
}

/// Format data as colorized, human-readable `key: value` lines.
fn pretty_format<T: Serialize>(data: &T) -> Result<String> {
    let value = serde_json::to_value(data)?;
    let mut out = String::new();
    render_value(&value, 0, &mut out);
    Ok(out.trim_end().to_string())
}

fn render_value(value: &serde_json::Value, indent: usize, out: &mut String) {
    use serde_json::Value;

    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                match v {
                    Value::Object(_) | Value::Array(_) if !is_empty(v) => {
                        out.push_str(&format!("{pad}{}:\n", key.bold()));
                        render_value(v, indent + 1, out);
                    }
                    _ => {
                        out.push_str(&format!("{pad}{}: {}\n", key.bold(), render_scalar(v)));
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        out.push_str(&format!("{pad}-\n"));
                        render_value(item, indent + 1, out);
                    }
                    _ => out.push_str(&format!("{pad}- {}\n", render_scalar(item))),
                }
            }
        }
        _ => out.push_str(&format!("{pad}{}\n", render_scalar(value))),
    }
}

fn render_scalar(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => "none".dimmed().to_string(),
        Value::Bool(b) => b.to_string().yellow().to_string(),
        Value::Number(n) => n.to_string().cyan().to_string(),
        Value::String(s) => s.green().to_string(),
        Value::Array(_) | Value::Object(_) => "[]".to_string(),
    }
}

fn is_empty(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Array(a) => a.is_empty(),
        serde_json::Value::Object(o) => o.is_empty(),
        _ => false,
    }
}
