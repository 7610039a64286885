//! Text rendering of the merged mapping and of the final line.
//!
//! The mapping renders as `{'key': value, ...}` in merge order. Numbers,
//! booleans and `null` are bare, and arrays and nested objects use the same
//! style. An empty mapping renders as `{}` so its absence is visible in the
//! line.
//!
//! Keys and string values use single quotes, switching to double quotes when
//! the text has a `'` but no `"`. Control characters are always escaped, so a
//! value can never break the line.

use std::fmt;

use serde_json::Value;

use crate::{
    event::LogEvent,
    fields::{SensitiveData, SENSITIVE_DATA_KEY},
};

impl fmt::Display for SensitiveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, self.iter())
    }
}

/// Renders a line: `[sensitive_data=<mapping>] <message>`.
pub fn render_line(sensitive: &SensitiveData, message: &str) -> String {
    format!("[{SENSITIVE_DATA_KEY}={sensitive}] {message}")
}

/// Renders a processed event.
///
/// An event the pipeline has not processed renders with an empty mapping.
pub fn render_event(event: &LogEvent) -> String {
    let message = event.final_message();
    match &event.sensitive_data {
        Some(data) => render_line(data, &message),
        None => render_line(&SensitiveData::new(), &message),
    }
}

fn write_entries<'a, W, I>(out: &mut W, entries: I) -> fmt::Result
where
    W: fmt::Write,
    I: Iterator<Item = (&'a String, &'a Value)>,
{
    out.write_char('{')?;
    for (index, (key, value)) in entries.enumerate() {
        if index > 0 {
            out.write_str(", ")?;
        }
        write_quoted(out, key)?;
        out.write_str(": ")?;
        write_value(out, value)?;
    }
    out.write_char('}')
}

fn write_value<W: fmt::Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(flag) => write!(out, "{flag}"),
        Value::Number(number) => write!(out, "{number}"),
        Value::String(text) => write_quoted(out, text),
        Value::Array(items) => {
            out.write_char('[')?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, item)?;
            }
            out.write_char(']')
        }
        Value::Object(map) => write_entries(out, map.iter()),
    }
}

fn write_quoted<W: fmt::Write>(out: &mut W, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    out.write_char(quote)?;
    for ch in text.chars() {
        match ch {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            _ if ch == quote => write!(out, "\\{ch}")?,
            _ if ch.is_control() => write!(out, "\\x{:02x}", u32::from(ch))?,
            _ => out.write_char(ch)?,
        }
    }
    out.write_char(quote)
}
