//! The per-call log event and its severity.

use std::fmt;

use serde_json::Value;

use crate::{
    fields::{Fields, SensitiveData},
    interpolate::interpolate,
};

/// Severity of a log event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One log call on its way from the caller to the sink.
///
/// Created by [`crate::decorate`], transformed in place by
/// [`crate::process`], and consumed by the renderer. Events are never reused.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEvent {
    pub level: Level,
    pub logger_name: String,
    /// Message template, or the relocation marker once relocated.
    pub raw_message: String,
    pub positional_args: Vec<Value>,
    /// Plain structured fields. Sensitive ones are removed by redaction.
    pub fields: Fields,
    /// Sensitive data the caller supplied explicitly.
    pub explicit_sensitive: SensitiveData,
    /// Merged sensitive mapping; `None` until the pipeline has run.
    pub sensitive_data: Option<SensitiveData>,
    /// Set once the whole message has been moved into `sensitive_data`.
    pub relocated: bool,
}

impl LogEvent {
    pub fn new(level: Level, logger_name: impl Into<String>, raw_message: impl Into<String>) -> Self {
        Self {
            level,
            logger_name: logger_name.into(),
            raw_message: raw_message.into(),
            positional_args: Vec::new(),
            fields: Fields::new(),
            explicit_sensitive: SensitiveData::new(),
            sensitive_data: None,
            relocated: false,
        }
    }

    /// Interpolates the template with the positional arguments.
    pub fn message(&self) -> Result<String, crate::InterpolationError> {
        interpolate(&self.raw_message, &self.positional_args)
    }

    /// The message text as it appears in the rendered line.
    ///
    /// When interpolation fails, the template is shown with the failure reason
    /// and the arguments are left out.
    pub fn final_message(&self) -> String {
        self.message().unwrap_or_else(|err| {
            format!("{} [interpolation failed: {err}]", self.raw_message)
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Level, LogEvent};

    #[test]
    fn final_message_interpolates_arguments() {
        let mut event = LogEvent::new(Level::Info, "app", "hello {}");
        event.positional_args.push(json!("world"));
        assert_eq!(event.final_message(), "hello world");
    }

    #[test]
    fn final_message_hides_arguments_on_failure() {
        let mut event = LogEvent::new(Level::Info, "app", "pin={} {}");
        event.positional_args.push(json!("1234"));
        let message = event.final_message();
        assert!(message.starts_with("pin={} {} [interpolation failed:"));
        assert!(!message.contains("1234"));
    }

    #[test]
    fn levels_order_from_most_to_least_severe() {
        assert!(Level::Critical < Level::Error);
        assert!(Level::Debug < Level::Trace);
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }
}
