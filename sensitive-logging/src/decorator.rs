//! Turning a log call into an event.

use serde_json::Value;

use crate::{
    event::{Level, LogEvent},
    fields::SENSITIVE_DATA_KEY,
    record::Record,
};

/// Builds the event for one log call.
///
/// Runs for every call regardless of logger configuration. Explicit sensitive
/// data never reaches the plain fields: an extra named `sensitive_data` is
/// taken out of the fields and added to the explicit mapping (its entries if
/// it is an object, otherwise the value itself under `sensitive_data`).
pub fn decorate(level: Level, logger_name: &str, record: Record) -> LogEvent {
    let Record {
        template,
        args,
        mut extra,
        sensitive: mut explicit,
    } = record;

    match extra.remove(SENSITIVE_DATA_KEY) {
        Some(Value::Object(entries)) => explicit.extend(entries),
        Some(other) => {
            explicit.insert(SENSITIVE_DATA_KEY, other);
        }
        None => {}
    }

    LogEvent {
        level,
        logger_name: logger_name.to_owned(),
        raw_message: template,
        positional_args: args,
        fields: extra,
        explicit_sensitive: explicit,
        sensitive_data: None,
        relocated: false,
    }
}
