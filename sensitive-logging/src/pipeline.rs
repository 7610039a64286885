//! The per-event transformation: redact, relocate, merge.

use crate::{
    config::LoggerConfig, event::LogEvent, merge::merge, redactor::redact_fields,
    relocator::relocate_message,
};

/// Runs the sensitive-data pipeline on a decorated event.
///
/// Afterwards `event.sensitive_data` is always `Some`. Running it again with
/// the same configuration leaves the event unchanged.
pub fn process(event: &mut LogEvent, config: &LoggerConfig) {
    let extracted = redact_fields(event, config);
    let whole_message = relocate_message(event, config);
    let base = event
        .sensitive_data
        .take()
        .unwrap_or_else(|| event.explicit_sensitive.clone());
    event.sensitive_data = Some(merge(&base, extracted, whole_message));
}
