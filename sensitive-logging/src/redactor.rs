//! Removing configured sensitive fields from an event's plain fields.

use serde_json::Value;

use crate::{config::LoggerConfig, event::LogEvent};

/// Takes every configured sensitive field out of `event.fields`.
///
/// Returns the removed `(name, value)` pairs in configured order. Configured
/// names the event does not carry are skipped. A second call with the same
/// configuration finds nothing and returns an empty list.
pub fn redact_fields(event: &mut LogEvent, config: &LoggerConfig) -> Vec<(String, Value)> {
    config
        .sensitive_field_names()
        .iter()
        .filter_map(|name| {
            event
                .fields
                .remove(name)
                .map(|value| (name.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::redact_fields;
    use crate::{
        config::LoggerConfig,
        event::{Level, LogEvent},
    };

    fn event_with_fields() -> LogEvent {
        let mut event = LogEvent::new(Level::Info, "second_logger", "Client called!");
        event.fields.insert("first_name", "Marek");
        event.fields.insert("phone_number", "+48698800200");
        event.fields.insert("last_name", "Nowak");
        event
    }

    #[test]
    fn configured_fields_are_removed_in_configured_order() {
        let mut event = event_with_fields();
        let config = LoggerConfig::new(["last_name", "phone_number"], false);

        let removed = redact_fields(&mut event, &config);

        assert_eq!(
            removed,
            vec![
                ("last_name".to_owned(), json!("Nowak")),
                ("phone_number".to_owned(), json!("+48698800200")),
            ]
        );
        assert_eq!(event.fields.names().collect::<Vec<_>>(), vec!["first_name"]);
    }

    #[test]
    fn missing_configured_fields_are_skipped() {
        let mut event = event_with_fields();
        let config = LoggerConfig::new(["email", "phone_number"], false);

        let removed = redact_fields(&mut event, &config);

        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].0, "phone_number");
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let mut event = event_with_fields();
        let config = LoggerConfig::new(["phone_number"], false);

        redact_fields(&mut event, &config);
        let after_first = event.fields.clone();
        let removed = redact_fields(&mut event, &config);

        assert!(removed.is_empty());
        assert_eq!(event.fields, after_first);
    }

    #[test]
    fn default_config_leaves_fields_alone() {
        let mut event = event_with_fields();
        let before = event.fields.clone();

        assert!(redact_fields(&mut event, &LoggerConfig::default()).is_empty());
        assert_eq!(event.fields, before);
    }
}
