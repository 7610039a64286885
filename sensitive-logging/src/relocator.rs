//! Moving a whole message out of the rendered line.

use crate::{config::LoggerConfig, event::LogEvent};

/// Text left in place of a relocated message.
pub const RELOCATED_MESSAGE_MARKER: &str = "[Message moved to sensitive_data]";

/// Relocates the event's message when the logger treats it as sensitive.
///
/// Returns the interpolated text for the merged mapping, after replacing the
/// template with [`RELOCATED_MESSAGE_MARKER`] and clearing the positional
/// arguments. Returns `None` when the message is not sensitive, when it was
/// already relocated, or when it cannot be interpolated; a failed
/// interpolation is rendered by [`LogEvent::final_message`], which never
/// shows the arguments. The template itself is not relocated in that case and
/// stays in the plain line.
pub fn relocate_message(event: &mut LogEvent, config: &LoggerConfig) -> Option<String> {
    if !config.sensitive_whole_message() || event.relocated {
        return None;
    }
    let text = event.message().ok()?;
    event.raw_message = RELOCATED_MESSAGE_MARKER.to_owned();
    event.positional_args.clear();
    event.relocated = true;
    Some(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{relocate_message, RELOCATED_MESSAGE_MARKER};
    use crate::{
        config::LoggerConfig,
        event::{Level, LogEvent},
    };

    fn client_event() -> LogEvent {
        let mut event = LogEvent::new(Level::Info, "third_logger", "Client called (first_name={})!");
        event.positional_args.push(json!("Marek"));
        event
    }

    #[test]
    fn sensitive_message_is_replaced_by_marker() {
        let mut event = client_event();
        let config = LoggerConfig::new(Vec::<String>::new(), true);

        let text = relocate_message(&mut event, &config);

        assert_eq!(text.as_deref(), Some("Client called (first_name=Marek)!"));
        assert_eq!(event.final_message(), RELOCATED_MESSAGE_MARKER);
        assert!(event.positional_args.is_empty());
        assert!(event.relocated);
    }

    #[test]
    fn plain_message_is_left_alone() {
        let mut event = client_event();
        let before = event.clone();

        assert!(relocate_message(&mut event, &LoggerConfig::default()).is_none());
        assert_eq!(event, before);
    }

    #[test]
    fn relocation_happens_once() {
        let mut event = client_event();
        let config = LoggerConfig::new(Vec::<String>::new(), true);

        assert!(relocate_message(&mut event, &config).is_some());
        assert!(relocate_message(&mut event, &config).is_none());
        assert_eq!(event.raw_message, RELOCATED_MESSAGE_MARKER);
    }

    #[test]
    fn failed_interpolation_is_not_relocated() {
        let mut event = LogEvent::new(Level::Info, "third_logger", "{} and {}");
        event.positional_args.push(json!("secret"));
        let config = LoggerConfig::new(Vec::<String>::new(), true);

        assert!(relocate_message(&mut event, &config).is_none());
        assert!(!event.relocated);
        assert_eq!(event.raw_message, "{} and {}");
        assert!(event.final_message().starts_with("{} and {}"));
        assert!(!event.final_message().contains("secret"));
    }
}
