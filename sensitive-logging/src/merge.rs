//! Combining the three sources of sensitive values into one mapping.

use serde_json::Value;

use crate::fields::{SensitiveData, MESSAGE_KEY};

/// Merges sensitive values in priority order.
///
/// The result holds, in order: the entries of `explicit`, then the
/// `extracted` field values, then `message` if `whole_message` is given. A key
/// seen again keeps its first position and takes the later value.
///
/// Inputs are not modified.
pub fn merge<I>(explicit: &SensitiveData, extracted: I, whole_message: Option<String>) -> SensitiveData
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut merged = explicit.clone();
    merged.extend(extracted);
    if let Some(text) = whole_message {
        merged.insert(MESSAGE_KEY, Value::String(text));
    }
    merged
}
