//! `slog` values for a processed event.
//!
//! Both types avoid fallible paths of their own: field values are already
//! JSON, so serialization errors can only come from the serializer.

use ::slog::{Key, Record, Result as SlogResult, Serde, Serializer, Value as SlogValue, KV};
use serde_json::Value as JsonValue;

use crate::fields::{Fields, SensitiveData, SENSITIVE_DATA_KEY};

/// A `slog::Value` that emits a merged sensitive mapping as structured JSON.
///
/// The mapping is stored as a JSON object (in merge order) and emitted via
/// `slog`'s nested-value support, so drains that understand nested values
/// receive it as an object rather than a string.
#[derive(Clone, Debug)]
pub struct SensitiveDataValue {
    value: JsonValue,
}

impl SensitiveDataValue {
    pub fn new(data: &SensitiveData) -> Self {
        Self {
            value: data.to_json(),
        }
    }
}

impl SlogValue for SensitiveDataValue {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// The key-value pairs of one emitted record: every remaining plain field,
/// followed by `sensitive_data`.
pub struct EventKv<'a> {
    fields: &'a Fields,
    sensitive: &'a SensitiveData,
}

impl<'a> EventKv<'a> {
    pub fn new(fields: &'a Fields, sensitive: &'a SensitiveData) -> Self {
        Self { fields, sensitive }
    }
}

impl KV for EventKv<'_> {
    fn serialize(&self, record: &Record<'_>, serializer: &mut dyn Serializer) -> SlogResult {
        for (name, value) in self.fields.iter() {
            let nested = Serde(value.clone());
            SlogValue::serialize(&nested, record, Key::from(name.clone()), serializer)?;
        }
        SlogValue::serialize(
            &SensitiveDataValue::new(self.sensitive),
            record,
            Key::from(SENSITIVE_DATA_KEY),
            serializer,
        )
    }
}
