//! The arguments of a single log call.

use serde::Serialize;
use serde_json::Value;

use crate::fields::{to_field_value, Fields, SensitiveData};

/// Types that contribute plain fields and sensitive data to a log call.
///
/// Usually derived with `#[derive(LogFields)]`; fields marked `#[sensitive]`
/// go to `sensitive`, the rest to `fields`.
pub trait LogFields {
    /// Appends this value's entries, in declaration order.
    fn log_fields(&self, fields: &mut Fields, sensitive: &mut SensitiveData);
}

/// A log call before it becomes an event: template, positional arguments,
/// extra fields, and explicitly sensitive data.
///
/// ```
/// use sensitive_logging::Record;
///
/// let record = Record::new("Client called (first_name={})!")
///     .arg("Marek")
///     .extra("phone_number", "+48698800200")
///     .sensitive("secret_key", "21key3secret7");
/// # let _ = record;
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub(crate) template: String,
    pub(crate) args: Vec<Value>,
    pub(crate) extra: Fields,
    pub(crate) sensitive: SensitiveData,
}

impl Record {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    /// Appends one positional argument.
    #[must_use]
    pub fn arg<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.args.push(to_field_value(value));
        self
    }

    /// Appends positional arguments that are already JSON values.
    #[must_use]
    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.args.extend(values);
        self
    }

    /// Adds one extra field.
    #[must_use]
    pub fn extra<T: Serialize + ?Sized>(mut self, name: impl Into<String>, value: &T) -> Self {
        self.extra.insert(name, to_field_value(value));
        self
    }

    /// Adds a batch of extra fields.
    #[must_use]
    pub fn extra_fields(mut self, fields: Fields) -> Self {
        for (name, value) in fields {
            self.extra.insert(name, value);
        }
        self
    }

    /// Adds one explicitly sensitive value.
    #[must_use]
    pub fn sensitive<T: Serialize + ?Sized>(mut self, key: impl Into<String>, value: &T) -> Self {
        self.sensitive.insert(key, to_field_value(value));
        self
    }

    /// Adds a mapping of explicitly sensitive values.
    #[must_use]
    pub fn sensitive_data(mut self, data: SensitiveData) -> Self {
        self.sensitive.extend(data);
        self
    }

    /// Adds the fields and sensitive data of a [`LogFields`] value.
    #[must_use]
    pub fn with_fields<T: LogFields + ?Sized>(mut self, value: &T) -> Self {
        value.log_fields(&mut self.extra, &mut self.sensitive);
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl From<&str> for Record {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for Record {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}
