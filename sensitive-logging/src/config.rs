//! Per-logger options and the configuration document they come from.
//!
//! A document maps logger names to option objects:
//!
//! ```json
//! {
//!     "version": 1,
//!     "loggers": {
//!         "payments": {
//!             "handlers": ["console"],
//!             "sensitive_data_in_extra": ["phone_number"],
//!             "sensitive_data_in_message": true
//!         }
//!     }
//! }
//! ```
//!
//! Only `sensitive_data_in_extra` and `sensitive_data_in_message` are
//! interpreted. Every other key, per logger or at the top level, is kept as-is
//! for whatever sets up the rest of the logging stack.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::ConfigError, fields::SENSITIVE_DATA_KEY};

/// Sensitive-data options of one logger.
///
/// The default (no configured fields, message not sensitive) makes the
/// pipeline an identity transform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Extra field names to move into the sensitive mapping, in this order.
    #[serde(rename = "sensitive_data_in_extra", default)]
    sensitive_field_names: Vec<String>,
    /// Whether the whole interpolated message is sensitive.
    #[serde(rename = "sensitive_data_in_message", default)]
    sensitive_whole_message: bool,
}

impl LoggerConfig {
    #[must_use]
    pub fn new<I, S>(sensitive_field_names: I, sensitive_whole_message: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sensitive_field_names: sensitive_field_names.into_iter().map(Into::into).collect(),
            sensitive_whole_message,
        }
    }

    pub fn sensitive_field_names(&self) -> &[String] {
        &self.sensitive_field_names
    }

    pub fn sensitive_whole_message(&self) -> bool {
        self.sensitive_whole_message
    }

    /// True when the options leave events untouched.
    pub fn is_passthrough(&self) -> bool {
        self.sensitive_field_names.is_empty() && !self.sensitive_whole_message
    }

    /// Checks the options for `logger`.
    ///
    /// Field names must be non-empty, unique, and must not be the reserved
    /// `sensitive_data` keyword.
    pub fn validate(&self, logger: &str) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for name in &self.sensitive_field_names {
            if name.is_empty() {
                return Err(ConfigError::invalid_logger(
                    logger,
                    "`sensitive_data_in_extra` contains an empty field name",
                ));
            }
            if name == SENSITIVE_DATA_KEY {
                return Err(ConfigError::invalid_logger(
                    logger,
                    format!("`{SENSITIVE_DATA_KEY}` is reserved and cannot be listed as an extra field"),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::invalid_logger(
                    logger,
                    format!("field `{name}` is listed more than once in `sensitive_data_in_extra`"),
                ));
            }
        }
        Ok(())
    }
}

/// Everything configured for one logger.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerOptions {
    #[serde(flatten)]
    config: LoggerConfig,
    /// Options this crate does not interpret (handlers, level, ...).
    #[serde(flatten)]
    passthrough: Map<String, Value>,
}

impl LoggerOptions {
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn passthrough(&self) -> &Map<String, Value> {
        &self.passthrough
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    loggers: Map<String, Value>,
    #[serde(flatten)]
    passthrough: Map<String, Value>,
}

/// A parsed and validated configuration document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoggingConfig {
    loggers: Vec<(String, LoggerOptions)>,
    passthrough: Map<String, Value>,
}

impl LoggingConfig {
    /// Parses a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawDocument = serde_json::from_str(input)?;
        Self::from_raw(raw)
    }

    /// Parses a TOML document with the same shape as the JSON one.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawDocument = toml::from_str(input)?;
        Self::from_raw(raw)
    }

    /// Builds the configuration from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let raw = RawDocument::deserialize(value)?;
        Self::from_raw(raw)
    }

    /// Reads a document from disk. Files ending in `.toml` are read as TOML,
    /// anything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    fn from_raw(raw: RawDocument) -> Result<Self, ConfigError> {
        let mut loggers = Vec::with_capacity(raw.loggers.len());
        for (name, value) in raw.loggers {
            let options = LoggerOptions::deserialize(value)
                .map_err(|err| ConfigError::invalid_logger(&name, err.to_string()))?;
            options.config.validate(&name)?;
            loggers.push((name, options));
        }
        Ok(Self {
            loggers,
            passthrough: raw.passthrough,
        })
    }

    /// Adds or replaces the options of one logger.
    pub fn with_logger(mut self, name: impl Into<String>, config: LoggerConfig) -> Result<Self, ConfigError> {
        let name = name.into();
        config.validate(&name)?;
        let options = LoggerOptions {
            config,
            passthrough: Map::new(),
        };
        match self.loggers.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = options,
            None => self.loggers.push((name, options)),
        }
        Ok(self)
    }

    pub fn logger(&self, name: &str) -> Option<&LoggerOptions> {
        self.loggers
            .iter()
            .find_map(|(existing, options)| (existing == name).then_some(options))
    }

    /// Configured loggers in document order.
    pub fn loggers(&self) -> impl Iterator<Item = (&str, &LoggerOptions)> {
        self.loggers
            .iter()
            .map(|(name, options)| (name.as_str(), options))
    }

    /// Top-level keys other than `loggers`.
    pub fn passthrough(&self) -> &Map<String, Value> {
        &self.passthrough
    }
}
