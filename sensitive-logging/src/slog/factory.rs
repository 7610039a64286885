//! Handing out configured loggers.

use ::slog::debug;

use super::logger::Logger;
use crate::{binder::LoggerRegistry, config::LoggingConfig};

/// Builds [`Logger`]s from a root `slog::Logger` and a bound configuration.
///
/// Binding happens once in [`LoggerFactory::new`]; every logger it hands out
/// shares the bound, read-only options.
#[derive(Clone)]
pub struct LoggerFactory {
    root: ::slog::Logger,
    registry: LoggerRegistry,
}

impl LoggerFactory {
    pub fn new(root: ::slog::Logger, config: &LoggingConfig) -> Self {
        let registry = LoggerRegistry::bind(config);
        for (name, options) in config.loggers() {
            let bound = options.config();
            debug!(root, "bound sensitive data options";
                "logger" => name,
                "sensitive_fields" => bound.sensitive_field_names().len(),
                "sensitive_message" => bound.sensitive_whole_message()
            );
        }
        Self { root, registry }
    }

    /// Returns the logger named `name`, with its bound options or the
    /// default ones.
    pub fn logger(&self, name: &str) -> Logger {
        Logger::new(name, self.registry.config_for(name), &self.root)
    }

    pub fn registry(&self) -> &LoggerRegistry {
        &self.registry
    }
}
