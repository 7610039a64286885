//! Binding per-logger options once, at setup.

use std::{collections::HashMap, sync::Arc};

use crate::config::{LoggerConfig, LoggingConfig};

/// Read-only lookup of the options bound to each logger name.
///
/// Built once from a validated [`LoggingConfig`]; configs are shared through
/// `Arc` and never change afterwards, so lookups need no locking. Names the
/// document does not mention get the default (pass-through) config.
#[derive(Clone, Debug, Default)]
pub struct LoggerRegistry {
    configs: HashMap<String, Arc<LoggerConfig>>,
    default: Arc<LoggerConfig>,
}

impl LoggerRegistry {
    /// Binds every logger configured in `config`.
    pub fn bind(config: &LoggingConfig) -> Self {
        let configs = config
            .loggers()
            .map(|(name, options)| (name.to_owned(), Arc::new(options.config().clone())))
            .collect();
        Self {
            configs,
            default: Arc::default(),
        }
    }

    /// Returns the config bound to `name`, or the default one.
    pub fn config_for(&self, name: &str) -> Arc<LoggerConfig> {
        self.configs
            .get(name)
            .map_or_else(|| Arc::clone(&self.default), Arc::clone)
    }

    pub fn is_configured(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Names of the configured loggers, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::LoggerRegistry;
    use crate::config::{LoggerConfig, LoggingConfig};

    #[test]
    fn unknown_loggers_get_the_default_config() {
        let registry = LoggerRegistry::bind(&LoggingConfig::default());
        assert_eq!(*registry.config_for("anything"), LoggerConfig::default());
        assert!(!registry.is_configured("anything"));
    }

    #[test]
    fn configured_loggers_share_one_config() {
        let config = LoggingConfig::default()
            .with_logger("second_logger", LoggerConfig::new(["phone_number"], false))
            .unwrap();
        let registry = LoggerRegistry::bind(&config);

        let first = registry.config_for("second_logger");
        let second = registry.config_for("second_logger");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.sensitive_field_names(), ["phone_number".to_owned()]);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["second_logger"]);
    }

    #[test]
    fn registry_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LoggerRegistry>();
    }
}
