//! Shared `slog` fixtures: a drain that captures records, and a writer that
//! collects rendered lines.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    fmt::Arguments,
    io,
    sync::{Arc, Mutex},
};

use sensitive_logging::{slog::LoggerFactory, LoggingConfig};
use serde_json::Value as JsonValue;

/// Loggers used throughout the scenarios, one per behavior.
pub const SCENARIO_CONFIG: &str = r#"{
    "version": 1,
    "disable_existing_loggers": false,
    "root": {"level": "DEBUG", "handlers": ["console"]},
    "handlers": {
        "console": {"level": "DEBUG", "class": "stream", "formatter": "verbose"}
    },
    "loggers": {
        "first_logger": {
            "handlers": ["console"]
        },
        "second_logger": {
            "handlers": ["console"],
            "sensitive_data_in_extra": ["phone_number"]
        },
        "third_logger": {
            "handlers": ["console"],
            "sensitive_data_in_message": true
        },
        "fourth_logger": {
            "handlers": ["console"],
            "sensitive_data_in_extra": ["last_name"],
            "sensitive_data_in_message": true
        }
    }
}"#;

pub fn scenario_config() -> LoggingConfig {
    LoggingConfig::from_json_str(SCENARIO_CONFIG).unwrap()
}

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: slog::Level,
    pub message: String,
    pub kv: HashMap<String, JsonValue>,
}

#[derive(Clone, Default)]
pub struct CapturedRecords(Arc<Mutex<Vec<CapturedRecord>>>);

impl CapturedRecords {
    pub fn all(&self) -> Vec<CapturedRecord> {
        self.0.lock().unwrap().clone()
    }

    /// The last record at info level or above.
    pub fn last(&self) -> CapturedRecord {
        self.all()
            .into_iter()
            .rev()
            .find(|record| record.level.is_at_least(slog::Level::Info))
            .expect("a record should have been captured")
    }
}

// A test serializer that captures serialized key-value pairs
#[derive(Default)]
struct CapturingSerializer {
    captured: HashMap<String, JsonValue>,
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .insert(key.to_string(), JsonValue::String(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured.insert(key.to_string(), json);
        Ok(())
    }
}

struct CapturingDrain {
    records: CapturedRecords,
}

impl slog::Drain for CapturingDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(
        &self,
        record: &slog::Record<'_>,
        _values: &slog::OwnedKVList,
    ) -> Result<(), slog::Never> {
        let mut serializer = CapturingSerializer::default();
        slog::KV::serialize(&record.kv(), record, &mut serializer).unwrap();
        self.records.0.lock().unwrap().push(CapturedRecord {
            level: record.level(),
            message: record.msg().to_string(),
            kv: serializer.captured,
        });
        Ok(())
    }
}

/// A root logger whose records are captured, plus the handle to read them.
pub fn capturing_root() -> (slog::Logger, CapturedRecords) {
    let records = CapturedRecords::default();
    let drain = CapturingDrain {
        records: records.clone(),
    };
    (slog::Logger::root(drain, slog::o!()), records)
}

pub fn capturing_factory() -> (LoggerFactory, CapturedRecords) {
    let (root, records) = capturing_root();
    (LoggerFactory::new(root, &scenario_config()), records)
}

/// An `io::Write` that many clones append to.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(ToOwned::to_owned)
            .collect()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
