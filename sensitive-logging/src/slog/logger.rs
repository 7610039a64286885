//! The pipeline-aware logger handle.

use std::sync::Arc;

use ::slog::{o, BorrowedKV, RecordStatic};

use super::value::EventKv;
use crate::{
    config::LoggerConfig,
    decorator::decorate,
    event::{Level, LogEvent},
    fields::SensitiveData,
    pipeline::process,
    record::Record,
};

static CRITICAL: RecordStatic<'static> = ::slog::record_static!(::slog::Level::Critical, "");
static ERROR: RecordStatic<'static> = ::slog::record_static!(::slog::Level::Error, "");
static WARNING: RecordStatic<'static> = ::slog::record_static!(::slog::Level::Warning, "");
static INFO: RecordStatic<'static> = ::slog::record_static!(::slog::Level::Info, "");
static DEBUG: RecordStatic<'static> = ::slog::record_static!(::slog::Level::Debug, "");
static TRACE: RecordStatic<'static> = ::slog::record_static!(::slog::Level::Trace, "");

fn record_static(level: Level) -> &'static RecordStatic<'static> {
    match level {
        Level::Critical => &CRITICAL,
        Level::Error => &ERROR,
        Level::Warning => &WARNING,
        Level::Info => &INFO,
        Level::Debug => &DEBUG,
        Level::Trace => &TRACE,
    }
}

/// A named logger with bound sensitive-data options.
///
/// Cloning is cheap; clones share the name, the config, and the inner
/// `slog::Logger`. The inner logger carries a `logger` key with the name.
///
/// That key lives in the logger's owned values, not in the record, so a call
/// with its own plain field named `logger` emits both. Drains that flatten
/// owned values and record values into one map see the key twice.
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    config: Arc<LoggerConfig>,
    inner: ::slog::Logger,
}

impl Logger {
    /// Creates a logger named `name` below `parent`.
    pub fn new(name: &str, config: Arc<LoggerConfig>, parent: &::slog::Logger) -> Self {
        Self {
            name: Arc::from(name),
            config,
            inner: parent.new(o!("logger" => name.to_owned())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The wrapped `slog` logger.
    pub fn inner(&self) -> &::slog::Logger {
        &self.inner
    }

    /// Decorates and processes a call without emitting it.
    pub fn prepare(&self, level: Level, record: impl Into<Record>) -> LogEvent {
        let mut event = decorate(level, &self.name, record.into());
        process(&mut event, &self.config);
        event
    }

    /// Logs one call at `level`.
    pub fn log(&self, level: Level, record: impl Into<Record>) {
        let event = self.prepare(level, record);
        self.emit(&event);
    }

    /// Emits an already-processed event to the inner `slog` logger.
    pub fn emit(&self, event: &LogEvent) {
        let message = event.final_message();
        let empty = SensitiveData::new();
        let sensitive = event.sensitive_data.as_ref().unwrap_or(&empty);
        let kv = EventKv::new(&event.fields, sensitive);
        // `format_args!` has to live inside the call expression.
        self.inner.log(&::slog::Record::new(
            record_static(event.level),
            &format_args!("{message}"),
            BorrowedKV(&kv),
        ));
    }

    pub fn critical(&self, record: impl Into<Record>) {
        self.log(Level::Critical, record);
    }

    pub fn error(&self, record: impl Into<Record>) {
        self.log(Level::Error, record);
    }

    pub fn warning(&self, record: impl Into<Record>) {
        self.log(Level::Warning, record);
    }

    pub fn info(&self, record: impl Into<Record>) {
        self.log(Level::Info, record);
    }

    pub fn debug(&self, record: impl Into<Record>) {
        self.log(Level::Debug, record);
    }

    pub fn trace(&self, record: impl Into<Record>) {
        self.log(Level::Trace, record);
    }
}
