//! Running the sensitive-data pipeline in front of `slog`.
//!
//! This module connects the pipeline to `slog` without replacing any of it:
//! - [`Logger`] wraps a `slog::Logger`. Each call is decorated, redacted,
//!   relocated, and merged, then emitted as one ordinary `slog` record whose
//!   key-value pairs are the remaining plain fields plus `sensitive_data`.
//! - [`SensitiveDataValue`] carries the merged mapping as nested structured
//!   JSON through `slog`'s `nested-values` support.
//! - [`SensitiveDataFormat`] is a drain that writes the rendered line
//!   `[sensitive_data={...}] <message>`.
//! - [`LoggerFactory`] binds a configuration document once and hands out
//!   loggers by name.
//!
//! Level filtering and delivery stay with the drains the caller composes.

mod factory;
mod format;
mod logger;
mod value;

pub use factory::LoggerFactory;
pub use format::SensitiveDataFormat;
pub use logger::Logger;
pub use value::{EventKv, SensitiveDataValue};
