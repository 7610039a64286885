//! Structured logging that keeps sensitive values out of rendered log lines.
//!
//! Every log call goes through a short pipeline before it reaches the sink:
//! - **Decorate**: the caller's explicit sensitive data is split off the call's
//!   extra fields (`Record::sensitive`, or an extra named `sensitive_data`).
//! - **Redact**: extra fields the logger is configured to treat as sensitive are
//!   removed from the plain fields.
//! - **Relocate**: loggers configured with a sensitive message move the whole
//!   interpolated message out of the line and leave a marker behind.
//! - **Merge**: explicit data, redacted fields, and the relocated message are
//!   combined into one ordered mapping.
//! - **Render**: the line is written as `[sensitive_data={...}] <message>`.
//!
//! Per-logger behavior comes from a configuration document bound once at setup
//! ([`LoggingConfig`], [`LoggerRegistry`]). Loggers without configuration pass
//! their events through unchanged apart from the rendered prefix.
//!
//! What this crate does not do:
//! - detect or classify sensitive values; field names are always configured
//! - encrypt, rotate, or ship logs; delivery belongs to the `slog` drains
//!
//! The `slog` integration ([`slog::Logger`], [`slog::SensitiveDataFormat`]) and
//! the `LogFields` derive are enabled by default and can be turned off with
//! `default-features = false`.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use sensitive_logging_derive::LogFields;

#[allow(unused_extern_crates)]
extern crate self as sensitive_logging;

// Module declarations
mod binder;
mod config;
mod decorator;
mod error;
mod event;
mod fields;
mod interpolate;
mod merge;
mod pipeline;
mod record;
mod redactor;
mod relocator;
mod render;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use binder::LoggerRegistry;
pub use config::{LoggerConfig, LoggerOptions, LoggingConfig};
pub use decorator::decorate;
pub use error::{ConfigError, InterpolationError};
pub use event::{Level, LogEvent};
pub use fields::{Fields, SensitiveData, MESSAGE_KEY, SENSITIVE_DATA_KEY};
pub use interpolate::interpolate;
pub use merge::merge;
pub use pipeline::process;
pub use record::{LogFields, Record};
pub use redactor::redact_fields;
pub use relocator::{relocate_message, RELOCATED_MESSAGE_MARKER};
pub use render::{render_event, render_line};

#[doc(hidden)]
pub mod __private {
    pub use serde::Serialize;

    pub use crate::fields::to_field_value;
}
