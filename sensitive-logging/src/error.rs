//! Error types for configuration binding and message interpolation.
//!
//! The per-event pipeline itself has no error states. Configuration problems
//! surface once, at setup, as [`ConfigError`]. Interpolation problems are
//! reported as [`InterpolationError`] and rendered into the line by
//! [`crate::LogEvent::final_message`] instead of failing the log call.

use thiserror::Error;

/// Errors raised while loading or binding a logging configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid TOML or does not have the expected shape.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A logger entry carries options that cannot be used.
    #[error("invalid configuration for logger `{logger}`: {reason}")]
    InvalidLogger {
        /// Name of the offending logger.
        logger: String,
        /// What is wrong with its options.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid_logger(logger: &str, reason: impl Into<String>) -> Self {
        Self::InvalidLogger {
            logger: logger.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while substituting positional arguments into a template.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InterpolationError {
    /// The template and the arguments disagree on how many values there are.
    #[error("template has {expected} placeholder(s) but {actual} argument(s) were supplied")]
    ArgumentCount {
        /// Placeholders found in the template.
        expected: usize,
        /// Arguments supplied by the caller.
        actual: usize,
    },

    /// A `{` or `}` is neither a placeholder nor an escaped brace.
    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace {
        /// Byte offset of the brace in the template.
        position: usize,
    },
}
