//! Core error types for folio operations.
//!
//! Nothing here is fatal to the page: callers in the UI crate log these and
//! fall back to showing content in its final state.

use thiserror::Error;

/// Core error type for folio operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Sequencer errors
    #[error("node {id} was never adopted by this sequencer")]
    UnknownNode { id: usize },

    #[error("trigger {id} is not registered with this sequencer")]
    UnknownTrigger { id: usize },

    #[error("trigger node {id} is already registered")]
    DuplicateTrigger { id: usize },

    #[error("sequencer has been unmounted")]
    Detached,

    #[error("invalid animation step: {reason}")]
    InvalidStep { reason: String },

    #[error("invalid trigger anchor '{anchor}': {reason}")]
    InvalidAnchor { anchor: String, reason: String },

    // Content errors
    #[error("duplicate id {id} in {list}")]
    DuplicateId { list: &'static str, id: u32 },

    // Configuration errors
    #[error("TOML parse error: {reason}")]
    ConfigParse { reason: String },

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl Error {
    /// Create an invalid step error.
    pub fn invalid_step(reason: impl Into<String>) -> Self {
        Self::InvalidStep {
            reason: reason.into(),
        }
    }

    /// Create an invalid anchor error.
    pub fn invalid_anchor(anchor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAnchor {
            anchor: anchor.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse {
            reason: err.to_string(),
        }
    }
}
