//! Error types for the browser bindings
//!
//! None of these reach the page. A section that hits one logs it and falls
//! back to showing its content without animation.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while talking to the DOM
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("window is not available")]
    WindowUnavailable,

    #[error("document is not available")]
    DocumentUnavailable,

    #[error("IntersectionObserver is not supported")]
    ObserverUnsupported,

    #[error("failed to create intersection observer: {0}")]
    ObserverFailed(String),

    #[error("failed to {action} '{event}' listener: {reason}")]
    Listener {
        action: &'static str,
        event: &'static str,
        reason: String,
    },

    #[error("failed to request animation frame: {0}")]
    FrameRequest(String),

    #[error("element '{0}' was not rendered")]
    MissingElement(&'static str),

    #[error("failed to write style: {0}")]
    Style(String),

    #[error("failed to update document head: {0}")]
    Head(String),

    #[error(transparent)]
    Motion(#[from] folio_core::Error),
}

impl DomError {
    pub(crate) fn listener(action: &'static str, event: &'static str, err: &JsValue) -> Self {
        Self::Listener {
            action,
            event,
            reason: describe(err),
        }
    }
}

/// Readable text for a thrown JS value
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Result type alias for DOM operations
pub type Result<T> = std::result::Result<T, DomError>;
