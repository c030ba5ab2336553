//! Result type definition and logging combinators.
//!
//! The page must stay readable when something in the animation layer goes
//! wrong, so most call sites turn an error into a logged fallback instead of
//! propagating it further.

use crate::error::Error;

/// The standard Result type for folio operations.
///
/// # Examples
///
/// ```
/// use folio_core::{Error, Result};
///
/// fn lookup(id: usize) -> Result<usize> {
///     if id < 4 { Ok(id) } else { Err(Error::UnknownNode { id }) }
/// }
///
/// assert!(lookup(2).is_ok());
/// assert!(lookup(9).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait that degrades a failed `Result` into a logged fallback.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("operation failed: {e}");
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("operation failed, using default: {e}");
                default
            }
        }
    }
}
