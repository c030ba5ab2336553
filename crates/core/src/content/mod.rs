//! Static content and the view models built from it

pub mod cards;
pub mod catalog;
pub mod model;

use itertools::Itertools;

use crate::error::Error;
use crate::result::Result;
use model::Identified;

pub use cards::{Placement, ProjectCard, ProjectMedia, TimelineCard, project_cards, timeline_cards};
pub use model::{EntryKind, ProjectEntry, SectionCopy, TimelineEntry};

/// Checks that every identifier in `entries` is unique
///
/// # Errors
///
/// Returns [`Error::DuplicateId`] naming the first repeated identifier.
///
/// # Examples
///
/// ```
/// use folio_core::content::{catalog, validate_unique_ids};
///
/// assert!(validate_unique_ids("projects", catalog::PROJECTS).is_ok());
/// ```
pub fn validate_unique_ids<T: Identified>(list: &'static str, entries: &[T]) -> Result<()> {
    entries
        .iter()
        .map(Identified::id)
        .duplicates()
        .next()
        .map_or(Ok(()), |id| Err(Error::DuplicateId { list, id }))
}

/// Validates both built-in catalogs
///
/// # Errors
///
/// Returns the first duplicate identifier found.
pub fn validate_catalog() -> Result<()> {
    validate_unique_ids("experiences", catalog::EXPERIENCES)?;
    validate_unique_ids("projects", catalog::PROJECTS)
}
