//! Per-card view models derived from the content lists
//!
//! Rendering components only read these; nothing here owns state.

use super::model::{ProjectEntry, TimelineEntry};
use crate::config::MediaMode;

/// Side of the center line a timeline card sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    /// Even indices go left, odd indices go right
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Horizontal offset the card content slides in from
    #[must_use]
    pub const fn reveal_offset_x(self) -> f64 {
        match self {
            Self::Left => -50.0,
            Self::Right => 50.0,
        }
    }
}

/// Two-digit, one-based position label ("01", "02", ...)
#[must_use]
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index.saturating_add(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineCard {
    pub entry: &'static TimelineEntry,
    pub index: usize,
    pub placement: Placement,
    pub number: String,
}

impl TimelineCard {
    /// Technology badges, empty when the entry has none
    #[must_use]
    pub fn tags(&self) -> &'static [&'static str] {
        self.entry.tech.unwrap_or_default()
    }
}

/// Maps timeline entries to cards in list order
#[must_use]
pub fn timeline_cards(entries: &'static [TimelineEntry]) -> Vec<TimelineCard> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| TimelineCard {
            entry,
            index,
            placement: Placement::for_index(index),
            number: ordinal(index),
        })
        .collect()
}

/// What fills the media slot of a project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMedia {
    Image { src: &'static str, alt: &'static str },
    Placeholder { label: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub entry: &'static ProjectEntry,
    pub index: usize,
    pub number: String,
    pub media: ProjectMedia,
}

impl ProjectCard {
    #[must_use]
    pub fn tags(&self) -> &'static [&'static str] {
        self.entry.tech.unwrap_or_default()
    }

    /// Reveal delay in seconds; cards cascade by a tenth of a second
    #[must_use]
    pub fn reveal_delay(&self) -> f64 {
        f64::from(u32::try_from(self.index).unwrap_or(u32::MAX)) * 0.1
    }
}

/// Maps project entries to cards in list order
///
/// An entry with an empty image reference always gets a placeholder.
#[must_use]
pub fn project_cards(entries: &'static [ProjectEntry], mode: MediaMode) -> Vec<ProjectCard> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let media = match mode {
                MediaMode::Asset if !entry.image.is_empty() => ProjectMedia::Image {
                    src: entry.image,
                    alt: entry.title,
                },
                _ => ProjectMedia::Placeholder { label: entry.title },
            };
            ProjectCard {
                entry,
                index,
                number: ordinal(index),
                media,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::{EXPERIENCES, PROJECTS};

    #[test]
    fn test_placement_alternates() {
        assert_eq!(Placement::for_index(0), Placement::Left);
        assert_eq!(Placement::for_index(1), Placement::Right);
        assert_eq!(Placement::for_index(2), Placement::Left);
    }

    #[test]
    fn test_ordinal_is_zero_padded() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(9), "10");
        assert_eq!(ordinal(99), "100");
    }

    #[test]
    fn test_timeline_cards_keep_order() {
        let cards = timeline_cards(EXPERIENCES);
        let ids: Vec<u32> = cards.iter().map(|c| c.entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(cards.len(), EXPERIENCES.len());
    }

    #[test]
    fn test_education_card_has_no_tags() {
        let cards = timeline_cards(EXPERIENCES);
        let last = cards.last().map(TimelineCard::tags);
        assert_eq!(last, Some(&[][..]));
    }

    #[test]
    fn test_project_media_follows_mode() {
        let assets = project_cards(PROJECTS, MediaMode::Asset);
        assert!(matches!(
            assets.first().map(|c| &c.media),
            Some(ProjectMedia::Image { src: "/projects/project1.webp", .. })
        ));

        let blocks = project_cards(PROJECTS, MediaMode::Placeholder);
        assert!(matches!(
            blocks.first().map(|c| &c.media),
            Some(ProjectMedia::Placeholder { label: "E-COMMERCE PLATFORM" })
        ));
    }

    #[test]
    fn test_project_reveal_delay_cascades() {
        let cards = project_cards(PROJECTS, MediaMode::Asset);
        let delays: Vec<f64> = cards.iter().map(ProjectCard::reveal_delay).collect();
        assert_eq!(delays.len(), 4);
        for (i, delay) in delays.iter().enumerate() {
            let expected = 0.1 * f64::from(u32::try_from(i).unwrap_or(0));
            assert!((delay - expected).abs() < 1e-9);
        }
    }
}
