//! Content records rendered by the experience and projects sections

use serde::Serialize;

/// Whether a timeline entry is a job or a degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Work,
    Education,
}

impl EntryKind {
    /// Badge text shown in the card header
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Work => "💼 WORK",
            Self::Education => "🎓 EDUCATION",
        }
    }

    /// CSS modifier class for the badge
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Education => "education",
        }
    }
}

/// One stop on the experience timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: u32,
    pub kind: EntryKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub tech: Option<&'static [&'static str]>,
}

/// One card in the projects grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: Option<&'static [&'static str]>,
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub year: &'static str,
}

/// Heading block shared by the content sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub label: &'static str,
    pub title: &'static str,
    /// Trailing word of the title rendered in the accent color
    pub accent: &'static str,
    pub subtitle: &'static str,
}

/// Anything with a stable identifier inside its list
pub trait Identified {
    fn id(&self) -> u32;
}

impl Identified for TimelineEntry {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Identified for ProjectEntry {
    fn id(&self) -> u32 {
        self.id
    }
}
