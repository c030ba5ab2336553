//! Page sections and the cards they render

pub mod experience;
pub mod hero;
pub mod navbar;
pub mod project_card;
pub mod projects;
pub mod section_header;
pub mod timeline_item;

pub use experience::Experience;
pub use hero::Hero;
pub use navbar::Navbar;
pub use project_card::ProjectCardView;
pub use projects::Projects;
pub use section_header::SectionHeader;
pub use timeline_item::TimelineItem;
