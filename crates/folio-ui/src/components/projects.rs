//! Featured work section

use folio_core::content::catalog::{PROJECTS, PROJECTS_COPY};
use folio_core::content::project_cards;
use folio_core::motion::choreography;
use leptos::html;
use leptos::prelude::*;

use super::{ProjectCardView, SectionHeader};
use crate::config::use_site_config;
use crate::motion::{require, use_section_motion};

#[component]
pub fn Projects() -> impl IntoView {
    let config = use_site_config();
    let header_ref = NodeRef::<html::Div>::new();
    let line_ref = NodeRef::<html::Div>::new();

    use_section_motion("projects", move |motion| {
        let header = require(header_ref.get(), "projects header")?;
        let line = motion.adopt(require(line_ref.get(), "projects line")?);
        let children = motion.adopt_children(&header);
        let trigger = motion.adopt(header);
        motion.reveal(trigger, choreography::projects_header(children, line))
    });

    let cards = project_cards(PROJECTS, config.theme.project_media);

    view! {
        <section class="projects-section" id="work">
            <div class="projects-container">
                <SectionHeader copy=PROJECTS_COPY class_prefix="projects" node_ref=header_ref />
                <div node_ref=line_ref class="projects-line"></div>

                <div class="projects-grid">
                    {cards
                        .into_iter()
                        .map(|card| view! { <ProjectCardView card=card /> })
                        .collect_view()}
                </div>

                <div class="projects-cta">
                    <a
                        href=config.site.profile_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="view-all-btn"
                    >
                        <span>"VIEW ALL PROJECTS ON GITHUB"</span>
                        <span class="btn-arrow">"→"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_component_exists() {
        let _component = Projects;
    }
}
