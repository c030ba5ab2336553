//! Experience section: staggered header, scrubbed progress line, timeline

use folio_core::content::catalog::{EXPERIENCE_COPY, EXPERIENCES};
use folio_core::content::timeline_cards;
use folio_core::motion::choreography;
use leptos::html;
use leptos::prelude::*;

use super::{SectionHeader, TimelineItem};
use crate::config::use_site_config;
use crate::motion::{require, use_section_motion};

#[component]
pub fn Experience() -> impl IntoView {
    let config = use_site_config();
    let header_ref = NodeRef::<html::Div>::new();
    let timeline_ref = NodeRef::<html::Div>::new();
    let progress_ref = NodeRef::<html::Div>::new();

    use_section_motion("experience", move |motion| {
        let header = require(header_ref.get(), "experience header")?;
        let timeline = require(timeline_ref.get(), "timeline")?;
        let fill = motion.adopt(require(progress_ref.get(), "timeline progress")?);
        let lag_ms = motion.runtime().scrub_lag_ms;

        let children = motion.adopt_children(&header);
        let trigger = motion.adopt(header);
        motion.reveal(trigger, choreography::experience_header(children))?;
        motion.scrub(timeline.into(), choreography::timeline_progress(fill, lag_ms)?)
    });

    view! {
        <section class="experience-section" id="experience">
            <div class="exp-bg-gradient"></div>
            <div class="exp-bg-lines"></div>

            <div class="experience-container">
                <SectionHeader copy=EXPERIENCE_COPY class_prefix="experience" node_ref=header_ref />

                <div node_ref=timeline_ref class="timeline">
                    <div class="timeline-progress-track">
                        <div node_ref=progress_ref class="timeline-progress-fill"></div>
                    </div>
                    {timeline_cards(EXPERIENCES)
                        .into_iter()
                        .map(|card| view! { <TimelineItem card=card /> })
                        .collect_view()}
                </div>

                <div class="experience-cta">
                    <a
                        href=config.site.resume_href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="download-resume-btn"
                    >
                        <span class="btn-icon">"📄"</span>
                        <span class="btn-text">"DOWNLOAD RESUME"</span>
                        <span class="btn-arrow">"↓"</span>
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
    fn test_experience_component_exists() {
        let _component = Experience;
    }
}
