//! Project card: scroll reveal, pointer tilt and hover zoom

use folio_core::content::{ProjectCard, ProjectMedia};
use folio_core::motion::tilt::{
    HOVER_IMAGE_DURATION, HOVER_IMAGE_EASE, HOVER_NUMBER_DURATION, TILT_DURATION, TILT_EASE,
    hover_image, hover_number,
};
use folio_core::motion::{Ease, NodeId, Tilt, choreography};
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

use crate::config::use_site_config;
use crate::motion::{SectionHandle, require, use_section_motion};

const IDLE_NUMBER_COLOR: &str = "rgba(255, 255, 255, 0.2)";

#[derive(Debug, Clone, Copy)]
struct CardNodes {
    card: NodeId,
    image: NodeId,
    number: NodeId,
}

fn hover(handle: SectionHandle<CardNodes>, hovered: bool) {
    handle.with(|motion, nodes| {
        motion.tween(nodes.image, hover_image(hovered), HOVER_IMAGE_DURATION, HOVER_IMAGE_EASE);
        motion.tween(nodes.number, hover_number(hovered), HOVER_NUMBER_DURATION, Ease::Power1Out);
    });
}

#[component]
pub fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let config = use_site_config();
    let card_ref = NodeRef::<html::Div>::new();
    let image_ref = NodeRef::<html::Div>::new();
    let number_ref = NodeRef::<html::Span>::new();
    let hovered = RwSignal::new(false);
    let reveal_delay = card.reveal_delay();

    let handle = use_section_motion("project-card", move |motion| {
        let nodes = CardNodes {
            card: motion.adopt(require(card_ref.get(), "project card")?),
            image: motion.adopt(require(image_ref.get(), "project image")?),
            number: motion.adopt(require(number_ref.get(), "project number")?),
        };
        motion.reveal(nodes.card, choreography::project_card(nodes.card, reveal_delay))?;
        Ok(nodes)
    });

    let on_enter = move |_: MouseEvent| {
        hovered.set(true);
        hover(handle, true);
    };

    let on_move = move |ev: MouseEvent| {
        let Some(element) = card_ref.get_untracked() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        handle.with(|motion, nodes| {
            let model = motion.runtime().tilt;
            let props = model
                .tilt_at(x, y, rect.width(), rect.height())
                .props()
                .perspective(model.perspective);
            motion.tween(nodes.card, props, TILT_DURATION, TILT_EASE);
        });
    };

    let on_leave = move |_: MouseEvent| {
        hovered.set(false);
        handle.with(|motion, nodes| {
            motion.tween(nodes.card, Tilt::neutral().props(), TILT_DURATION, TILT_EASE);
        });
        hover(handle, false);
    };

    let accent = config.theme.hover_accent;
    let number_color = move || {
        if hovered.get() {
            accent.clone()
        } else {
            IDLE_NUMBER_COLOR.to_owned()
        }
    };

    let entry = card.entry;
    let tags = card.tags();
    let media = match card.media {
        ProjectMedia::Image { src, alt } => {
            view! { <img src=src alt=alt class="project-image" loading="lazy" /> }.into_any()
        }
        ProjectMedia::Placeholder { label } => view! {
            <div class="project-image-placeholder">
                <span class="placeholder-text">{label}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div
            node_ref=card_ref
            class="project-card"
            on:mouseenter=on_enter
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <div class="project-card-inner">
                <span node_ref=number_ref class="project-number" style:color=number_color>
                    {card.number}
                </span>

                <div class="project-image-container">
                    <div node_ref=image_ref class="project-image-wrapper">
                        {media}
                    </div>

                    <div class="project-overlay" class:active=move || hovered.get()>
                        <span class="overlay-text">"VIEW PROJECT"</span>
                        <div class="overlay-links">
                            <a
                                href=entry.live_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="overlay-link"
                            >
                                "LIVE ↗"
                            </a>
                            <a
                                href=entry.source_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="overlay-link"
                            >
                                "GITHUB ↗"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="project-content">
                    <div class="project-header">
                        <span class="project-category">{entry.category}</span>
                        <span class="project-year">{entry.year}</span>
                    </div>
                    <h3 class="project-title">{entry.title}</h3>
                    <p class="project-description">{entry.description}</p>
                    <div class="project-tech">
                        {tags
                            .iter()
                            .map(|tag| view! { <span class="tech-tag">{*tag}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_card_component_exists() {
        let _component = ProjectCardView;
    }
}
