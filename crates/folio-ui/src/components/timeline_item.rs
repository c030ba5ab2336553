//! One entry on the experience timeline

use folio_core::content::TimelineCard;
use folio_core::motion::choreography;
use leptos::html;
use leptos::prelude::*;

use crate::motion::{require, use_section_motion};

#[component]
pub fn TimelineItem(card: TimelineCard) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let line_ref = NodeRef::<html::Div>::new();
    let dot_ref = NodeRef::<html::Div>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let placement = card.placement;

    use_section_motion("timeline-item", move |motion| {
        let item = motion.adopt(require(item_ref.get(), "timeline item")?);
        let line = motion.adopt(require(line_ref.get(), "timeline line")?);
        let dot = motion.adopt(require(dot_ref.get(), "timeline dot")?);
        let content = motion.adopt(require(content_ref.get(), "timeline content")?);
        motion.reveal(item, choreography::timeline_item(line, dot, content, placement))
    });

    let entry = card.entry;
    let tags = card.tags();

    view! {
        <div node_ref=item_ref class=format!("timeline-item {}", placement.class_name())>
            <div class="timeline-marker">
                <div node_ref=line_ref class="timeline-line"></div>
                <div node_ref=dot_ref class="timeline-dot">
                    <span class="dot-inner"></span>
                    <span class="dot-pulse"></span>
                </div>
            </div>

            <div node_ref=content_ref class="timeline-content">
                <div class="timeline-card">
                    <div class="card-header">
                        <span class=format!("card-type {}", entry.kind.class_name())>
                            {entry.kind.badge()}
                        </span>
                        <span class="card-period">{entry.period}</span>
                    </div>

                    <h3 class="card-title">{entry.title}</h3>
                    <div class="card-company">
                        <span class="company-name">{entry.organization}</span>
                        <span class="company-divider">"•"</span>
                        <span class="company-location">{entry.location}</span>
                    </div>

                    <p class="card-description">{entry.description}</p>

                    <ul class="card-achievements">
                        {entry
                            .achievements
                            .iter()
                            .map(|achievement| {
                                view! {
                                    <li class="achievement-item">
                                        <span class="achievement-arrow">"→"</span>
                                        {*achievement}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    {(!tags.is_empty())
                        .then(|| {
                            view! {
                                <div class="card-tech">
                                    {tags
                                        .iter()
                                        .map(|tag| view! { <span class="tech-badge">{*tag}</span> })
                                        .collect_view()}
                                </div>
                            }
                        })}

                    <span class="card-number">{card.number}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_item_component_exists() {
        let _component = TimelineItem;
    }
}
