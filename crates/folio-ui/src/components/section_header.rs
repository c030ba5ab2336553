//! Label, accented title and subtitle shared by the content sections

use folio_core::content::SectionCopy;
use leptos::html;
use leptos::prelude::*;

/// Heading block; its direct children are what the section reveal staggers
#[component]
pub fn SectionHeader(
    copy: SectionCopy,
    /// Prefix for the CSS classes, e.g. `"experience"`
    class_prefix: &'static str,
    node_ref: NodeRef<html::Div>,
) -> impl IntoView {
    view! {
        <div node_ref=node_ref class=format!("{class_prefix}-header")>
            <span class=format!("{class_prefix}-label")>{copy.label}</span>
            <h2 class=format!("{class_prefix}-title")>
                {copy.title}
                <span class="text-accent">{copy.accent}</span>
            </h2>
            <p class=format!("{class_prefix}-subtitle")>{copy.subtitle}</p>
        </div>
    }
}
