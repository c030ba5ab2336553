//! Fixed top navigation

use leptos::prelude::*;

use crate::config::use_site_config;

/// In-page anchors, in page order
pub const SECTION_LINKS: [(&str, &str); 2] = [("EXPERIENCE", "#experience"), ("WORK", "#work")];

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_site_config();

    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="/">"PORTFOLIO"</a>
            <ul class="navbar-links">
                {SECTION_LINKS
                    .into_iter()
                    .map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
                    .collect_view()}
                <li>
                    <a href=config.site.resume_href target="_blank" rel="noopener noreferrer">
                        "RESUME"
                    </a>
                </li>
            </ul>
        </nav>
    }
}
