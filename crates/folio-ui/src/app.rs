//! Root component: site configuration, navigation and routes

use folio_core::SiteConfig;
use leptos::prelude::*;

use crate::components::Navbar;
use crate::config::provide_site_config;
use crate::dom;
use crate::router::AppRouter;

/// Application root
///
/// Provides `config` as context before any section renders, so sections read
/// the accent colors, media mode and links from it.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    if let Err(err) = dom::apply_site_meta(&document(), &config.site) {
        tracing::warn!(error = %err, "site metadata not applied");
    }
    let theme = format!("--accent: {}", config.theme.accent);
    provide_site_config(config);

    view! {
        <div class="app-container" style=theme>
            <Navbar />
            <main class="app-main">
                <AppRouter />
            </main>
        </div>
    }
}
