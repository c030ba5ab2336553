//! WASM entry point
//!
//! Loads the embedded configuration, starts logging, installs the motion
//! runtime and mounts [`App`] to the document body.

use folio_core::{ResultExt, SiteConfig};
use folio_ui::App;
use folio_ui::{config, logging, motion};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::embedded();
    let level = loaded
        .as_ref()
        .map_or(logging::DEFAULT_LEVEL, |config| config.motion.log_level.as_str());
    logging::init(level);

    let config = loaded.or_default_logged(SiteConfig::default());
    if let Err(err) = folio_core::content::validate_catalog() {
        tracing::error!(error = %err, "content catalog is inconsistent");
    }
    motion::install_runtime(&config.motion);

    tracing::info!(title = %config.site.title, "mounting portfolio");
    mount_to_body(move || view! { <App config=config /> });
}
