//! Thin bindings over the browser APIs the motion layer needs

pub mod frames;
pub mod observer;
pub mod scroll;
pub mod stage;

use folio_core::config::SiteSection;
use folio_core::motion::TriggerGeometry;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::error::{DomError, Result, describe};

pub use frames::FrameLoop;
pub use observer::RevealObserver;
pub use scroll::ScrollListener;
pub use stage::DomStage;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

/// Inner height of the viewport in px, zero if it cannot be read
#[must_use]
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .filter(|h| h.is_finite())
        .unwrap_or(0.0)
}

/// Where `element` currently sits relative to the viewport
#[must_use]
pub fn geometry_of(element: &Element, viewport_height: f64) -> TriggerGeometry {
    let rect = element.get_bounding_client_rect();
    TriggerGeometry::new(rect.top(), rect.height(), viewport_height)
}

/// Whether the browser can observe viewport intersections
#[must_use]
pub fn observer_available(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Whether the user asked the OS to minimize motion
#[must_use]
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Writes the site title and `<meta name="description">`
///
/// The meta tag is created in `<head>` when the page does not carry one.
///
/// # Errors
///
/// Returns [`DomError::Head`] if the tag cannot be found, created or written.
pub fn apply_site_meta(document: &Document, site: &SiteSection) -> Result<()> {
    document.set_title(&site.title);

    let existing = document
        .query_selector("meta[name=\"description\"]")
        .map_err(|e| DomError::Head(describe(&e)))?;
    let meta = match existing {
        Some(meta) => meta,
        None => {
            let meta = document
                .create_element("meta")
                .map_err(|e| DomError::Head(describe(&e)))?;
            meta.set_attribute("name", "description")
                .map_err(|e| DomError::Head(describe(&e)))?;
            document
                .head()
                .ok_or(DomError::MissingElement("head"))?
                .append_child(&meta)
                .map_err(|e| DomError::Head(describe(&e)))?;
            meta
        }
    };
    meta.set_attribute("content", &site.description)
        .map_err(|e| DomError::Head(describe(&e)))
}
