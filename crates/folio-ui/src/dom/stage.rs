//! Writes sequencer output to element styles

use folio_core::motion::{Stage, VisualState};
use web_sys::HtmlElement;

use crate::error::{DomError, describe};

/// [`Stage`] over live DOM elements
///
/// Only `opacity` and `transform` are touched, so layout never changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomStage;

impl DomStage {
    fn write(element: &HtmlElement, state: &VisualState) -> Result<(), DomError> {
        let style = element.style();
        style
            .set_property("opacity", &state.css_opacity())
            .map_err(|e| DomError::Style(describe(&e)))?;
        style
            .set_property("transform", &state.css_transform())
            .map_err(|e| DomError::Style(describe(&e)))
    }
}

impl Stage for DomStage {
    type Node = HtmlElement;

    fn apply(&self, node: &HtmlElement, state: &VisualState) {
        if let Err(err) = Self::write(node, state) {
            tracing::warn!(error = %err, "style write failed");
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use crate::dom::window;
    use crate::error::{DomError, Result};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_writes_opacity_and_transform() -> Result<()> {
        let document = window()?.document().ok_or(DomError::DocumentUnavailable)?;
        let element: HtmlElement = document
            .create_element("div")
            .map_err(|e| DomError::Style(describe(&e)))?
            .unchecked_into();

        let state = VisualState {
            opacity: 0.0,
            y: 100.0,
            ..VisualState::default()
        };
        DomStage.apply(&element, &state);

        let style = element.style();
        assert_eq!(style.get_property_value("opacity").ok().as_deref(), Some("0"));
        assert!(
            style
                .get_property_value("transform")
                .is_ok_and(|t| t.contains("100px"))
        );
        Ok(())
    }
}
