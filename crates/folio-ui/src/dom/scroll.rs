//! Window scroll and resize listening for scrubbed properties

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Window};

use crate::error::{DomError, Result};

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Handle for a passive scroll + resize listener on the window
///
/// Resizes are forwarded undebounced: a resize moves every anchor, so the
/// scrubbed value must follow in the same frame.
pub struct ScrollListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Calls `on_change` on every scroll and resize of `window`
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Listener`] if attaching fails; any listener that
    /// was already attached is removed again.
    pub fn attach<F>(window: &Window, on_change: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let listener = Self {
            window: window.clone(),
            closure: Closure::<dyn FnMut()>::new(on_change),
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        for event in EVENTS {
            if let Err(err) = window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    listener.closure.as_ref().unchecked_ref(),
                    &options,
                )
            {
                let _ = listener.detach();
                return Err(DomError::listener("add", event, &err));
            }
        }
        Ok(listener)
    }

    /// Removes both listeners
    ///
    /// # Errors
    ///
    /// Returns the first removal failure; removal of the other listener is
    /// still attempted.
    pub fn remove(self) -> Result<()> {
        self.detach()
    }

    fn detach(&self) -> Result<()> {
        EVENTS
            .into_iter()
            .map(|event| {
                self.window
                    .remove_event_listener_with_callback(event, self.closure.as_ref().unchecked_ref())
                    .map_err(|err| DomError::listener("remove", event, &err))
            })
            .fold(Ok(()), |acc: Result<()>, next| acc.and(next))
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        // removing an absent listener is a no-op
        let _ = self.detach();
    }
}
