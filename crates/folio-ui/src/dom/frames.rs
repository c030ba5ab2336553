//! On-demand `requestAnimationFrame` loop
//!
//! Unlike a render loop that runs forever, this loop only schedules frames
//! while its callback reports more work, and is woken again with
//! [`FrameLoop::request`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::{DomError, Result, describe};

/// Type alias for the RAF closure slot
type FrameClosure = RefCell<Option<Closure<dyn FnMut(f64)>>>;

struct Inner {
    window: Window,
    closure: FrameClosure,
    request_id: Cell<Option<i32>>,
}

impl Inner {
    fn schedule(&self) -> Result<()> {
        let slot = self.closure.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| DomError::FrameRequest("frame loop stopped".to_string()))?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::FrameRequest(describe(&e)))?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                tracing::debug!(error = %describe(&err), "cancel animation frame failed");
            }
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Frame loop driving one section's sequencer
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    /// Creates an idle loop
    ///
    /// `on_frame` receives the frame timestamp in ms and returns whether
    /// another frame is needed.
    pub fn new<F>(window: &Window, mut on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let inner = Rc::new(Inner {
            window: window.clone(),
            closure: RefCell::new(None),
            request_id: Cell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.closure.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.request_id.set(None);
            if on_frame(timestamp) {
                if let Err(err) = inner.schedule() {
                    tracing::warn!(error = %err, "frame loop halted");
                }
            }
        }));

        Self { inner }
    }

    /// Schedules a frame unless one is already pending
    ///
    /// # Errors
    ///
    /// Returns [`DomError::FrameRequest`] if the loop was stopped or the
    /// browser refuses the request.
    pub fn request(&self) -> Result<()> {
        if self.is_pending() {
            return Ok(());
        }
        self.inner.schedule()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.request_id.get().is_some()
    }

    /// Cancels any pending frame and releases the callback
    pub fn stop(&self) {
        self.inner.cancel();
        self.inner.closure.borrow_mut().take();
    }
}
