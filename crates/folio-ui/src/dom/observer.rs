//! One-shot reveal observation over `IntersectionObserver`

use folio_core::motion::{IntersectionSample, TriggerSpec};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{DomError, Result, describe};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observer watching one trigger element against a reveal line
///
/// The root margin shrinks the viewport to the area above the line, so the
/// browser reports exactly the samples [`TriggerSpec::sample`] describes.
/// Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealObserver {
    /// Starts observing `target`
    ///
    /// `on_sample` returns whether the target should still be observed.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::ObserverFailed`] if the browser rejects the
    /// observer options.
    pub fn observe<F>(target: &Element, spec: &TriggerSpec, mut on_sample: F) -> Result<Self>
    where
        F: FnMut(IntersectionSample) -> bool + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                {
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if !on_sample(sample) {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&spec.root_margin());
        init.set_threshold(&JsValue::from_f64(spec.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| DomError::ObserverFailed(describe(&e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
