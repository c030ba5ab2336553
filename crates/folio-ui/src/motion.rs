//! Per-section glue between Leptos, the DOM bindings and the sequencer
//!
//! A section mounts a [`SectionMotion`] from an effect, adopts its rendered
//! elements, installs reveals and scrubs, and tears everything down when the
//! owning component is cleaned up.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::config::MotionSection;
use folio_core::motion::{
    Ease, InitOutcome, IntersectOutcome, MotionRuntime, NodeId, Props, Reveal, ScrubBinding,
    ScrubId, Sequencer, TriggerId, init_motion,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::dom::{self, DomStage, FrameLoop, RevealObserver, ScrollListener};
use crate::error::{DomError, Result};

type SharedSequencer = Rc<RefCell<Sequencer<DomStage>>>;

/// Probes the browser and installs the process-wide motion runtime
pub fn install_runtime(config: &MotionSection) -> &'static MotionRuntime {
    let runtime = dom::window().map_or_else(
        |_| MotionRuntime::from_config(config, false, false),
        |window| {
            MotionRuntime::from_config(
                config,
                dom::observer_available(&window),
                dom::prefers_reduced_motion(&window),
            )
        },
    );
    let (installed, outcome) = init_motion(runtime);
    if outcome == InitOutcome::Initialized && installed.reveals_instantly() {
        tracing::info!(
            reduced_motion = installed.reduced_motion,
            observer_available = installed.observer_available,
            "content will be shown without scroll animation"
        );
    }
    installed
}

/// The installed runtime, or one probed on the spot with default settings
#[must_use]
pub fn current_runtime() -> MotionRuntime {
    folio_core::motion::runtime()
        .cloned()
        .unwrap_or_else(|| install_runtime(&MotionSection::default()).clone())
}

struct ScrubSource {
    id: ScrubId,
    range: Element,
}

/// Animation resources owned by one mounted section
pub struct SectionMotion {
    window: Window,
    runtime: MotionRuntime,
    sequencer: SharedSequencer,
    frames: FrameLoop,
    observers: Vec<RevealObserver>,
    scrubs: Rc<RefCell<Vec<ScrubSource>>>,
    scroll: Option<ScrollListener>,
}

impl SectionMotion {
    /// # Errors
    ///
    /// Returns [`DomError::WindowUnavailable`] outside a browser.
    pub fn mount(name: &str) -> Result<Self> {
        let window = dom::window()?;
        let runtime = current_runtime();
        let sequencer = Rc::new(RefCell::new(Sequencer::new(name, DomStage, &runtime)));

        let ticking: Weak<RefCell<Sequencer<DomStage>>> = Rc::downgrade(&sequencer);
        let frames = FrameLoop::new(&window, move |now| {
            ticking
                .upgrade()
                .is_some_and(|seq| seq.borrow_mut().tick(now))
        });

        Ok(Self {
            window,
            runtime,
            sequencer,
            frames,
            observers: Vec::new(),
            scrubs: Rc::new(RefCell::new(Vec::new())),
            scroll: None,
        })
    }

    #[must_use]
    pub const fn runtime(&self) -> &MotionRuntime {
        &self.runtime
    }

    pub fn adopt(&self, element: impl Into<HtmlElement>) -> NodeId {
        self.sequencer.borrow_mut().adopt(element.into())
    }

    /// Adopts every element child of `parent`, in document order
    pub fn adopt_children(&self, parent: &Element) -> Vec<NodeId> {
        let children = parent.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .map(|child| self.adopt(child))
            .collect()
    }

    /// Hides the reveal's targets and starts watching its trigger
    ///
    /// # Errors
    ///
    /// Propagates sequencer errors; the section should then fail open.
    pub fn reveal(&mut self, trigger: NodeId, reveal: Reveal<NodeId>) -> Result<()> {
        let id = reveal.install(&mut self.sequencer.borrow_mut(), trigger)?;
        self.watch(id);
        Ok(())
    }

    fn watch(&mut self, id: TriggerId) {
        let (element, spec) = {
            let seq = self.sequencer.borrow();
            if !seq.is_armed(id) {
                return;
            }
            let element = seq
                .trigger_node(id)
                .and_then(|node| seq.node(node))
                .cloned();
            (element, seq.trigger_spec(id))
        };
        let (Some(element), Some(spec)) = (element, spec) else {
            return;
        };

        let geometry = dom::geometry_of(&element, dom::viewport_height(&self.window));
        if self.sequencer.borrow_mut().catch_up(id, &geometry) == IntersectOutcome::Fired {
            self.wake();
            return;
        }

        let sequencer = Rc::downgrade(&self.sequencer);
        let frames = self.frames.clone();
        let observed = RevealObserver::observe(&element, &spec, move |sample| {
            let Some(seq) = sequencer.upgrade() else {
                return false;
            };
            let outcome = seq.borrow_mut().intersect(id, sample);
            if outcome == IntersectOutcome::Fired {
                if let Err(err) = frames.request() {
                    tracing::warn!(error = %err, "reveal could not start animating");
                }
            }
            outcome == IntersectOutcome::Pending
        });

        match observed {
            Ok(observer) => self.observers.push(observer),
            Err(err) => {
                tracing::warn!(error = %err, "observer unavailable");
                self.fail_open();
            }
        }
    }

    /// Binds a scrubbed property to the scroll position of `range`
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Motion`] for a rejected binding and
    /// [`DomError::Listener`] if the scroll listener cannot attach.
    pub fn scrub(&mut self, range: Element, binding: ScrubBinding<NodeId>) -> Result<()> {
        let id = self.sequencer.borrow_mut().bind_scrub(binding)?;
        self.scrubs.borrow_mut().push(ScrubSource { id, range });

        if self.scroll.is_none() {
            let window = self.window.clone();
            let sequencer = Rc::downgrade(&self.sequencer);
            let scrubs = Rc::clone(&self.scrubs);
            let frames = self.frames.clone();
            self.scroll = Some(ScrollListener::attach(&self.window, move || {
                if let Some(seq) = sequencer.upgrade() {
                    sample_scrubs(&window, &seq, &scrubs.borrow(), &frames);
                }
            })?);
        }

        sample_scrubs(&self.window, &self.sequencer, &self.scrubs.borrow(), &self.frames);
        Ok(())
    }

    /// Starts a retriggerable transition, e.g. for hover
    pub fn tween(&self, node: NodeId, props: Props, duration: f64, ease: Ease) {
        match self
            .sequencer
            .borrow_mut()
            .tween_to(node, props, duration, ease)
        {
            Ok(()) => self.wake(),
            Err(err) => tracing::debug!(error = %err, "transition skipped"),
        }
    }

    /// Shows everything in its final state
    pub fn fail_open(&self) {
        self.sequencer.borrow_mut().fail_open();
    }

    fn wake(&self) {
        if let Err(err) = self.frames.request() {
            tracing::warn!(error = %err, "animation frame unavailable");
        }
    }

    /// Disconnects observers, removes listeners and stops the frame loop
    pub fn teardown(mut self) {
        self.observers.clear();
        if let Some(listener) = self.scroll.take() {
            if let Err(err) = listener.remove() {
                tracing::warn!(error = %err, "scroll listener left attached");
            }
        }
        self.frames.stop();
        self.sequencer.borrow_mut().unmount();
    }
}

fn sample_scrubs(window: &Window, sequencer: &SharedSequencer, scrubs: &[ScrubSource], frames: &FrameLoop) {
    let viewport_height = dom::viewport_height(window);
    let needs_frames = {
        let mut seq = sequencer.borrow_mut();
        scrubs.iter().fold(false, |needs, source| {
            seq.scroll(source.id, &dom::geometry_of(&source.range, viewport_height)) || needs
        })
    };
    if needs_frames {
        if let Err(err) = frames.request() {
            tracing::warn!(error = %err, "scrub could not catch up");
        }
    }
}

/// A mounted section plus the node handles its setup returned
pub struct SectionHandle<T: 'static> {
    slot: StoredValue<Option<(SectionMotion, T)>, LocalStorage>,
}

impl<T: 'static> Clone for SectionHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SectionHandle<T> {}

impl<T: 'static> SectionHandle<T> {
    /// Runs `f` if the section is mounted
    pub fn with<U>(&self, f: impl FnOnce(&SectionMotion, &T) -> U) -> Option<U> {
        self.slot
            .try_with_value(|slot| slot.as_ref().map(|(motion, nodes)| f(motion, nodes)))
            .flatten()
    }
}

/// Mounts section motion once the component's elements exist
///
/// `setup` adopts elements and installs reveals. If it fails, whatever it
/// already hid is revealed at once and the section stays static. Everything
/// is torn down with the owning component.
pub fn use_section_motion<T, F>(name: &'static str, setup: F) -> SectionHandle<T>
where
    T: 'static,
    F: Fn(&mut SectionMotion) -> Result<T> + 'static,
{
    let slot = StoredValue::new_local(None::<(SectionMotion, T)>);

    Effect::new(move |_| {
        if slot.with_value(Option::is_some) {
            return;
        }
        let mut motion = match SectionMotion::mount(name) {
            Ok(motion) => motion,
            Err(err) => {
                tracing::warn!(section = name, error = %err, "motion unavailable");
                return;
            }
        };
        match setup(&mut motion) {
            Ok(nodes) => slot.set_value(Some((motion, nodes))),
            Err(err) => {
                tracing::warn!(section = name, error = %err, "section shown without animation");
                motion.fail_open();
                motion.teardown();
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|slot| {
            if let Some((motion, _)) = slot.take() {
                motion.teardown();
            }
        });
    });

    SectionHandle { slot }
}

/// Unwraps a rendered element or names the one that is missing
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] when `element` is `None`.
pub fn require<E: Into<HtmlElement>>(element: Option<E>, name: &'static str) -> Result<HtmlElement> {
    element.map(Into::into).ok_or(DomError::MissingElement(name))
}
