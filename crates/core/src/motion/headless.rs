//! In-memory stage and viewport for driving sequencers without a browser
//!
//! Used by tests and by hosts that cannot observe the viewport at all.

use std::cell::{Cell, RefCell};

use super::sequencer::Stage;
use super::trigger::TriggerGeometry;
use super::visual::VisualState;

struct Written<N> {
    node: N,
    state: VisualState,
    writes: usize,
}

/// Stage that keeps the latest state written to each node
///
/// Memory grows with the number of distinct nodes, not with the number of
/// frames.
pub struct HeadlessStage<N> {
    written: RefCell<Vec<Written<N>>>,
    total: Cell<usize>,
}

impl<N> std::fmt::Debug for HeadlessStage<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessStage")
            .field("nodes", &self.written.borrow().len())
            .field("writes", &self.total.get())
            .finish()
    }
}

impl<N> Default for HeadlessStage<N> {
    fn default() -> Self {
        Self {
            written: RefCell::new(Vec::new()),
            total: Cell::new(0),
        }
    }
}

impl<N> HeadlessStage<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes so far, across all nodes
    #[must_use]
    pub fn apply_count(&self) -> usize {
        self.total.get()
    }
}

impl<N: PartialEq> HeadlessStage<N> {
    #[must_use]
    pub fn last_applied(&self, node: &N) -> Option<VisualState> {
        self.written
            .borrow()
            .iter()
            .find_map(|w| (w.node == *node).then_some(w.state))
    }

    /// Number of writes to `node`
    #[must_use]
    pub fn writes_to(&self, node: &N) -> usize {
        self.written
            .borrow()
            .iter()
            .find_map(|w| (w.node == *node).then_some(w.writes))
            .unwrap_or(0)
    }

    /// Number of distinct nodes written so far
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.written.borrow().len()
    }
}

impl<N: Clone + PartialEq> Stage for HeadlessStage<N> {
    type Node = N;

    fn apply(&self, node: &N, state: &VisualState) {
        self.total.set(self.total.get().saturating_add(1));
        let mut written = self.written.borrow_mut();
        match written.iter_mut().find(|w| w.node == *node) {
            Some(entry) => {
                entry.state = *state;
                entry.writes = entry.writes.saturating_add(1);
            }
            None => written.push(Written {
                node: node.clone(),
                state: *state,
                writes: 1,
            }),
        }
    }
}

/// An element's box in document coordinates, px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub top: f64,
    pub height: f64,
}

impl LayoutBox {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// A scrollable viewport over a laid-out document
///
/// ```
/// use folio_core::motion::{LayoutBox, SimulatedViewport};
///
/// let mut viewport = SimulatedViewport::new(800.0);
/// viewport.scroll_to(500.0);
/// let geometry = viewport.geometry(&LayoutBox::new(1200.0, 300.0));
/// assert_eq!(geometry.top, 700.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedViewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl SimulatedViewport {
    #[must_use]
    pub const fn new(height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            height,
        }
    }

    pub const fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// Changes the viewport height, as a window resize would
    pub const fn resize(&mut self, height: f64) {
        self.height = height;
    }

    /// Where `element` sits relative to the viewport right now
    #[must_use]
    pub fn geometry(&self, element: &LayoutBox) -> TriggerGeometry {
        TriggerGeometry::new(element.top - self.scroll_y, element.height, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_keeps_latest_state_per_node() {
        let stage = HeadlessStage::new();
        stage.apply(&"a", &VisualState::default());
        stage.apply(
            &"a",
            &VisualState {
                opacity: 0.0,
                ..VisualState::default()
            },
        );
        stage.apply(&"b", &VisualState::default());

        assert_eq!(stage.apply_count(), 3);
        assert_eq!(stage.node_count(), 2);
        assert_eq!(stage.writes_to(&"a"), 2);
        assert_eq!(stage.last_applied(&"a").map(|s| s.opacity), Some(0.0));
        assert_eq!(stage.last_applied(&"c"), None);
    }

    #[test]
    fn test_repeated_frames_do_not_grow_storage() {
        let stage = HeadlessStage::new();
        for _ in 0..1000 {
            stage.apply(&"fill", &VisualState::default());
        }
        assert_eq!(stage.node_count(), 1);
        assert_eq!(stage.apply_count(), 1000);
        assert_eq!(stage.writes_to(&"fill"), 1000);
    }

    #[test]
    fn test_viewport_resize_changes_geometry() {
        let mut viewport = SimulatedViewport::new(1000.0);
        let element = LayoutBox::new(900.0, 100.0);
        assert_eq!(viewport.geometry(&element).viewport_height, 1000.0);
        viewport.resize(600.0);
        assert_eq!(viewport.geometry(&element).viewport_height, 600.0);
    }
}
