//! Reveal choreography for each page section
//!
//! A [`Reveal`] bundles the hidden starting state, the trigger anchor and the
//! steps that run on first intersection. [`Reveal::install`] wires all three
//! into a sequencer.

use super::ease::Ease;
use super::scrub::{ScrubBinding, ScrubRange};
use super::sequencer::{NodeId, Sequencer, Stage, TriggerId};
use super::timeline::Step;
use super::trigger::TriggerSpec;
use super::visual::{Props, VisualProp};
use crate::content::Placement;
use crate::result::Result;

/// A one-shot reveal for a group of nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal<N> {
    /// Starting states, applied in order before anything is observed
    pub initial: Vec<(Vec<N>, Props)>,
    /// Start anchor of the trigger element, e.g. `"top 80%"`
    pub start: &'static str,
    pub steps: Vec<Step<N>>,
}

impl Reveal<NodeId> {
    /// Applies the starting states and arms the trigger
    ///
    /// # Errors
    ///
    /// Propagates sequencer errors for unknown nodes, a malformed anchor, or a
    /// trigger that is already registered.
    pub fn install<S: Stage>(self, seq: &mut Sequencer<S>, trigger: NodeId) -> Result<TriggerId> {
        let spec = TriggerSpec::from_start(self.start)?;
        for (nodes, props) in &self.initial {
            seq.set_initial_state(nodes, props)?;
        }
        let steps = self.steps;
        seq.register(trigger, spec, move |seq, id| {
            if let Err(err) = seq.run_sequence(id, steps) {
                tracing::warn!(section = %seq.name(), error = %err, "reveal sequence rejected");
            }
        })
    }
}

/// Section heading: label, title and subtitle rise in one after another
#[must_use]
pub fn experience_header<N: Clone>(children: Vec<N>) -> Reveal<N> {
    Reveal {
        initial: vec![(children.clone(), Props::new().y(80.0).opacity(0.0))],
        start: "top 80%",
        steps: vec![
            Step::to(children, Props::new().y(0.0).opacity(1.0))
                .duration(1.0)
                .stagger(0.15)
                .ease(Ease::Power3Out),
        ],
    }
}

/// Timeline entry: the line draws down, the dot pops, then the card slides in
#[must_use]
pub fn timeline_item<N: Clone>(line: N, dot: N, content: N, placement: Placement) -> Reveal<N> {
    Reveal {
        initial: vec![
            (vec![line.clone()], Props::new().scale_y(0.0)),
            (vec![dot.clone()], Props::new().scale(0.0).opacity(0.0)),
            (
                vec![content.clone()],
                Props::new().opacity(0.0).x(placement.reveal_offset_x()),
            ),
        ],
        start: "top 75%",
        steps: vec![
            Step::to(vec![line], Props::new().scale_y(1.0))
                .duration(0.6)
                .ease(Ease::Power3Out),
            Step::to(vec![dot], Props::new().scale(1.0).opacity(1.0))
                .duration(0.4)
                .ease(Ease::back_out(2.0))
                .after_previous(-0.3),
            Step::to(vec![content], Props::new().opacity(1.0).x(0.0))
                .duration(0.8)
                .ease(Ease::Power3Out)
                .after_previous(-0.2),
        ],
    }
}

/// Projects heading: text rises in while the rule draws across
#[must_use]
pub fn projects_header<N: Clone>(children: Vec<N>, line: N) -> Reveal<N> {
    Reveal {
        initial: vec![
            (children.clone(), Props::new().y(100.0).opacity(0.0)),
            (vec![line.clone()], Props::new().scale_x(0.0)),
        ],
        start: "top 80%",
        steps: vec![
            Step::to(children, Props::new().y(0.0).opacity(1.0))
                .duration(1.0)
                .stagger(0.1)
                .ease(Ease::Power3Out),
            Step::to(vec![line], Props::new().scale_x(1.0))
                .duration(1.2)
                .ease(Ease::Power3InOut)
                .at(0.3),
        ],
    }
}

/// Project card rising in, delayed by its position in the grid
#[must_use]
pub fn project_card<N: Clone>(card: N, reveal_delay: f64) -> Reveal<N> {
    Reveal {
        initial: vec![(vec![card.clone()], Props::new().opacity(0.0).y(100.0))],
        start: "top 85%",
        steps: vec![
            Step::to(vec![card], Props::new().opacity(1.0).y(0.0))
                .duration(1.0)
                .delay(reveal_delay)
                .ease(Ease::Power3Out),
        ],
    }
}

/// Progress fill that grows with scroll through the timeline
///
/// # Errors
///
/// Never fails for the built-in anchors; the `Result` comes from parsing.
pub fn timeline_progress<N>(fill: N, lag_ms: f64) -> Result<ScrubBinding<N>> {
    Ok(
        ScrubBinding::new(ScrubRange::parse("top 60%", "bottom 40%")?, fill, VisualProp::ScaleY)
            .values(0.0, 1.0)
            .lag_ms(lag_ms),
    )
}
