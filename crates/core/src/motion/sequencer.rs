//! One-shot scroll reveals, scrubbed properties and ad-hoc transitions
//!
//! A [`Sequencer`] belongs to exactly one section. The host adopts the
//! section's elements, registers triggers, and then forwards three kinds of
//! events: intersection samples ([`Sequencer::intersect`]), scroll samples
//! ([`Sequencer::scroll`]) and animation frames ([`Sequencer::tick`]). All
//! visual output goes through the [`Stage`] the sequencer was built with.
//!
//! Each reveal group moves `Hidden -> Revealing -> Revealed` and never back.
//!
//! ```
//! use folio_core::motion::{
//!     Ease, HeadlessStage, IntersectionSample, MotionRuntime, Props, RevealPhase, Sequencer,
//!     Step, TriggerSpec,
//! };
//!
//! let mut seq = Sequencer::new("header", HeadlessStage::new(), &MotionRuntime::default());
//! let title = seq.adopt("title");
//! seq.set_initial_state(&[title], &Props::new().opacity(0.0).y(80.0))?;
//!
//! let trigger = seq.register(title, TriggerSpec::from_start("top 80%")?, move |seq, id| {
//!     let steps = vec![Step::to(vec![title], Props::new().opacity(1.0).y(0.0))
//!         .duration(1.0)
//!         .ease(Ease::Power3Out)];
//!     let _ = seq.run_sequence(id, steps);
//! })?;
//!
//! seq.intersect(trigger, IntersectionSample { is_intersecting: true, ratio: 0.1 });
//! seq.tick(0.0);
//! seq.tick(1000.0);
//! assert_eq!(seq.phase(trigger), Some(RevealPhase::Revealed));
//! assert_eq!(seq.state(title).map(|s| s.opacity), Some(1.0));
//! # Ok::<(), folio_core::Error>(())
//! ```

use super::ease::Ease;
use super::init::MotionRuntime;
use super::scrub::{ScrubBinding, ScrubFollower};
use super::timeline::{ScheduledTween, Step, Timeline};
use super::trigger::{IntersectionSample, TriggerGeometry, TriggerSpec};
use super::visual::{Props, VisualProp, VisualState};
use crate::error::Error;
use crate::result::Result;

/// Longest frame gap fed to scrub smoothing, ms
const MAX_FRAME_MS: f64 = 100.0;

/// Host rendering environment
///
/// The sequencer never reads visual state back from the host; it keeps its
/// own copy and pushes complete states through [`Stage::apply`].
pub trait Stage {
    type Node;

    fn apply(&self, node: &Self::Node, state: &VisualState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrubId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Revealing,
    Revealed,
}

/// What the host should do after forwarding an intersection sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectOutcome {
    /// The reveal fired; stop observing this trigger
    Fired,
    /// Threshold not reached yet; keep observing
    Pending,
    /// Trigger already fired, unknown, or the sequencer is unmounted
    Ignored,
}

type RevealCallback<S> = Box<dyn FnOnce(&mut Sequencer<S>, TriggerId)>;

struct NodeSlot<N> {
    node: N,
    state: VisualState,
}

struct TriggerSlot<S: Stage> {
    node: NodeId,
    spec: TriggerSpec,
    phase: RevealPhase,
    callback: Option<RevealCallback<S>>,
}

struct ActiveTween {
    tween: ScheduledTween<NodeId>,
    /// Captured when the playhead first reaches the tween
    from: Option<Props>,
    done: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RunOwner {
    Reveal(TriggerId),
    Transition,
}

struct Run {
    owner: RunOwner,
    /// Frame time (ms) the run started on; set by the first tick
    origin_ms: Option<f64>,
    tweens: Vec<ActiveTween>,
}

impl Run {
    fn new(owner: RunOwner, timeline: Timeline<NodeId>) -> Self {
        Self {
            owner,
            origin_ms: None,
            tweens: timeline
                .into_tweens()
                .into_iter()
                .map(|tween| ActiveTween {
                    tween,
                    from: None,
                    done: false,
                })
                .collect(),
        }
    }

    fn is_done(&self) -> bool {
        self.tweens.iter().all(|t| t.done)
    }
}

struct ScrubSlot {
    binding: ScrubBinding<NodeId>,
    follower: ScrubFollower,
}

/// Animation state for one section
pub struct Sequencer<S: Stage> {
    name: String,
    stage: S,
    nodes: Vec<NodeSlot<S::Node>>,
    triggers: Vec<TriggerSlot<S>>,
    runs: Vec<Run>,
    scrubs: Vec<Option<ScrubSlot>>,
    /// Skip animation and jump straight to final states
    instant: bool,
    detached: bool,
    last_tick_ms: Option<f64>,
}

impl<S: Stage> Sequencer<S> {
    pub fn new(name: impl Into<String>, stage: S, runtime: &MotionRuntime) -> Self {
        let name = name.into();
        let instant = runtime.reveals_instantly();
        tracing::debug!(section = %name, instant, "sequencer mounted");
        Self {
            name,
            stage,
            nodes: Vec::new(),
            triggers: Vec::new(),
            runs: Vec::new(),
            scrubs: Vec::new(),
            instant,
            detached: false,
            last_tick_ms: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn stage(&self) -> &S {
        &self.stage
    }

    /// Takes ownership of a host node; its state starts as the identity
    pub fn adopt(&mut self, node: S::Node) -> NodeId {
        self.nodes.push(NodeSlot {
            node,
            state: VisualState::default(),
        });
        NodeId(self.nodes.len().saturating_sub(1))
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&S::Node> {
        self.nodes.get(id.0).map(|slot| &slot.node)
    }

    /// Last state pushed to the stage for `id`
    #[must_use]
    pub fn state(&self, id: NodeId) -> Option<VisualState> {
        self.nodes.get(id.0).map(|slot| slot.state)
    }

    #[must_use]
    pub fn phase(&self, id: TriggerId) -> Option<RevealPhase> {
        self.triggers.get(id.0).map(|slot| slot.phase)
    }

    /// Reveal line and threshold a trigger was registered with
    #[must_use]
    pub fn trigger_spec(&self, id: TriggerId) -> Option<TriggerSpec> {
        self.triggers.get(id.0).map(|slot| slot.spec)
    }

    /// Node a trigger observes
    #[must_use]
    pub fn trigger_node(&self, id: TriggerId) -> Option<NodeId> {
        self.triggers.get(id.0).map(|slot| slot.node)
    }

    /// Whether a trigger is still waiting for its first intersection
    #[must_use]
    pub fn is_armed(&self, id: TriggerId) -> bool {
        !self.detached
            && self
                .triggers
                .get(id.0)
                .is_some_and(|slot| slot.callback.is_some())
    }

    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.detached
    }

    #[must_use]
    pub const fn reveals_instantly(&self) -> bool {
        self.instant
    }

    /// Whether further frames would change anything
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.detached
            && (!self.runs.is_empty()
                || self
                    .scrubs
                    .iter()
                    .flatten()
                    .any(|slot| !slot.follower.is_settled()))
    }

    /// Applies a starting state to `nodes` immediately
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] after unmount and [`Error::UnknownNode`]
    /// if any node was not adopted; nothing is applied in either case.
    pub fn set_initial_state(&mut self, nodes: &[NodeId], props: &Props) -> Result<()> {
        self.ensure_attached()?;
        self.ensure_nodes(nodes.iter().copied())?;
        for id in nodes {
            if let Some(slot) = self.nodes.get_mut(id.0) {
                slot.state.merge(props);
                self.stage.apply(&slot.node, &slot.state);
            }
        }
        Ok(())
    }

    /// Arms a one-shot reveal on `trigger`
    ///
    /// `on_first_intersect` runs exactly once, on the first sample that
    /// meets `spec`. When the sequencer reveals instantly it runs right away.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] after unmount, [`Error::UnknownNode`] for a
    /// node that was not adopted, and [`Error::DuplicateTrigger`] if the node
    /// already has a trigger.
    pub fn register<F>(
        &mut self,
        trigger: NodeId,
        spec: TriggerSpec,
        on_first_intersect: F,
    ) -> Result<TriggerId>
    where
        F: FnOnce(&mut Self, TriggerId) + 'static,
    {
        self.ensure_attached()?;
        self.ensure_nodes(std::iter::once(trigger))?;
        if self.triggers.iter().any(|slot| slot.node == trigger) {
            tracing::warn!(section = %self.name, node = trigger.0, "trigger registered twice");
            return Err(Error::DuplicateTrigger { id: trigger.0 });
        }

        self.triggers.push(TriggerSlot {
            node: trigger,
            spec,
            phase: RevealPhase::Hidden,
            callback: Some(Box::new(on_first_intersect)),
        });
        let id = TriggerId(self.triggers.len().saturating_sub(1));

        if self.instant {
            self.fire(id);
        }
        Ok(id)
    }

    /// Forwards an observer sample for `id`
    pub fn intersect(&mut self, id: TriggerId, sample: IntersectionSample) -> IntersectOutcome {
        if self.detached {
            return IntersectOutcome::Ignored;
        }
        let Some(slot) = self.triggers.get(id.0) else {
            return IntersectOutcome::Ignored;
        };
        if slot.callback.is_none() {
            return IntersectOutcome::Ignored;
        }
        if !slot.spec.is_met_by(&sample) {
            return IntersectOutcome::Pending;
        }
        if self.fire(id) {
            IntersectOutcome::Fired
        } else {
            IntersectOutcome::Ignored
        }
    }

    /// Samples `geometry` against a trigger's spec and forwards the result
    pub fn intersect_geometry(&mut self, id: TriggerId, geometry: &TriggerGeometry) -> IntersectOutcome {
        match self.trigger_spec(id) {
            Some(spec) => self.intersect(id, spec.sample(geometry)),
            None => IntersectOutcome::Ignored,
        }
    }

    /// Fires an armed trigger whose start line is already behind the viewer
    ///
    /// Covers pages loaded or restored mid-scroll, where the observer never
    /// sees the element enter.
    pub fn catch_up(&mut self, id: TriggerId, geometry: &TriggerGeometry) -> IntersectOutcome {
        if !self.is_armed(id) {
            return IntersectOutcome::Ignored;
        }
        match self.trigger_spec(id) {
            Some(spec) if spec.is_passed(geometry) => {
                if self.fire(id) {
                    IntersectOutcome::Fired
                } else {
                    IntersectOutcome::Ignored
                }
            }
            Some(_) => IntersectOutcome::Pending,
            None => IntersectOutcome::Ignored,
        }
    }

    fn fire(&mut self, id: TriggerId) -> bool {
        let Some(callback) = self
            .triggers
            .get_mut(id.0)
            .and_then(|slot| slot.callback.take())
        else {
            return false;
        };
        tracing::debug!(section = %self.name, trigger = id.0, "reveal triggered");
        callback(self, id);
        true
    }

    /// Starts the reveal timeline for `id`
    ///
    /// Returns `Ok(false)` without restarting anything if the group has
    /// already left [`RevealPhase::Hidden`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] after unmount, [`Error::UnknownTrigger`],
    /// [`Error::UnknownNode`] for unadopted targets, and
    /// [`Error::InvalidStep`] for bad timings.
    pub fn run_sequence(&mut self, id: TriggerId, steps: Vec<Step<NodeId>>) -> Result<bool> {
        self.ensure_attached()?;
        let phase = self
            .phase(id)
            .ok_or(Error::UnknownTrigger { id: id.0 })?;
        if phase != RevealPhase::Hidden {
            return Ok(false);
        }
        self.ensure_nodes(steps.iter().flat_map(|step| step.targets.iter().copied()))?;
        let timeline = Timeline::compose(steps)?;

        if self.instant || timeline.is_empty() {
            self.settle(timeline.into_tweens());
            self.set_phase(id, RevealPhase::Revealed);
        } else {
            tracing::debug!(
                section = %self.name,
                trigger = id.0,
                seconds = timeline.duration(),
                "reveal sequence started"
            );
            self.runs.push(Run::new(RunOwner::Reveal(id), timeline));
            self.set_phase(id, RevealPhase::Revealing);
        }
        Ok(true)
    }

    /// Transitions `node` towards `props`, overwriting in-flight
    /// transitions of the same properties on that node
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] after unmount, [`Error::UnknownNode`], or
    /// [`Error::InvalidStep`] for bad timings.
    pub fn tween_to(&mut self, node: NodeId, props: Props, duration: f64, ease: Ease) -> Result<()> {
        self.ensure_attached()?;
        self.ensure_nodes(std::iter::once(node))?;
        let timeline = Timeline::compose(vec![Step::to(vec![node], props).duration(duration).ease(ease)])?;

        for run in &mut self.runs {
            for active in run
                .tweens
                .iter_mut()
                .filter(|a| !a.done && a.tween.target == node)
            {
                for tween in timeline.tweens() {
                    for (prop, _) in tween.to.iter() {
                        active.tween.to.remove(prop);
                    }
                }
                if active.tween.to.is_empty() {
                    active.done = true;
                }
            }
        }

        if self.instant {
            self.settle(timeline.into_tweens());
        } else {
            self.runs.push(Run::new(RunOwner::Transition, timeline));
        }
        Ok(())
    }

    /// Binds a property of `binding.target` to scroll progress
    ///
    /// The target immediately takes its progress-0 value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] after unmount, [`Error::UnknownNode`], or
    /// [`Error::InvalidStep`] for non-finite values or a negative lag.
    pub fn bind_scrub(&mut self, binding: ScrubBinding<NodeId>) -> Result<ScrubId> {
        self.ensure_attached()?;
        self.ensure_nodes(std::iter::once(binding.target))?;
        binding.validate()?;

        let lag = if self.instant { 0.0 } else { binding.lag_ms };
        let binding = binding.lag_ms(lag);
        self.write_prop(binding.target, binding.prop, binding.value_at(0.0));

        self.scrubs.push(Some(ScrubSlot {
            binding,
            follower: ScrubFollower::new(0.0, lag),
        }));
        Ok(ScrubId(self.scrubs.len().saturating_sub(1)))
    }

    /// Detaches a scrub binding; returns whether it was bound
    pub fn unbind_scrub(&mut self, id: ScrubId) -> bool {
        self.scrubs
            .get_mut(id.0)
            .and_then(Option::take)
            .is_some()
    }

    /// Forwards a scroll or resize sample for a scrub binding
    ///
    /// Returns true if frames are needed to finish catching up.
    pub fn scroll(&mut self, id: ScrubId, geometry: &TriggerGeometry) -> bool {
        if self.detached {
            return false;
        }
        let Some(slot) = self.scrubs.get_mut(id.0).and_then(Option::as_mut) else {
            return false;
        };
        let progress = slot.binding.range.progress(geometry);
        let needs_frames = slot.follower.retarget(progress);
        if !needs_frames {
            let (target, prop, value) = (
                slot.binding.target,
                slot.binding.prop,
                slot.binding.value_at(slot.follower.shown),
            );
            self.write_prop(target, prop, value);
        }
        needs_frames
    }

    /// Advances everything to frame time `now_ms`
    ///
    /// Returns true while more frames are needed. Once it returns false the
    /// frame clock restarts, so the next tick after an idle gap advances
    /// scrub smoothing by zero time.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.detached {
            return false;
        }
        let dt_ms = self
            .last_tick_ms
            .map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_FRAME_MS));
        self.last_tick_ms = Some(now_ms);

        let mut touched = Vec::new();

        for run in &mut self.runs {
            let origin = *run.origin_ms.get_or_insert(now_ms);
            let time = (now_ms - origin).max(0.0) / 1000.0;

            for active in run.tweens.iter_mut().filter(|a| !a.done) {
                if time < active.tween.start {
                    continue;
                }
                let Some(slot) = self.nodes.get_mut(active.tween.target.0) else {
                    active.done = true;
                    continue;
                };
                if active.from.is_none() {
                    active.from = Some(slot.state.snapshot(&active.tween.to));
                }
                let progress = active.tween.progress(time);
                let eased = active.tween.ease.apply(progress);
                for (prop, to) in active.tween.to.iter() {
                    let from = active
                        .from
                        .as_ref()
                        .and_then(|f| f.get(prop))
                        .unwrap_or(to);
                    let value = if progress >= 1.0 {
                        to
                    } else {
                        from + (to - from) * eased
                    };
                    slot.state.set(prop, value);
                }
                if progress >= 1.0 {
                    active.done = true;
                }
                touched.push(active.tween.target);
            }
        }

        let finished: Vec<TriggerId> = self
            .runs
            .iter()
            .filter(|run| run.is_done())
            .filter_map(|run| match run.owner {
                RunOwner::Reveal(id) => Some(id),
                RunOwner::Transition => None,
            })
            .collect();
        self.runs.retain(|run| !run.is_done());
        for id in finished {
            tracing::debug!(section = %self.name, trigger = id.0, "reveal finished");
            self.set_phase(id, RevealPhase::Revealed);
        }

        for slot in self.scrubs.iter_mut().flatten() {
            if slot.follower.is_settled() {
                continue;
            }
            slot.follower.advance(dt_ms);
            if let Some(node) = self.nodes.get_mut(slot.binding.target.0) {
                node.state
                    .set(slot.binding.prop, slot.binding.value_at(slot.follower.shown));
                touched.push(slot.binding.target);
            }
        }

        touched.sort_unstable();
        touched.dedup();
        for id in touched {
            if let Some(slot) = self.nodes.get(id.0) {
                self.stage.apply(&slot.node, &slot.state);
            }
        }

        let animating = self.is_animating();
        if !animating {
            self.last_tick_ms = None;
        }
        animating
    }

    /// Shows every group in its final state and stops animating
    ///
    /// Used when the host cannot observe the viewport. Armed triggers fire
    /// immediately; running timelines jump to their end.
    pub fn fail_open(&mut self) {
        if self.detached {
            return;
        }
        tracing::warn!(section = %self.name, "revealing without animation");
        self.instant = true;

        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            let remaining = run
                .tweens
                .into_iter()
                .filter(|a| !a.done)
                .map(|a| a.tween)
                .collect();
            self.settle(remaining);
            if let RunOwner::Reveal(id) = run.owner {
                self.set_phase(id, RevealPhase::Revealed);
            }
        }

        let armed: Vec<TriggerId> = (0..self.triggers.len())
            .map(TriggerId)
            .filter(|id| self.is_armed(*id))
            .collect();
        for id in armed {
            self.fire(id);
        }

        let mut snapped = Vec::new();
        for slot in self.scrubs.iter_mut().flatten() {
            slot.follower.advance(f64::INFINITY);
            snapped.push((
                slot.binding.target,
                slot.binding.prop,
                slot.binding.value_at(slot.follower.shown),
            ));
        }
        for (target, prop, value) in snapped {
            self.write_prop(target, prop, value);
        }
    }

    /// Drops every trigger, timeline and binding; later events are ignored
    pub fn unmount(&mut self) {
        if self.detached {
            return;
        }
        self.triggers.clear();
        self.runs.clear();
        self.scrubs.clear();
        self.detached = true;
        tracing::debug!(section = %self.name, "sequencer unmounted");
    }

    fn ensure_attached(&self) -> Result<()> {
        if self.detached {
            Err(Error::Detached)
        } else {
            Ok(())
        }
    }

    fn ensure_nodes(&self, mut ids: impl Iterator<Item = NodeId>) -> Result<()> {
        match ids.find(|id| id.0 >= self.nodes.len()) {
            Some(missing) => Err(Error::UnknownNode { id: missing.0 }),
            None => Ok(()),
        }
    }

    fn set_phase(&mut self, id: TriggerId, phase: RevealPhase) {
        if let Some(slot) = self.triggers.get_mut(id.0) {
            slot.phase = phase;
        }
    }

    fn write_prop(&mut self, id: NodeId, prop: VisualProp, value: f64) {
        if let Some(slot) = self.nodes.get_mut(id.0) {
            slot.state.set(prop, value);
            self.stage.apply(&slot.node, &slot.state);
        }
    }

    /// Applies final values in schedule order, one stage write per node
    fn settle(&mut self, tweens: Vec<ScheduledTween<NodeId>>) {
        let mut touched = Vec::new();
        for tween in tweens {
            if let Some(slot) = self.nodes.get_mut(tween.target.0) {
                slot.state.merge(&tween.to);
                touched.push(tween.target);
            }
        }
        touched.sort_unstable();
        touched.dedup();
        for id in touched {
            if let Some(slot) = self.nodes.get(id.0) {
                self.stage.apply(&slot.node, &slot.state);
            }
        }
    }
}

impl<S: Stage> Drop for Sequencer<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
