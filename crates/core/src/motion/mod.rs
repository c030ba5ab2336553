//! Scroll-driven motion: timelines, triggers, scrubbing and tilt
//!
//! Everything here is host-agnostic. A host adapts its rendering surface to
//! [`Stage`], feeds the sequencer viewport samples and frame times, and gets
//! complete [`VisualState`]s back through the stage.

pub mod choreography;
pub mod ease;
pub mod headless;
pub mod init;
pub mod scrub;
pub mod sequencer;
pub mod tilt;
pub mod timeline;
pub mod trigger;
pub mod visual;

pub use choreography::Reveal;
pub use ease::Ease;
pub use headless::{HeadlessStage, LayoutBox, SimulatedViewport};
pub use init::{InitOutcome, MotionRuntime, init_motion, runtime};
pub use scrub::{ScrubBinding, ScrubFollower, ScrubRange};
pub use sequencer::{
    IntersectOutcome, NodeId, RevealPhase, ScrubId, Sequencer, Stage, TriggerId,
};
pub use tilt::{Tilt, TiltModel};
pub use timeline::{Offset, ScheduledTween, Step, Timeline};
pub use trigger::{Anchor, Edge, IntersectionSample, TriggerGeometry, TriggerSpec};
pub use visual::{Props, VisualProp, VisualState};
