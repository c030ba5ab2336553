//! One-time, process-wide motion setup
//!
//! Sections read the installed runtime when they mount. Installing happens
//! once, before the first section mounts; later calls keep the first
//! runtime.

use std::sync::OnceLock;

use super::tilt::TiltModel;
use crate::config::MotionSection;

/// Settings shared by every section's sequencer
#[derive(Debug, Clone, PartialEq)]
pub struct MotionRuntime {
    /// Whether the host can observe viewport intersections
    pub observer_available: bool,
    /// Reveal everything in its final state instead of animating
    pub reduced_motion: bool,
    pub scrub_lag_ms: f64,
    pub tilt: TiltModel,
}

impl Default for MotionRuntime {
    fn default() -> Self {
        Self {
            observer_available: true,
            reduced_motion: false,
            scrub_lag_ms: 1000.0,
            tilt: TiltModel::default(),
        }
    }
}

impl MotionRuntime {
    /// Builds a runtime from configuration plus what the host reported
    #[must_use]
    pub fn from_config(
        config: &MotionSection,
        observer_available: bool,
        prefers_reduced_motion: bool,
    ) -> Self {
        Self {
            observer_available,
            reduced_motion: config.respect_reduced_motion && prefers_reduced_motion,
            scrub_lag_ms: config.scrub_lag_ms,
            tilt: TiltModel::new(config.tilt_divisor, config.tilt_perspective),
        }
    }

    /// Whether sections should skip straight to their revealed state
    #[must_use]
    pub const fn reveals_instantly(&self) -> bool {
        self.reduced_motion || !self.observer_available
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    AlreadyInitialized,
}

static RUNTIME: OnceLock<MotionRuntime> = OnceLock::new();

/// Installs the process-wide runtime
///
/// Only the first call installs; later calls leave it untouched and report
/// [`InitOutcome::AlreadyInitialized`].
pub fn init_motion(runtime: MotionRuntime) -> (&'static MotionRuntime, InitOutcome) {
    let mut outcome = InitOutcome::AlreadyInitialized;
    let installed = RUNTIME.get_or_init(|| {
        outcome = InitOutcome::Initialized;
        runtime
    });

    match outcome {
        InitOutcome::Initialized => tracing::debug!(
            observer_available = installed.observer_available,
            reduced_motion = installed.reduced_motion,
            "motion runtime initialized"
        ),
        InitOutcome::AlreadyInitialized => {
            tracing::warn!("motion runtime already initialized, keeping the first settings");
        }
    }

    (installed, outcome)
}

/// The installed runtime, if [`init_motion`] has run
#[must_use]
pub fn runtime() -> Option<&'static MotionRuntime> {
    RUNTIME.get()
}
