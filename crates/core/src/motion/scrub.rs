//! Continuous mapping from scroll position to a property value

use super::trigger::{Anchor, TriggerGeometry};
use super::visual::VisualProp;
use crate::error::Error;
use crate::result::Result;

/// Scroll span between two anchors on the same range element
///
/// ```
/// use folio_core::motion::{ScrubRange, TriggerGeometry};
///
/// let range = ScrubRange::parse("top 60%", "bottom 40%")?;
/// // element top sits exactly on the 60% line: progress starts at zero
/// assert_eq!(range.progress(&TriggerGeometry::new(600.0, 1000.0, 1000.0)), 0.0);
/// # Ok::<(), folio_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubRange {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrubRange {
    #[must_use]
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidAnchor`] if either anchor is malformed.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Scroll progress through the range, clamped to `[0, 1]`
    ///
    /// Linear in scroll offset: both anchor distances shrink one px per px
    /// scrolled, so the ratio below moves uniformly.
    #[must_use]
    pub fn progress(&self, geometry: &TriggerGeometry) -> f64 {
        let to_start = self.start.distance(geometry);
        let to_end = self.end.distance(geometry);
        let span = to_end - to_start;

        if !span.is_finite() || span <= 0.0 {
            // degenerate range: a step at the end anchor
            return if to_end <= 0.0 { 1.0 } else { 0.0 };
        }
        (-to_start / span).clamp(0.0, 1.0)
    }
}

/// A property driven by scroll progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubBinding<N> {
    pub range: ScrubRange,
    pub target: N,
    pub prop: VisualProp,
    /// Property value at progress 0
    pub from: f64,
    /// Property value at progress 1
    pub to: f64,
    /// Time the shown value takes to catch up; zero follows scroll exactly
    pub lag_ms: f64,
}

impl<N> ScrubBinding<N> {
    #[must_use]
    pub const fn new(range: ScrubRange, target: N, prop: VisualProp) -> Self {
        Self {
            range,
            target,
            prop,
            from: 0.0,
            to: 1.0,
            lag_ms: 0.0,
        }
    }

    #[must_use]
    pub const fn values(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    #[must_use]
    pub const fn lag_ms(mut self, lag_ms: f64) -> Self {
        self.lag_ms = lag_ms;
        self
    }

    /// Property value at `progress`
    #[must_use]
    pub fn value_at(&self, progress: f64) -> f64 {
        self.from + (self.to - self.from) * progress.clamp(0.0, 1.0)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.from.is_finite() && self.to.is_finite()) {
            return Err(Error::invalid_step("scrub values must be finite"));
        }
        if !(self.lag_ms.is_finite() && self.lag_ms >= 0.0) {
            return Err(Error::invalid_step(format!(
                "scrub lag must be zero or positive, got {}",
                self.lag_ms
            )));
        }
        Ok(())
    }
}

/// Shown progress chasing the scroll progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubFollower {
    pub shown: f64,
    pub target: f64,
    lag_ms: f64,
}

/// Distance below which the follower snaps onto its target
const SETTLE_EPSILON: f64 = 1e-4;

impl ScrubFollower {
    #[must_use]
    pub const fn new(initial: f64, lag_ms: f64) -> Self {
        Self {
            shown: initial,
            target: initial,
            lag_ms,
        }
    }

    /// Sets a new target; returns true if frames are needed to reach it
    pub fn retarget(&mut self, target: f64) -> bool {
        self.target = target;
        if self.lag_ms <= 0.0 {
            self.shown = target;
            return false;
        }
        !self.is_settled()
    }

    /// Moves the shown value toward the target over `dt_ms`
    ///
    /// Covers the fraction `dt / lag` of the remaining gap each frame, which
    /// closes most of the distance within one lag period.
    pub fn advance(&mut self, dt_ms: f64) {
        if self.lag_ms <= 0.0 {
            self.shown = self.target;
            return;
        }
        let step = (dt_ms.max(0.0) / self.lag_ms * 4.0).min(1.0);
        self.shown += (self.target - self.shown) * step;
        if (self.target - self.shown).abs() < SETTLE_EPSILON {
            self.shown = self.target;
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.target - self.shown).abs() < SETTLE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Timeline element 1000px tall in a 1000px viewport
    fn geometry_after_scroll(scrolled: f64) -> TriggerGeometry {
        TriggerGeometry::new(600.0 - scrolled, 1000.0, 1000.0)
    }

    #[test]
    fn test_progress_endpoints() -> Result<()> {
        let range = ScrubRange::parse("top 60%", "bottom 40%")?;
        // start: top at 600; end: bottom (top + 1000) at 400 => top at -600
        assert!(range.progress(&geometry_after_scroll(0.0)).abs() < 1e-12);
        assert!((range.progress(&geometry_after_scroll(1200.0)) - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_progress_is_linear_and_clamped() -> Result<()> {
        let range = ScrubRange::parse("top 60%", "bottom 40%")?;
        assert!((range.progress(&geometry_after_scroll(300.0)) - 0.25).abs() < 1e-12);
        assert!((range.progress(&geometry_after_scroll(600.0)) - 0.5).abs() < 1e-12);
        assert!(range.progress(&geometry_after_scroll(-400.0)).abs() < 1e-12);
        assert!((range.progress(&geometry_after_scroll(5000.0)) - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_degenerate_range_steps() -> Result<()> {
        let range = ScrubRange::parse("top 50%", "top 50%")?;
        assert!(range.progress(&TriggerGeometry::new(600.0, 100.0, 1000.0)).abs() < 1e-12);
        assert!((range.progress(&TriggerGeometry::new(400.0, 100.0, 1000.0)) - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_binding_value_maps_progress() -> Result<()> {
        let binding = ScrubBinding::new(
            ScrubRange::parse("top 60%", "bottom 40%")?,
            0_usize,
            VisualProp::ScaleY,
        )
        .values(0.5, 1.5);
        assert!((binding.value_at(0.0) - 0.5).abs() < 1e-12);
        assert!((binding.value_at(0.5) - 1.0).abs() < 1e-12);
        assert!((binding.value_at(2.0) - 1.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_binding_rejects_negative_lag() -> Result<()> {
        let binding = ScrubBinding::new(
            ScrubRange::parse("top 60%", "bottom 40%")?,
            0_usize,
            VisualProp::ScaleY,
        )
        .lag_ms(-1.0);
        assert!(binding.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_follower_without_lag_is_immediate() {
        let mut follower = ScrubFollower::new(0.0, 0.0);
        assert!(!follower.retarget(0.7));
        assert!((follower.shown - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_follower_with_lag_converges() {
        let mut follower = ScrubFollower::new(0.0, 1000.0);
        assert!(follower.retarget(1.0));
        follower.advance(16.0);
        assert!(follower.shown > 0.0 && follower.shown < 1.0);

        for _ in 0..200 {
            follower.advance(16.0);
        }
        assert!(follower.is_settled());
        assert!((follower.shown - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_follower_never_overshoots() {
        let mut follower = ScrubFollower::new(0.0, 100.0);
        follower.retarget(1.0);
        follower.advance(10_000.0);
        assert!((follower.shown - 1.0).abs() < f64::EPSILON);
    }
}
