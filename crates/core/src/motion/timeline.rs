//! Composition of ordered animation steps into one schedule
//!
//! Steps are laid out in listed order. By default a step starts where the
//! previous one ended; an offset shifts that start, and a negative offset
//! overlaps the two. A step with several targets staggers them.
//!
//! ```
//! use folio_core::motion::{Ease, Props, Step, Timeline};
//!
//! let timeline = Timeline::compose(vec![
//!     Step::to(vec!["line"], Props::new().scale_y(1.0)).duration(0.6),
//!     Step::to(vec!["dot"], Props::new().scale(1.0))
//!         .duration(0.4)
//!         .ease(Ease::back_out(2.0))
//!         .after_previous(-0.3),
//! ])?;
//! assert!((timeline.duration() - 0.7).abs() < 1e-9);
//! # Ok::<(), folio_core::Error>(())
//! ```

use super::ease::Ease;
use super::visual::Props;
use crate::error::Error;
use crate::result::Result;

/// Where a step starts, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Relative to the end of the previous step; negative values overlap
    AfterPrevious(f64),
    /// Absolute position from the start of the timeline
    At(f64),
}

impl Default for Offset {
    fn default() -> Self {
        Self::AfterPrevious(0.0)
    }
}

/// One transition applied to a set of targets
#[derive(Debug, Clone, PartialEq)]
pub struct Step<N> {
    pub targets: Vec<N>,
    pub to: Props,
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
    pub offset: Offset,
    /// Seconds between consecutive targets
    pub stagger: f64,
    /// Seconds added on top of the offset
    pub delay: f64,
}

impl<N> Step<N> {
    /// A half-second step towards `to` with the default ease
    #[must_use]
    pub fn to(targets: Vec<N>, to: Props) -> Self {
        Self {
            targets,
            to,
            duration: 0.5,
            ease: Ease::default(),
            offset: Offset::default(),
            stagger: 0.0,
            delay: 0.0,
        }
    }

    #[must_use]
    pub const fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    #[must_use]
    pub const fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub const fn after_previous(mut self, seconds: f64) -> Self {
        self.offset = Offset::AfterPrevious(seconds);
        self
    }

    #[must_use]
    pub const fn at(mut self, seconds: f64) -> Self {
        self.offset = Offset::At(seconds);
        self
    }

    #[must_use]
    pub const fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    #[must_use]
    pub const fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    fn validate(&self, position: usize) -> Result<()> {
        let timings = [
            ("duration", self.duration),
            ("stagger", self.stagger),
            ("delay", self.delay),
        ];
        for (name, value) in timings {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_step(format!(
                    "step {position}: {name} must be a finite, non-negative number of seconds, got {value}"
                )));
            }
        }
        let offset = match self.offset {
            Offset::AfterPrevious(v) | Offset::At(v) => v,
        };
        if !offset.is_finite() {
            return Err(Error::invalid_step(format!(
                "step {position}: offset must be finite, got {offset}"
            )));
        }
        if self.to.iter().any(|(_, v)| !v.is_finite()) {
            return Err(Error::invalid_step(format!(
                "step {position}: target values must be finite"
            )));
        }
        Ok(())
    }
}

/// A single target's transition placed on the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTween<N> {
    pub target: N,
    pub to: Props,
    /// Seconds from the start of the timeline
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
    /// Index of the step this tween came from
    pub step: usize,
}

impl<N> ScheduledTween<N> {
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Linear progress at `time`, clamped to `[0, 1]`
    #[must_use]
    pub fn progress(&self, time: f64) -> f64 {
        if time < self.start {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            ((time - self.start) / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// Composed schedule, sorted by start time (ties keep listed order)
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<N> {
    tweens: Vec<ScheduledTween<N>>,
    duration: f64,
}

impl<N: Clone> Timeline<N> {
    /// Lays out `steps` in listed order
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] when a timing is negative or not finite,
    /// or a target value is not finite.
    pub fn compose(steps: Vec<Step<N>>) -> Result<Self> {
        let mut tweens = Vec::new();
        let mut previous_end = 0.0_f64;
        let mut duration = 0.0_f64;

        for (position, step) in steps.into_iter().enumerate() {
            step.validate(position)?;

            let anchor = match step.offset {
                Offset::AfterPrevious(offset) => previous_end + offset,
                Offset::At(at) => at,
            };
            let start = (anchor + step.delay).max(0.0);

            let mut step_end = start;
            let mut lead = 0.0_f64;
            for target in step.targets {
                let tween = ScheduledTween {
                    target,
                    to: step.to.clone(),
                    start: start + lead,
                    duration: step.duration,
                    ease: step.ease,
                    step: position,
                };
                step_end = step_end.max(tween.end());
                tweens.push(tween);
                lead += step.stagger;
            }

            previous_end = step_end;
            duration = duration.max(step_end);
        }

        // stable: equal starts keep their listed order
        tweens.sort_by(|a, b| a.start.total_cmp(&b.start));

        Ok(Self { tweens, duration })
    }
}

impl<N> Timeline<N> {
    /// Seconds until the last tween settles
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn tweens(&self) -> &[ScheduledTween<N>] {
        &self.tweens
    }

    #[must_use]
    pub fn into_tweens(self) -> Vec<ScheduledTween<N>> {
        self.tweens
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts(timeline: &Timeline<&'static str>) -> Vec<(&'static str, f64)> {
        timeline
            .tweens()
            .iter()
            .map(|t| (t.target, (t.start * 1000.0).round() / 1000.0))
            .collect()
    }

    #[test]
    fn test_sequential_steps_chain() -> Result<()> {
        let timeline = Timeline::compose(vec![
            Step::to(vec!["a"], Props::new().opacity(1.0)).duration(1.0),
            Step::to(vec!["b"], Props::new().opacity(1.0)).duration(0.5),
        ])?;
        assert_eq!(starts(&timeline), vec![("a", 0.0), ("b", 1.0)]);
        assert!((timeline.duration() - 1.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_negative_offsets_overlap() -> Result<()> {
        let timeline = Timeline::compose(vec![
            Step::to(vec!["line"], Props::new().scale_y(1.0)).duration(0.6),
            Step::to(vec!["dot"], Props::new().scale(1.0))
                .duration(0.4)
                .after_previous(-0.3),
            Step::to(vec!["content"], Props::new().x(0.0))
                .duration(0.8)
                .after_previous(-0.2),
        ])?;
        assert_eq!(
            starts(&timeline),
            vec![("line", 0.0), ("dot", 0.3), ("content", 0.5)]
        );
        assert!((timeline.duration() - 1.3).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_stagger_spreads_targets() -> Result<()> {
        let timeline = Timeline::compose(vec![
            Step::to(vec!["label", "title", "subtitle"], Props::new().y(0.0))
                .duration(1.0)
                .stagger(0.15),
        ])?;
        assert_eq!(
            starts(&timeline),
            vec![("label", 0.0), ("title", 0.15), ("subtitle", 0.3)]
        );
        assert!((timeline.duration() - 1.3).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_absolute_position_runs_in_parallel() -> Result<()> {
        let timeline = Timeline::compose(vec![
            Step::to(vec!["h1", "h2"], Props::new().y(0.0))
                .duration(1.0)
                .stagger(0.1),
            Step::to(vec!["line"], Props::new().scale_x(1.0))
                .duration(1.2)
                .at(0.3),
        ])?;
        assert_eq!(
            starts(&timeline),
            vec![("h1", 0.0), ("h2", 0.1), ("line", 0.3)]
        );
        assert!((timeline.duration() - 1.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_delay_shifts_start() -> Result<()> {
        let timeline =
            Timeline::compose(vec![Step::to(vec!["card"], Props::new().y(0.0)).delay(0.3)])?;
        assert_eq!(starts(&timeline), vec![("card", 0.3)]);
        Ok(())
    }

    #[test]
    fn test_start_never_negative() -> Result<()> {
        let timeline = Timeline::compose(vec![
            Step::to(vec!["a"], Props::new().y(0.0)).after_previous(-5.0),
        ])?;
        assert_eq!(starts(&timeline), vec![("a", 0.0)]);
        Ok(())
    }

    #[test]
    fn test_invalid_timings_are_rejected() {
        let negative = Timeline::compose(vec![Step::to(vec!["a"], Props::new()).duration(-1.0)]);
        assert!(matches!(negative, Err(Error::InvalidStep { .. })));

        let nan_target =
            Timeline::compose(vec![Step::to(vec!["a"], Props::new().opacity(f64::NAN))]);
        assert!(matches!(nan_target, Err(Error::InvalidStep { .. })));

        let inf_offset = Timeline::compose(vec![
            Step::to(vec!["a"], Props::new()).after_previous(f64::INFINITY),
        ]);
        assert!(matches!(inf_offset, Err(Error::InvalidStep { .. })));
    }

    #[test]
    fn test_empty_timeline() -> Result<()> {
        let timeline: Timeline<&str> = Timeline::compose(Vec::new())?;
        assert!(timeline.is_empty());
        assert!(timeline.duration().abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_tween_progress() {
        let tween = ScheduledTween {
            target: "a",
            to: Props::new(),
            start: 1.0,
            duration: 2.0,
            ease: Ease::Linear,
            step: 0,
        };
        assert!(tween.progress(0.5).abs() < f64::EPSILON);
        assert!((tween.progress(2.0) - 0.5).abs() < f64::EPSILON);
        assert!((tween.progress(9.0) - 1.0).abs() < f64::EPSILON);

        let instant = ScheduledTween {
            duration: 0.0,
            ..tween
        };
        assert!((instant.progress(1.0) - 1.0).abs() < f64::EPSILON);
    }
}
