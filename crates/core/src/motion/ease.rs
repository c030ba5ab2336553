//! Easing curves
//!
//! Each curve maps linear progress in `[0, 1]` onto eased progress. All
//! curves pin `0 -> 0` and `1 -> 1`; `BackOut` overshoots in between.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out, the default for ad-hoc transitions
    #[default]
    Power1Out,
    /// Cubic ease-out
    Power2Out,
    /// Quartic ease-out
    Power3Out,
    /// Quartic ease-in-out
    Power3InOut,
    /// Settles past the target and springs back
    BackOut { overshoot: f64 },
}

impl Ease {
    #[must_use]
    pub const fn back_out(overshoot: f64) -> Self {
        Self::BackOut { overshoot }
    }

    /// Eased progress for linear progress `t`, clamped to `[0, 1]`
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Self::BackOut { overshoot } => {
                let u = t - 1.0;
                (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2) + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power3InOut,
        Ease::BackOut { overshoot: 2.0 },
    ];

    #[test]
    fn test_endpoints_are_pinned() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for ease in ALL {
            assert!((ease.apply(3.0) - 1.0).abs() < 1e-12);
            assert!(ease.apply(-1.0).abs() < 1e-12);
            assert!(ease.apply(f64::NAN).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        for ease in [Ease::Power1Out, Ease::Power2Out, Ease::Power3Out] {
            assert!(ease.apply(0.25) > 0.25);
        }
        assert!(Ease::Power3Out.apply(0.25) > Ease::Power1Out.apply(0.25));
    }

    #[test]
    fn test_in_out_is_symmetric() {
        let a = Ease::Power3InOut.apply(0.2);
        let b = Ease::Power3InOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_back_out_overshoots() {
        let ease = Ease::back_out(2.0);
        let peak = (1..100)
            .map(|i| ease.apply(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_default_is_power1_out() {
        assert_eq!(Ease::default(), Ease::Power1Out);
    }
}
