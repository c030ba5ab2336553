//! Pointer-driven card tilt and hover transitions

use super::ease::Ease;
use super::visual::Props;

/// Rotation of a card in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
        }
    }

    #[must_use]
    pub fn props(&self) -> Props {
        Props::new().rotate_x(self.rotate_x).rotate_y(self.rotate_y)
    }
}

/// Converts pointer positions over a card into a tilt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltModel {
    /// Pointer offset (px) from the card center per degree of rotation
    pub divisor: f64,
    pub perspective: f64,
}

impl Default for TiltModel {
    fn default() -> Self {
        Self {
            divisor: 20.0,
            perspective: 1000.0,
        }
    }
}

impl TiltModel {
    #[must_use]
    pub const fn new(divisor: f64, perspective: f64) -> Self {
        Self {
            divisor,
            perspective,
        }
    }

    /// Tilt for a pointer at (`x`, `y`) inside a `width` × `height` card
    ///
    /// Coordinates are relative to the card's top-left corner.
    ///
    /// ```
    /// use folio_core::motion::TiltModel;
    ///
    /// let tilt = TiltModel::default().tilt_at(300.0, 100.0, 400.0, 400.0);
    /// assert_eq!(tilt.rotate_x, -5.0);
    /// assert_eq!(tilt.rotate_y, -5.0);
    /// ```
    #[must_use]
    pub fn tilt_at(&self, x: f64, y: f64, width: f64, height: f64) -> Tilt {
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            return Tilt::neutral();
        }
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let tilt = Tilt {
            rotate_x: (y - center_y) / self.divisor,
            rotate_y: (center_x - x) / self.divisor,
        };
        if tilt.rotate_x.is_finite() && tilt.rotate_y.is_finite() {
            tilt
        } else {
            Tilt::neutral()
        }
    }
}

pub const TILT_DURATION: f64 = 0.5;
pub const TILT_EASE: Ease = Ease::Power2Out;

/// Image zoom while a project card is hovered
pub const HOVER_IMAGE_DURATION: f64 = 0.6;
pub const HOVER_IMAGE_EASE: Ease = Ease::Power2Out;
pub const HOVER_NUMBER_DURATION: f64 = 0.3;

#[must_use]
pub fn hover_image(hovered: bool) -> Props {
    Props::new().scale(if hovered { 1.1 } else { 1.0 })
}

#[must_use]
pub fn hover_number(hovered: bool) -> Props {
    Props::new().x(if hovered { 10.0 } else { 0.0 })
}
