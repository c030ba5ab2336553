//! Animatable visual properties and the state they compose into

/// A single animatable property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualProp {
    Opacity,
    /// Horizontal translation in px
    X,
    /// Vertical translation in px
    Y,
    Scale,
    ScaleX,
    ScaleY,
    /// Degrees
    RotateX,
    /// Degrees
    RotateY,
    /// Perspective distance in px; zero disables it
    Perspective,
}

/// Target values for a set of properties, in insertion order
///
/// Setting a property twice keeps the last value.
///
/// ```
/// use folio_core::motion::{Props, VisualProp};
///
/// let props = Props::new().opacity(0.0).y(80.0).y(40.0);
/// assert_eq!(props.get(VisualProp::Y), Some(40.0));
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: Vec<(VisualProp, f64)>,
}

impl Props {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, prop: VisualProp, value: f64) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: VisualProp, value: f64) {
        match self.entries.iter_mut().find(|(p, _)| *p == prop) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((prop, value)),
        }
    }

    #[must_use]
    pub fn get(&self, prop: VisualProp) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(p, v)| (*p == prop).then_some(*v))
    }

    #[must_use]
    pub fn contains(&self, prop: VisualProp) -> bool {
        self.entries.iter().any(|(p, _)| *p == prop)
    }

    /// Drops `prop`; returns whether it was present
    pub fn remove(&mut self, prop: VisualProp) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(p, _)| *p != prop);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisualProp, f64)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn opacity(self, value: f64) -> Self {
        self.with(VisualProp::Opacity, value)
    }

    #[must_use]
    pub fn x(self, value: f64) -> Self {
        self.with(VisualProp::X, value)
    }

    #[must_use]
    pub fn y(self, value: f64) -> Self {
        self.with(VisualProp::Y, value)
    }

    #[must_use]
    pub fn scale(self, value: f64) -> Self {
        self.with(VisualProp::Scale, value)
    }

    #[must_use]
    pub fn scale_x(self, value: f64) -> Self {
        self.with(VisualProp::ScaleX, value)
    }

    #[must_use]
    pub fn scale_y(self, value: f64) -> Self {
        self.with(VisualProp::ScaleY, value)
    }

    #[must_use]
    pub fn rotate_x(self, value: f64) -> Self {
        self.with(VisualProp::RotateX, value)
    }

    #[must_use]
    pub fn rotate_y(self, value: f64) -> Self {
        self.with(VisualProp::RotateY, value)
    }

    #[must_use]
    pub fn perspective(self, value: f64) -> Self {
        self.with(VisualProp::Perspective, value)
    }
}

/// Full visual state of one node; defaults to the identity transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub perspective: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            perspective: 0.0,
        }
    }
}

impl VisualState {
    #[must_use]
    pub const fn get(&self, prop: VisualProp) -> f64 {
        match prop {
            VisualProp::Opacity => self.opacity,
            VisualProp::X => self.x,
            VisualProp::Y => self.y,
            VisualProp::Scale => self.scale,
            VisualProp::ScaleX => self.scale_x,
            VisualProp::ScaleY => self.scale_y,
            VisualProp::RotateX => self.rotate_x,
            VisualProp::RotateY => self.rotate_y,
            VisualProp::Perspective => self.perspective,
        }
    }

    pub const fn set(&mut self, prop: VisualProp, value: f64) {
        match prop {
            VisualProp::Opacity => self.opacity = value,
            VisualProp::X => self.x = value,
            VisualProp::Y => self.y = value,
            VisualProp::Scale => self.scale = value,
            VisualProp::ScaleX => self.scale_x = value,
            VisualProp::ScaleY => self.scale_y = value,
            VisualProp::RotateX => self.rotate_x = value,
            VisualProp::RotateY => self.rotate_y = value,
            VisualProp::Perspective => self.perspective = value,
        }
    }

    /// Applies every value in `props`
    pub fn merge(&mut self, props: &Props) {
        props.iter().for_each(|(prop, value)| self.set(prop, value));
    }

    /// Snapshot of the current values for the properties named in `props`
    #[must_use]
    pub fn snapshot(&self, props: &Props) -> Props {
        props
            .iter()
            .fold(Props::new(), |acc, (prop, _)| acc.with(prop, self.get(prop)))
    }

    /// Opacity clamped to the valid CSS range
    #[must_use]
    pub fn css_opacity(&self) -> String {
        format_number(self.opacity.clamp(0.0, 1.0))
    }

    /// CSS `transform` value; `"none"` for the identity transform
    ///
    /// ```
    /// use folio_core::motion::VisualState;
    ///
    /// let state = VisualState { y: 80.0, ..VisualState::default() };
    /// assert_eq!(state.css_transform(), "translate3d(0px, 80px, 0px)");
    /// assert_eq!(VisualState::default().css_transform(), "none");
    /// ```
    #[must_use]
    pub fn css_transform(&self) -> String {
        let identity = Self::default();
        let mut parts = Vec::new();

        if self.perspective > 0.0 {
            parts.push(format!("perspective({}px)", format_number(self.perspective)));
        }
        if self.x != identity.x || self.y != identity.y {
            parts.push(format!(
                "translate3d({}px, {}px, 0px)",
                format_number(self.x),
                format_number(self.y)
            ));
        }
        if self.rotate_x != identity.rotate_x {
            parts.push(format!("rotateX({}deg)", format_number(self.rotate_x)));
        }
        if self.rotate_y != identity.rotate_y {
            parts.push(format!("rotateY({}deg)", format_number(self.rotate_y)));
        }
        if self.scale != identity.scale {
            parts.push(format!("scale({})", format_number(self.scale)));
        }
        if self.scale_x != identity.scale_x || self.scale_y != identity.scale_y {
            parts.push(format!(
                "scale({}, {})",
                format_number(self.scale_x),
                format_number(self.scale_y)
            ));
        }

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Formats with at most four decimals and no trailing zeros
fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_set_overwrites_in_place() {
        let mut props = Props::new().opacity(0.0).scale(0.0);
        props.set(VisualProp::Opacity, 1.0);
        let order: Vec<VisualProp> = props.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![VisualProp::Opacity, VisualProp::Scale]);
        assert_eq!(props.get(VisualProp::Opacity), Some(1.0));
    }

    #[test]
    fn test_props_remove() {
        let mut props = Props::new().rotate_x(3.0).rotate_y(4.0);
        assert!(props.remove(VisualProp::RotateX));
        assert!(!props.remove(VisualProp::RotateX));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_merge_and_snapshot() {
        let mut state = VisualState::default();
        state.merge(&Props::new().opacity(0.0).x(-50.0));
        assert!((state.opacity).abs() < f64::EPSILON);

        let snap = state.snapshot(&Props::new().x(0.0).scale(3.0));
        assert_eq!(snap.get(VisualProp::X), Some(-50.0));
        assert_eq!(snap.get(VisualProp::Scale), Some(1.0));
    }

    #[test]
    fn test_css_transform_orders_perspective_first() {
        let state = VisualState {
            perspective: 1000.0,
            rotate_x: 2.5,
            rotate_y: -1.25,
            ..VisualState::default()
        };
        assert_eq!(
            state.css_transform(),
            "perspective(1000px) rotateX(2.5deg) rotateY(-1.25deg)"
        );
    }

    #[test]
    fn test_css_transform_axis_scale() {
        let state = VisualState {
            scale_y: 0.0,
            ..VisualState::default()
        };
        assert_eq!(state.css_transform(), "scale(1, 0)");
    }

    #[test]
    fn test_css_opacity_is_clamped() {
        let state = VisualState {
            opacity: 1.2,
            ..VisualState::default()
        };
        assert_eq!(state.css_opacity(), "1");
    }

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(0.333_333), "0.3333");
        assert_eq!(format_number(-0.000_01), "0");
        assert_eq!(format_number(100.0), "100");
    }
}
