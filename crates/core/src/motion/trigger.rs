//! Trigger anchors and viewport geometry
//!
//! An anchor pairs an edge of the trigger element with a line in the
//! viewport, written `"<edge> <viewport>"`: `"top 75%"` is crossed when the
//! element's top edge scrolls above the line 75% down the viewport.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::result::Result;

/// Edge of the trigger element an anchor tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    /// Position of the edge as a fraction of the element's height
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }

    const fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// Snapshot of a trigger element's box relative to the viewport, in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerGeometry {
    /// Distance from the viewport top to the element's top edge
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl TriggerGeometry {
    #[must_use]
    pub const fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }
}

/// An element edge paired with a viewport line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    /// Viewport line as a fraction of its height, 0 = top
    pub viewport: f64,
}

impl Anchor {
    #[must_use]
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }

    /// Signed distance (px) the edge still has to scroll up to reach the line
    ///
    /// Zero or negative once the anchor has been crossed.
    #[must_use]
    pub fn distance(&self, geometry: &TriggerGeometry) -> f64 {
        let edge_y = geometry.top + self.edge.fraction() * geometry.height;
        let line_y = self.viewport * geometry.viewport_height;
        edge_y - line_y
    }

    #[must_use]
    pub fn is_crossed(&self, geometry: &TriggerGeometry) -> bool {
        self.distance(geometry) <= 0.0
    }
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let (Some(edge_word), Some(line_word), None) = (words.next(), words.next(), words.next())
        else {
            return Err(Error::invalid_anchor(
                s,
                "expected '<edge> <viewport position>'",
            ));
        };

        let edge = match edge_word {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            other => {
                return Err(Error::invalid_anchor(s, format!("unknown edge '{other}'")));
            }
        };

        let viewport = match line_word {
            "top" => 0.0,
            "center" => 0.5,
            "bottom" => 1.0,
            other => parse_percent(other)
                .ok_or_else(|| Error::invalid_anchor(s, format!("bad viewport position '{other}'")))?,
        };

        Ok(Self { edge, viewport })
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = (self.viewport * 100_000.0).round() / 1000.0;
        write!(f, "{} {percent}%", self.edge.keyword())
    }
}

fn parse_percent(word: &str) -> Option<f64> {
    word.strip_suffix('%')
        .and_then(|digits| digits.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v / 100.0)
}

/// What a viewport observer reports for a trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the element within the observed root
    pub ratio: f64,
}

/// When a one-shot reveal fires
///
/// The observed root is the part of the viewport above the reveal line; the
/// reveal fires once the visible fraction of the element within that root
/// reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSpec {
    /// Reveal line as a fraction of the viewport height
    pub line: f64,
    /// Visible fraction that must be reached, 0 = any overlap
    pub threshold: f64,
}

impl TriggerSpec {
    #[must_use]
    pub const fn new(line: f64, threshold: f64) -> Self {
        Self { line, threshold }
    }

    /// Builds a spec from a start anchor such as `"top 75%"`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAnchor`] for malformed anchors and for anchors
    /// on any edge other than `top`, which observers cannot express.
    pub fn from_start(start: &str) -> Result<Self> {
        let anchor: Anchor = start.parse()?;
        if anchor.edge != Edge::Top {
            return Err(Error::invalid_anchor(
                start,
                "reveal triggers start at the element's top edge",
            ));
        }
        Ok(Self::new(anchor.viewport, 0.0))
    }

    /// Root margin that shrinks an observer's root to the area above the line
    ///
    /// ```
    /// use folio_core::motion::TriggerSpec;
    ///
    /// let spec = TriggerSpec::from_start("top 75%")?;
    /// assert_eq!(spec.root_margin(), "0px 0px -25% 0px");
    /// # Ok::<(), folio_core::Error>(())
    /// ```
    #[must_use]
    pub fn root_margin(&self) -> String {
        let shrink = ((1.0 - self.line.clamp(0.0, 1.0)) * 100.0 * 1000.0).round() / 1000.0;
        if shrink == 0.0 {
            "0px".to_string()
        } else {
            format!("0px 0px -{shrink}% 0px")
        }
    }

    /// The sample an observer with [`Self::root_margin`] would report
    #[must_use]
    pub fn sample(&self, geometry: &TriggerGeometry) -> IntersectionSample {
        let root_bottom = self.line.clamp(0.0, 1.0) * geometry.viewport_height;
        let top = geometry.top;
        let bottom = geometry.top + geometry.height.max(0.0);
        let overlap = (bottom.min(root_bottom) - top.max(0.0)).max(0.0);

        let is_intersecting = if geometry.height <= 0.0 {
            top >= 0.0 && top <= root_bottom
        } else {
            overlap > 0.0
        };
        let ratio = if geometry.height <= 0.0 {
            if is_intersecting { 1.0 } else { 0.0 }
        } else {
            (overlap / geometry.height).clamp(0.0, 1.0)
        };

        IntersectionSample {
            is_intersecting,
            ratio,
        }
    }

    /// Whether the element's top edge is already at or above the line
    ///
    /// True for elements scrolled past entirely, which an observer never
    /// reports as intersecting.
    #[must_use]
    pub fn is_passed(&self, geometry: &TriggerGeometry) -> bool {
        Anchor::new(Edge::Top, self.line).is_crossed(geometry)
    }

    /// Whether `sample` satisfies this spec
    #[must_use]
    pub fn is_met_by(&self, sample: &IntersectionSample) -> bool {
        sample.is_intersecting && sample.ratio >= self.threshold
    }
}
