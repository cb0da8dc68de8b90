//! Scroll anchors.
//!
//! An [`Anchor`] names an edge of a trigger region and an edge of the
//! viewport; it resolves to the scroll offset at which the two line up.
//! Page authors write anchors as two words, region edge first:
//! `"top bottom"` fires when the region's top reaches the viewport's bottom.

use std::fmt;
use std::str::FromStr;

use scrollreel_core::ReelError;
use serde::{Deserialize, Serialize};

use crate::region::RegionBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    /// Distance of this edge from the top of a box of the given height.
    #[inline]
    #[must_use]
    pub fn offset_within(self, height: f32) -> f32 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => height * 0.5,
            Edge::Bottom => height,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        }
    }
}

impl FromStr for Edge {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            other => Err(ReelError::InvalidAnchor(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Anchor {
    pub region_edge: Edge,
    pub viewport_edge: Edge,
}

impl Anchor {
    /// Region top meets viewport top.
    pub const TOP_TOP: Anchor = Anchor::new(Edge::Top, Edge::Top);
    /// Region top meets viewport bottom.
    pub const TOP_BOTTOM: Anchor = Anchor::new(Edge::Top, Edge::Bottom);

    #[must_use]
    pub const fn new(region_edge: Edge, viewport_edge: Edge) -> Self {
        Self {
            region_edge,
            viewport_edge,
        }
    }

    /// Scroll offset at which the anchored edges coincide.
    #[must_use]
    pub fn scroll_offset(&self, region: RegionBounds, viewport_height: f32) -> f32 {
        region.top + self.region_edge.offset_within(region.height)
            - self.viewport_edge.offset_within(viewport_height)
    }
}

impl FromStr for Anchor {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let (Some(region), Some(viewport), None) = (words.next(), words.next(), words.next())
        else {
            return Err(ReelError::InvalidAnchor(s.to_string()));
        };
        Ok(Anchor::new(region.parse()?, viewport.parse()?))
    }
}

impl TryFrom<String> for Anchor {
    type Error = ReelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Anchor> for String {
    fn from(anchor: Anchor) -> Self {
        anchor.to_string()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.region_edge.as_str(),
            self.viewport_edge.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_word_form() {
        let a: Anchor = "top bottom".parse().unwrap();
        assert_eq!(a, Anchor::TOP_BOTTOM);
        let a: Anchor = "  center   top ".parse().unwrap();
        assert_eq!(a, Anchor::new(Edge::Center, Edge::Top));
        assert_eq!(a.to_string(), "center top");
    }

    #[test]
    fn rejects_malformed_anchors() {
        assert!("top".parse::<Anchor>().is_err());
        assert!("top top top".parse::<Anchor>().is_err());
        assert!(matches!(
            "left top".parse::<Anchor>(),
            Err(ReelError::InvalidAnchor(word)) if word == "left"
        ));
    }

    #[test]
    fn resolves_scroll_offsets() {
        let region = RegionBounds::new(1000.0, 800.0);
        assert_eq!(Anchor::TOP_TOP.scroll_offset(region, 600.0), 1000.0);
        assert_eq!(Anchor::TOP_BOTTOM.scroll_offset(region, 600.0), 400.0);
        let bottom_center = Anchor::new(Edge::Bottom, Edge::Center);
        assert_eq!(bottom_center.scroll_offset(region, 600.0), 1500.0);
    }
}
