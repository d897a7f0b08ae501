// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compiled trigger strips.
//!
//! All coordinates are in layout space. `along` is the coordinate on the
//! zone's traversal axis (x for horizontal zones), `across` the other one.

use kurbo::Point;

use crate::types::Direction;

/// Coarse classification of a [`Zone`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    /// Edge continuation across a vertical boundary line.
    Horizontal,
    /// Edge continuation across a horizontal boundary line.
    Vertical,
    /// Gap teleport across a vertical boundary line.
    HorizontalGap,
    /// Gap teleport across a horizontal boundary line.
    VerticalGap,
}

/// Continuous crossing between two line-of-sight neighbors whose facing edges
/// are not flush.
///
/// Matches when `across` is in `[lo, hi)` and `along == boundary`; relocates to
/// one unit past `target` in `direction`, keeping `across`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeZone {
    /// Direction the pointer leaves the source surface in.
    pub direction: Direction,
    /// Inclusive low end of the trigger range.
    pub lo: f64,
    /// Exclusive high end of the trigger range.
    pub hi: f64,
    /// Source surface's far edge.
    pub boundary: f64,
    /// Neighbor's near edge.
    pub target: f64,
}

impl EdgeZone {
    /// Whether a rounded point triggers this zone.
    pub fn matches(&self, p: Point) -> bool {
        let (along, across) = self.direction.split(p);
        self.lo <= across && across < self.hi && along == self.boundary
    }

    /// Relocation target for a rounded point, if it triggers this zone.
    pub fn warp(&self, p: Point) -> Option<Point> {
        if !self.matches(p) {
            return None;
        }
        let (_, across) = self.direction.split(p);
        Some(
            self.direction
                .join(self.target + self.direction.sign(), across),
        )
    }
}

/// Teleport across empty space to a fixed anchor.
///
/// Matches when `across` is in `[lo, hi]` and `along == boundary`; relocates to
/// `anchor` regardless of `across`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GapZone {
    /// Direction the pointer leaves the source surface in.
    pub direction: Direction,
    /// Inclusive low end of the trigger range.
    pub lo: f64,
    /// Inclusive high end of the trigger range.
    pub hi: f64,
    /// Source surface's far edge.
    pub boundary: f64,
    /// Point one unit inside the receiving surface.
    pub anchor: Point,
}

impl GapZone {
    /// Whether a rounded point triggers this zone.
    pub fn matches(&self, p: Point) -> bool {
        let (along, across) = self.direction.split(p);
        self.lo <= across && across <= self.hi && along == self.boundary
    }

    /// Relocation target for a rounded point, if it triggers this zone.
    pub fn warp(&self, p: Point) -> Option<Point> {
        self.matches(p).then_some(self.anchor)
    }
}

/// A compiled trigger strip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Zone {
    /// See [`EdgeZone`].
    Edge(EdgeZone),
    /// See [`GapZone`].
    Gap(GapZone),
}

impl Zone {
    /// Direction the pointer leaves the source surface in.
    pub fn direction(&self) -> Direction {
        match self {
            Self::Edge(z) => z.direction,
            Self::Gap(z) => z.direction,
        }
    }

    /// Classification by traversal axis and kind.
    pub fn kind(&self) -> ZoneKind {
        match (self, self.direction().is_horizontal()) {
            (Self::Edge(_), true) => ZoneKind::Horizontal,
            (Self::Edge(_), false) => ZoneKind::Vertical,
            (Self::Gap(_), true) => ZoneKind::HorizontalGap,
            (Self::Gap(_), false) => ZoneKind::VerticalGap,
        }
    }

    /// Traversal coordinate that triggers the zone.
    pub fn boundary(&self) -> f64 {
        match self {
            Self::Edge(z) => z.boundary,
            Self::Gap(z) => z.boundary,
        }
    }

    /// `(lo, hi)` of the trigger range. Half-open for edges, closed for gaps.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Edge(z) => (z.lo, z.hi),
            Self::Gap(z) => (z.lo, z.hi),
        }
    }

    /// Whether a rounded point triggers this zone.
    pub fn matches(&self, p: Point) -> bool {
        match self {
            Self::Edge(z) => z.matches(p),
            Self::Gap(z) => z.matches(p),
        }
    }

    /// Relocation target for a rounded point, if it triggers this zone.
    pub fn warp(&self, p: Point) -> Option<Point> {
        match self {
            Self::Edge(z) => z.warp(p),
            Self::Gap(z) => z.warp(p),
        }
    }

    /// The edge zone, if this is one.
    pub fn as_edge(&self) -> Option<&EdgeZone> {
        match self {
            Self::Edge(z) => Some(z),
            Self::Gap(_) => None,
        }
    }

    /// The gap zone, if this is one.
    pub fn as_gap(&self) -> Option<&GapZone> {
        match self {
            Self::Gap(z) => Some(z),
            Self::Edge(_) => None,
        }
    }
}

impl From<EdgeZone> for Zone {
    fn from(z: EdgeZone) -> Self {
        Self::Edge(z)
    }
}

impl From<GapZone> for Zone {
    fn from(z: GapZone) -> Self {
        Self::Gap(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_range_is_half_open() {
        let z = EdgeZone {
            direction: Direction::Rightward,
            lo: 0.0,
            hi: 50.0,
            boundary: 100.0,
            target: 110.0,
        };
        assert_eq!(z.warp(Point::new(100.0, 0.0)), Some(Point::new(111.0, 0.0)));
        assert_eq!(z.warp(Point::new(100.0, 49.0)), Some(Point::new(111.0, 49.0)));
        assert_eq!(z.warp(Point::new(100.0, 50.0)), None);
        assert_eq!(z.warp(Point::new(99.0, 10.0)), None);
    }

    #[test]
    fn downward_edge_steps_below_target() {
        let z = EdgeZone {
            direction: Direction::Downward,
            lo: 10.0,
            hi: 20.0,
            boundary: 0.0,
            target: -5.0,
        };
        assert_eq!(z.warp(Point::new(15.0, 0.0)), Some(Point::new(15.0, -6.0)));
        assert_eq!(Zone::from(z).kind(), ZoneKind::Vertical);
    }

    #[test]
    fn gap_range_is_closed() {
        let z = GapZone {
            direction: Direction::Upward,
            lo: 100.0,
            hi: 200.0,
            boundary: 300.0,
            anchor: Point::new(99.0, 401.0),
        };
        assert_eq!(z.warp(Point::new(200.0, 300.0)), Some(z.anchor));
        assert_eq!(z.warp(Point::new(100.0, 300.0)), Some(z.anchor));
        assert_eq!(z.warp(Point::new(201.0, 300.0)), None);
        assert_eq!(z.warp(Point::new(150.0, 299.0)), None);
        let zone = Zone::from(z);
        assert_eq!(zone.kind(), ZoneKind::VerticalGap);
        assert_eq!(zone.range(), (100.0, 200.0));
        assert!(zone.as_edge().is_none());
    }
}
