// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Warp dispatcher and the compiled [`WarpMap`].

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::compile::{CompileOptions, compile};
use crate::layout::Layout;
use crate::zone::Zone;

/// Find the relocation target for a pointer sample.
///
/// The sample is rounded to the nearest integer coordinate, then zones are
/// scanned in order and the first match wins. Returns `None` when no zone
/// matches, meaning the pointer should be left alone.
pub fn dispatch(zones: &[Zone], point: Point) -> Option<Point> {
    let p = point.round();
    zones.iter().find_map(|z| z.warp(p))
}

/// A compiled layout: the surfaces and the zones derived from them.
///
/// A map is immutable. When the layout changes, compile a new one and replace
/// the old map as a unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WarpMap {
    layout: Layout,
    zones: Vec<Zone>,
}

impl WarpMap {
    /// Compile `layout` with default options.
    pub fn new(layout: Layout) -> Self {
        Self::with_options(layout, CompileOptions::default())
    }

    /// Compile `layout` with the given options.
    pub fn with_options(layout: Layout, options: CompileOptions) -> Self {
        let zones = compile(&layout, options);
        Self { layout, zones }
    }

    /// Compile raw rectangles with default options, skipping malformed ones.
    pub fn from_rects<I: IntoIterator<Item = Rect>>(rects: I) -> Self {
        Self::new(Layout::from_rects(rects))
    }

    /// The source layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Zones in compile order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Number of zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// True when no bridging is possible; hosts should stop sampling.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// See [`dispatch`].
    pub fn dispatch(&self, point: Point) -> Option<Point> {
        dispatch(&self.zones, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use crate::zone::{EdgeZone, GapZone};

    #[test]
    fn rounds_before_matching() {
        let zones = [Zone::Edge(EdgeZone {
            direction: Direction::Rightward,
            lo: 0.0,
            hi: 10.0,
            boundary: 100.0,
            target: 120.0,
        })];
        assert_eq!(
            dispatch(&zones, Point::new(99.6, 4.4)),
            Some(Point::new(121.0, 4.0))
        );
        assert_eq!(dispatch(&zones, Point::new(99.4, 4.0)), None);
        assert_eq!(dispatch(&zones, Point::new(100.0, 9.6)), None);
    }

    #[test]
    fn first_match_wins() {
        let edge = Zone::Edge(EdgeZone {
            direction: Direction::Upward,
            lo: 0.0,
            hi: 100.0,
            boundary: 50.0,
            target: 60.0,
        });
        let gap = Zone::Gap(GapZone {
            direction: Direction::Upward,
            lo: 0.0,
            hi: 100.0,
            boundary: 50.0,
            anchor: Point::new(5.0, 500.0),
        });
        let p = Point::new(20.0, 50.0);
        assert_eq!(dispatch(&[edge, gap], p), Some(Point::new(20.0, 61.0)));
        assert_eq!(dispatch(&[gap, edge], p), Some(Point::new(5.0, 500.0)));
    }

    #[test]
    fn empty_map_never_warps() {
        let map = WarpMap::default();
        assert!(map.is_empty());
        assert_eq!(map.dispatch(Point::new(0.0, 0.0)), None);
    }
}
