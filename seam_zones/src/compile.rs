// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Topology compiler: layout in, zones out.
//!
//! For each surface and each enabled direction:
//!
//! 1. Collect *neighbors*: surfaces at or past the far edge whose cross extent
//!    overlaps the source's, clipped to what nearer neighbors leave visible.
//! 2. Emit an [`EdgeZone`] for every neighbor whose near edge is not flush with
//!    the far edge.
//! 3. Build the *gap profile* along the far edge: a flat list of coordinates
//!    where each consecutive `(lo, hi)` pair is a stretch facing no neighbor.
//! 4. Drop zero-width pairs, then drop the outermost pairs unless something
//!    lies diagonally beyond them.
//! 5. Emit a [`GapZone`] for each remaining pair, anchored one unit inside the
//!    neighbor bordering the stretch.
//!
//! Steps run in a direction-normalized frame so the algorithm exists once.

use alloc::vec;
use alloc::vec::Vec;

use crate::axis::{Axis, Frame, Span};
use crate::layout::Layout;
use crate::types::{Direction, Directions};
use crate::zone::{EdgeZone, GapZone, Zone};

/// Options controlling which zones [`compile`] produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Directions to compile. Default: all four.
    pub directions: Directions,
    /// Emit edge continuation zones. Default: true.
    pub edges: bool,
    /// Emit gap teleport zones. Default: true.
    pub gaps: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            directions: Directions::all(),
            edges: true,
            gaps: true,
        }
    }
}

/// Compile a layout into zones.
///
/// Output order is by surface, then by direction in [`Direction::ALL`] order,
/// with a direction's edge zones before its gap zones. The result is a pure
/// function of the layout and options.
pub fn compile(layout: &Layout, options: CompileOptions) -> Vec<Zone> {
    let mut zones = Vec::new();
    if layout.len() < 2 {
        return zones;
    }
    let passes: Vec<(Direction, Axis, Vec<Frame>)> = Direction::ALL
        .into_iter()
        .filter(|d| options.directions.has(*d))
        .map(|d| {
            let axis = Axis::new(d);
            (d, axis, layout.iter().map(|s| axis.frame(s)).collect())
        })
        .collect();
    for i in 0..layout.len() {
        for (direction, axis, frames) in &passes {
            Pass {
                direction: *direction,
                axis: *axis,
                source: frames[i],
                frames,
            }
            .run(options, &mut zones);
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        surfaces = layout.len(),
        zones = zones.len(),
        "compiled warp zones"
    );
    zones
}

/// One surface, one direction.
struct Pass<'a> {
    direction: Direction,
    axis: Axis,
    source: Frame,
    frames: &'a [Frame],
}

impl Pass<'_> {
    fn run(&self, options: CompileOptions, out: &mut Vec<Zone>) {
        let neighbors = self.neighbors();
        if neighbors.is_empty() {
            return;
        }
        if options.edges {
            self.edges(&neighbors, out);
        }
        if options.gaps {
            self.gaps(&neighbors, out);
        }
    }

    fn far(&self) -> f64 {
        self.source.along.hi
    }

    /// Line-of-sight neighbors sorted by `across.lo`.
    ///
    /// A candidate partly hidden behind nearer ones is clipped to the spans
    /// that stay visible, so one surface may yield several frames. Their
    /// `across` spans never overlap.
    fn neighbors(&self) -> Vec<Frame> {
        let far = self.far();
        let reachable: Vec<Frame> = self
            .frames
            .iter()
            .filter(|t| t.along.lo >= far && t.across.overlaps(self.source.across))
            .copied()
            .collect();
        let mut neighbors = Vec::new();
        for t in &reachable {
            let mut visible = vec![t.across];
            for u in reachable.iter().filter(|u| u.along.hi <= t.along.lo) {
                visible = visible.into_iter().flat_map(|v| v.minus(u.across)).collect();
            }
            neighbors.extend(
                visible
                    .into_iter()
                    .filter(|v| v.overlaps(self.source.across))
                    .map(|across| Frame {
                        along: t.along,
                        across,
                    }),
            );
        }
        neighbors.sort_by(|a, b| a.across.lo.total_cmp(&b.across.lo));
        neighbors
    }

    fn edges(&self, neighbors: &[Frame], out: &mut Vec<Zone>) {
        let far = self.far();
        for t in neighbors {
            // Flush edges need no help.
            if t.along.lo == far {
                continue;
            }
            out.push(Zone::Edge(EdgeZone {
                direction: self.direction,
                lo: self.source.across.lo.max(t.across.lo),
                hi: self.source.across.hi.min(t.across.hi),
                boundary: self.axis.unframe(far),
                target: self.axis.unframe(t.along.lo),
            }));
        }
    }

    fn gaps(&self, neighbors: &[Frame], out: &mut Vec<Zone>) {
        let far = self.far();
        let mut stretches = collapse(&gap_profile(self.source.across, neighbors));

        // Outer stretches only bridge to something diagonally beyond the far edge.
        if let Some(&(first, _)) = stretches.first()
            && !self
                .frames
                .iter()
                .any(|o| o.across.hi <= first && o.along.hi > far)
        {
            stretches.remove(0);
        }
        if let Some(&(_, last)) = stretches.last()
            && !self
                .frames
                .iter()
                .any(|o| o.across.lo >= last && o.along.hi > far)
        {
            stretches.pop();
        }

        for (lo, hi) in stretches {
            // Every stretch endpoint inside the extent is a neighbor's edge.
            let from_below = lo > self.source.across.lo;
            let host = neighbors.iter().find(|n| {
                if from_below {
                    n.across.hi == lo
                } else {
                    n.across.lo == hi
                }
            });
            debug_assert!(host.is_some(), "stretch [{lo}, {hi}] borders no neighbor");
            let Some(host) = host else {
                continue;
            };
            // One unit inside the host, or its middle when it is thinner than that.
            let across = if from_below {
                (lo - 1.0).max(host.across.mid())
            } else {
                (hi + 1.0).min(host.across.mid())
            };
            let along = (host.along.lo + 1.0).min(host.along.mid());
            debug_assert!(
                host.across.surrounds(across) && host.along.surrounds(along),
                "anchor ({along}, {across}) is not inside its host"
            );
            out.push(Zone::Gap(GapZone {
                direction: self.direction,
                lo,
                hi,
                boundary: self.axis.unframe(far),
                anchor: self.axis.point(along, across),
            }));
        }
    }
}

/// Fold neighbor spans into the source's cross extent.
///
/// Starts from `[lo, hi]`. A neighbor hanging off the low end moves the first
/// entry up to its high end; one hanging off the high end moves the last entry
/// down to its low end; anything else is carved out of the middle.
fn gap_profile(extent: Span, neighbors: &[Frame]) -> Vec<f64> {
    let mut profile = Vec::with_capacity(2 + 2 * neighbors.len());
    profile.push(extent.lo);
    profile.push(extent.hi);
    for n in neighbors {
        let last = profile.len() - 1;
        if n.across.lo < extent.lo {
            profile[0] = n.across.hi;
        } else if n.across.hi > extent.hi {
            profile[last] = n.across.lo;
        } else {
            profile.insert(last, n.across.hi);
            profile.insert(last, n.across.lo);
        }
    }
    profile
}

/// Pair up a profile and drop stretches with no width.
///
/// A stretch is inverted only when one neighbor covers the whole extent.
fn collapse(profile: &[f64]) -> Vec<(f64, f64)> {
    profile
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .filter(|(lo, hi)| lo < hi)
        .collect()
}
