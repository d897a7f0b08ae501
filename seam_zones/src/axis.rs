// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction-normalized view of surfaces.
//!
//! The compiler is written once, for traversal toward increasing `along`.
//! An [`Axis`] maps each surface into that frame (negating the traversal
//! coordinate for `Leftward`/`Downward`, swapping axes for `Upward`/`Downward`)
//! and maps results back into layout coordinates.

use kurbo::Point;

use crate::types::{Direction, Surface};

/// Closed interval `[lo, hi]` with `lo < hi`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Span {
    pub(crate) lo: f64,
    pub(crate) hi: f64,
}

impl Span {
    /// Open-interval overlap: touching spans do not overlap.
    pub(crate) fn overlaps(self, other: Self) -> bool {
        self.lo < other.hi && other.lo < self.hi
    }

    /// Whether `v` lies strictly inside.
    pub(crate) fn surrounds(self, v: f64) -> bool {
        self.lo < v && v < self.hi
    }

    pub(crate) fn mid(self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    /// The parts of `self` that `other` does not cover, low part first.
    pub(crate) fn minus(self, other: Self) -> impl Iterator<Item = Self> {
        let below = Self {
            lo: self.lo,
            hi: self.hi.min(other.lo),
        };
        let above = Self {
            lo: self.lo.max(other.hi),
            hi: self.hi,
        };
        [below, above].into_iter().filter(|s| s.lo < s.hi)
    }
}

/// A surface as seen from one traversal direction.
///
/// `along.lo` is the near edge (faced by a surface behind it) and `along.hi`
/// the far edge (the one the pointer leaves through).
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Frame {
    pub(crate) along: Span,
    pub(crate) across: Span,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Axis {
    direction: Direction,
}

impl Axis {
    pub(crate) const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub(crate) fn frame(self, s: &Surface) -> Frame {
        let (x, y) = (
            Span {
                lo: s.left(),
                hi: s.right(),
            },
            Span {
                lo: s.bottom(),
                hi: s.top(),
            },
        );
        match self.direction {
            Direction::Rightward => Frame { along: x, across: y },
            Direction::Upward => Frame { along: y, across: x },
            Direction::Leftward => Frame {
                along: Span { lo: -x.hi, hi: -x.lo },
                across: y,
            },
            Direction::Downward => Frame {
                along: Span { lo: -y.hi, hi: -y.lo },
                across: x,
            },
        }
    }

    /// Map a frame `along` coordinate back to the layout.
    pub(crate) fn unframe(self, along: f64) -> f64 {
        if self.direction.sign() > 0.0 {
            along
        } else {
            -along
        }
    }

    /// Map a frame point back to the layout.
    pub(crate) fn point(self, along: f64, across: f64) -> Point {
        self.direction.join(self.unframe(along), across)
    }
}
