// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive types: validated surfaces and traversal directions.

use kurbo::{Point, Rect};

/// Reasons a rectangle cannot be used as a [`Surface`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum SurfaceError {
    /// One of the edges is NaN or infinite.
    #[error("surface has a non-finite edge")]
    NonFinite,
    /// Zero or negative width/height, including inverted edges.
    #[error("surface has no area ({width} x {height})")]
    Degenerate {
        /// `right - left` as given.
        width: f64,
        /// `top - bottom` as given.
        height: f64,
    },
}

/// One display surface in the shared layout space.
///
/// The layout space is y-up: [`bottom`](Self::bottom) is the rectangle's `y0`
/// and [`top`](Self::top) its `y1`. Hosts with a y-down pointer API flip at the
/// relocation boundary, not here.
///
/// A `Surface` always satisfies `left < right` and `bottom < top` with finite edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    rect: Rect,
}

impl Surface {
    /// Validate a rectangle as a surface.
    ///
    /// The rectangle is taken as-is; an inverted rectangle is rejected rather
    /// than normalized since it means the enumeration produced garbage.
    pub fn new(rect: Rect) -> Result<Self, SurfaceError> {
        let finite = rect.x0.is_finite()
            && rect.y0.is_finite()
            && rect.x1.is_finite()
            && rect.y1.is_finite();
        if !finite {
            return Err(SurfaceError::NonFinite);
        }
        if !(rect.x0 < rect.x1 && rect.y0 < rect.y1) {
            return Err(SurfaceError::Degenerate {
                width: rect.x1 - rect.x0,
                height: rect.y1 - rect.y0,
            });
        }
        Ok(Self { rect })
    }

    /// The underlying rectangle.
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Minimum x.
    pub const fn left(&self) -> f64 {
        self.rect.x0
    }

    /// Maximum x.
    pub const fn right(&self) -> f64 {
        self.rect.x1
    }

    /// Minimum y.
    pub const fn bottom(&self) -> f64 {
        self.rect.y0
    }

    /// Maximum y.
    pub const fn top(&self) -> f64 {
        self.rect.y1
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.rect.x1 - self.rect.x0
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.rect.y1 - self.rect.y0
    }

    /// Whether the point lies strictly inside the surface (not on an edge).
    pub fn contains_interior(&self, p: Point) -> bool {
        self.rect.x0 < p.x && p.x < self.rect.x1 && self.rect.y0 < p.y && p.y < self.rect.y1
    }
}

impl TryFrom<Rect> for Surface {
    type Error = SurfaceError;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        Self::new(rect)
    }
}

/// Axis of pointer traversal out of a surface.
///
/// `Rightward`/`Leftward` and `Upward`/`Downward` mirror each other; `Upward`
/// points toward increasing y in the y-up layout space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward increasing x.
    Rightward,
    /// Toward increasing y.
    Upward,
    /// Toward decreasing x.
    Leftward,
    /// Toward decreasing y.
    Downward,
}

impl Direction {
    /// All directions in compile order.
    pub const ALL: [Self; 4] = [Self::Rightward, Self::Upward, Self::Leftward, Self::Downward];

    /// True when traversal moves along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Rightward | Self::Leftward)
    }

    /// `1.0` when traversal increases the coordinate, `-1.0` otherwise.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Rightward | Self::Upward => 1.0,
            Self::Leftward | Self::Downward => -1.0,
        }
    }

    /// The mirror direction.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Rightward => Self::Leftward,
            Self::Upward => Self::Downward,
            Self::Leftward => Self::Rightward,
            Self::Downward => Self::Upward,
        }
    }

    /// The flag for this direction in a [`Directions`] set.
    pub const fn flag(self) -> Directions {
        match self {
            Self::Rightward => Directions::RIGHTWARD,
            Self::Upward => Directions::UPWARD,
            Self::Leftward => Directions::LEFTWARD,
            Self::Downward => Directions::DOWNWARD,
        }
    }

    /// Split a point into `(along, across)` layout coordinates, where `along`
    /// follows the traversal axis.
    pub(crate) const fn split(self, p: Point) -> (f64, f64) {
        if self.is_horizontal() {
            (p.x, p.y)
        } else {
            (p.y, p.x)
        }
    }

    /// Inverse of [`split`](Self::split).
    pub(crate) const fn join(self, along: f64, across: f64) -> Point {
        if self.is_horizontal() {
            Point::new(along, across)
        } else {
            Point::new(across, along)
        }
    }
}

bitflags::bitflags! {
    /// A set of traversal directions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// [`Direction::Rightward`].
        const RIGHTWARD = 0b0000_0001;
        /// [`Direction::Upward`].
        const UPWARD    = 0b0000_0010;
        /// [`Direction::Leftward`].
        const LEFTWARD  = 0b0000_0100;
        /// [`Direction::Downward`].
        const DOWNWARD  = 0b0000_1000;
        /// Both x-axis directions.
        const HORIZONTAL = Self::RIGHTWARD.bits() | Self::LEFTWARD.bits();
        /// Both y-axis directions.
        const VERTICAL = Self::UPWARD.bits() | Self::DOWNWARD.bits();
    }
}

impl Directions {
    /// Whether `direction` is in the set.
    pub const fn has(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }
}

impl Default for Directions {
    fn default() -> Self {
        Self::all()
    }
}
