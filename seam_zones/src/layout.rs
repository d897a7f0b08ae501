// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered collections of surfaces.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::types::{Surface, SurfaceError};

/// An ordered list of valid surfaces.
///
/// Order follows the host's enumeration. The first surface is the *reference
/// surface*; hosts whose pointer API is y-down use its height to flip
/// coordinates when relocating.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    surfaces: Vec<Surface>,
}

impl Layout {
    /// Create an empty layout.
    pub const fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    /// Build a layout from raw rectangles, skipping malformed ones.
    ///
    /// A misbehaving enumeration should degrade bridging, not break it, so a
    /// bad rectangle is dropped (and logged with the `tracing` feature).
    pub fn from_rects<I: IntoIterator<Item = Rect>>(rects: I) -> Self {
        let mut layout = Self::new();
        for rect in rects {
            if let Err(_err) = layout.try_push(rect) {
                #[cfg(feature = "tracing")]
                tracing::warn!(?rect, err = %_err, "skipping malformed surface");
            }
        }
        layout
    }

    /// Validate and append a rectangle.
    pub fn try_push(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.surfaces.push(Surface::new(rect)?);
        Ok(())
    }

    /// The surfaces in enumeration order.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// The reference surface, if any.
    pub fn reference(&self) -> Option<&Surface> {
        self.surfaces.first()
    }

    /// Number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// True when there are no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Iterate over surfaces in enumeration order.
    pub fn iter(&self) -> core::slice::Iter<'_, Surface> {
        self.surfaces.iter()
    }

    /// The first surface whose interior contains `p`.
    pub fn surface_at(&self, p: Point) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.contains_interior(p))
    }
}

impl FromIterator<Rect> for Layout {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self::from_rects(iter)
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a Surface;
    type IntoIter = core::slice::Iter<'a, Surface>;

    fn into_iter(self) -> Self::IntoIter {
        self.surfaces.iter()
    }
}
