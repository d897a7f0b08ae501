// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces to the host's platform collaborators.
//!
//! Seam never talks to a display server itself. The host supplies:
//!
//! - a [`SurfaceSource`] that enumerates display rectangles,
//! - a [`Listener`] that subscribes to (or polls for) pointer samples,
//! - a [`PointerWarp`] that moves the pointer.
//!
//! Closures implement [`SurfaceSource`] and [`PointerWarp`] directly, which
//! keeps tests and small hosts short.

use kurbo::{Point, Rect};
use seam_zones::Layout;

/// Enumerates display surfaces in a stable order, in y-up layout space.
pub trait SurfaceSource {
    /// Current display rectangles. The first one is the reference surface.
    fn surfaces(&mut self) -> Vec<Rect>;
}

impl<F: FnMut() -> Vec<Rect>> SurfaceSource for F {
    fn surfaces(&mut self) -> Vec<Rect> {
        self()
    }
}

/// Moves the pointer.
pub trait PointerWarp {
    /// Relocate the pointer to `target`, given in layout space.
    ///
    /// `layout` is the layout the target was computed from, so coordinate
    /// conversions see the same reference surface as the dispatcher did.
    fn warp_to(&mut self, target: Point, layout: &Layout);
}

impl<F: FnMut(Point, &Layout)> PointerWarp for F {
    fn warp_to(&mut self, target: Point, layout: &Layout) {
        self(target, layout);
    }
}

/// Starts and stops delivery of pointer samples.
///
/// Calls always alternate: [`Bridge`](crate::Bridge) only calls `start` when
/// bridging turns on and `stop` when it turns off.
pub trait Listener {
    /// Begin delivering samples.
    fn start(&mut self);

    /// Stop delivering samples and release any subscriptions.
    fn stop(&mut self);
}

/// Adapts a y-down relocation primitive to the y-up layout space.
///
/// The flip uses the reference surface's height: `y' = height - y`. This is
/// the convention of platforms that report surfaces bottom-up but warp the
/// pointer top-down relative to the primary display.
#[derive(Clone, Debug, Default)]
pub struct FlipVertical<W> {
    inner: W,
}

impl<W> FlipVertical<W> {
    /// Wrap a y-down primitive.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// The wrapped primitive.
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: PointerWarp> PointerWarp for FlipVertical<W> {
    fn warp_to(&mut self, target: Point, layout: &Layout) {
        let flipped = match layout.reference() {
            Some(reference) => Point::new(target.x, reference.height() - target.y),
            None => target,
        };
        self.inner.warp_to(flipped, layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_uses_reference_height() {
        let layout = Layout::from_rects([
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            Rect::new(1920.0, 0.0, 3840.0, 2160.0),
        ]);
        let mut seen = Vec::new();
        let mut warp = FlipVertical::new(|p: Point, _: &Layout| seen.push(p));
        warp.warp_to(Point::new(2000.0, 100.0), &layout);
        warp.warp_to(Point::new(10.0, 1079.0), &layout);
        drop(warp);
        assert_eq!(seen, [Point::new(2000.0, 980.0), Point::new(10.0, 1.0)]);
    }

    #[test]
    fn flip_without_reference_passes_through() {
        let mut seen = None;
        let mut warp = FlipVertical::new(|p: Point, _: &Layout| seen = Some(p));
        warp.warp_to(Point::new(3.0, 4.0), &Layout::new());
        drop(warp);
        assert_eq!(seen, Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn closures_are_sources() {
        let mut source = || vec![Rect::new(0.0, 0.0, 1.0, 1.0)];
        assert_eq!(SurfaceSource::surfaces(&mut source).len(), 1);
    }
}
