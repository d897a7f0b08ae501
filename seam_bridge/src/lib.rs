// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seam Bridge: run a Seam warp map inside a host process.
//!
//! [`seam_zones`] is pure: it compiles rectangles into zones and answers
//! dispatch queries. This crate adds the stateful part a host needs:
//!
//! - [`Bridge`] owns the current [`WarpMap`](seam_zones::WarpMap) and replaces
//!   it atomically when the display configuration changes, so pointer samples
//!   arriving on another thread never observe a half-built map.
//! - [`SurfaceSource`], [`Listener`], and [`PointerWarp`] describe the
//!   platform collaborators the host provides.
//! - [`FlipVertical`] adapts y-down pointer primitives to the y-up layout space.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use seam_bridge::{Bridge, BridgeConfig, Listener, Refresh};
//! use seam_zones::Layout;
//!
//! struct Polling(bool);
//!
//! impl Listener for Polling {
//!     fn start(&mut self) { self.0 = true; }
//!     fn stop(&mut self) { self.0 = false; }
//! }
//!
//! let bridge = Bridge::new(BridgeConfig::default());
//! let mut listener = Polling(false);
//! let mut source = || vec![
//!     Rect::new(0.0, 0.0, 100.0, 300.0),
//!     Rect::new(200.0, 0.0, 300.0, 100.0),
//! ];
//!
//! // The first sync compiles the layout and starts the listener.
//! assert!(matches!(bridge.sync(&mut source, &mut listener), Refresh::Rebuilt { .. }));
//! assert!(listener.0);
//!
//! // Samples on a zone strip are warped.
//! let mut moved_to = None;
//! let mut warp = |p: Point, _: &Layout| moved_to = Some(p);
//! assert!(bridge.handle_sample(Point::new(100.0, 50.0), &mut warp));
//! assert_eq!(moved_to, Some(Point::new(201.0, 50.0)));
//!
//! bridge.shutdown(&mut listener);
//! assert!(!listener.0);
//! ```
//!
//! ## Threads
//!
//! [`Bridge`] is `Send + Sync`. Call [`Bridge::sync`] or [`Bridge::refresh`]
//! from wherever display change notifications arrive and
//! [`Bridge::handle_sample`] from the sampling thread; both take `&self`.

mod bridge;
mod host;

pub use bridge::{Bridge, BridgeConfig, Refresh, Snapshot};
pub use host::{FlipVertical, Listener, PointerWarp, SurfaceSource};
