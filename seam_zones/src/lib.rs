// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seam Zones: compile a display layout into pointer warp zones.
//!
//! Given the rectangles of every display surface in a shared coordinate space,
//! Seam Zones lets a pointer move between surfaces as if they were tiled
//! seamlessly, even when the surfaces are misaligned or separated by empty space.
//!
//! - [`compile`] turns a [`Layout`] into an ordered list of [`Zone`]s: thin
//!   trigger strips along surface edges.
//! - [`dispatch`] takes a pointer sample and returns where the pointer should be
//!   relocated to, if it sits on a strip.
//!
//! There are two kinds of zone:
//!
//! - [`EdgeZone`]: the pointer leaves a surface through an edge that faces a
//!   neighbor whose near edge is not flush with it. The pointer continues on the
//!   neighbor at the same cross coordinate. Ranges are half-open, `[lo, hi)`.
//! - [`GapZone`]: the pointer leaves through a stretch of edge that faces no
//!   neighbor but lies between reachable ones. The pointer jumps to a fixed
//!   anchor one unit inside the nearest neighbor. Ranges are closed, `[lo, hi]`.
//!
//! Flush neighbors get no zone: the platform already moves the pointer across
//! a touching boundary.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use seam_zones::WarpMap;
//!
//! // A tall surface on the left and two short ones on the right, with a
//! // 100 unit gap between them.
//! let map = WarpMap::from_rects([
//!     Rect::new(0.0, 0.0, 100.0, 300.0),
//!     Rect::new(200.0, 0.0, 300.0, 100.0),
//!     Rect::new(200.0, 200.0, 300.0, 300.0),
//! ]);
//! assert!(!map.is_empty());
//!
//! // Leaving the left surface next to the lower neighbor continues on it.
//! assert_eq!(map.dispatch(Point::new(100.0, 40.0)), Some(Point::new(201.0, 40.0)));
//!
//! // Leaving it facing the empty stretch jumps into the lower neighbor.
//! assert_eq!(map.dispatch(Point::new(100.0, 150.0)), Some(Point::new(201.0, 99.0)));
//!
//! // Anywhere else, nothing happens.
//! assert_eq!(map.dispatch(Point::new(50.0, 150.0)), None);
//! ```
//!
//! ## Coordinates
//!
//! The layout space is y-up: a [`Surface`]'s `bottom` is `y0` and its `top` is
//! `y1`, and [`Direction::Upward`] moves toward larger y. Samples are rounded to
//! the nearest integer before matching, so layouts are expected to sit on
//! integer coordinates.
//!
//! ## Replacing maps
//!
//! A [`WarpMap`] is immutable. When the layout changes, compile a new map and
//! swap it in as a whole; never patch zones in place.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: log skipped surfaces and compile summaries.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
pub mod compile;
pub mod dispatch;
pub mod layout;
pub mod types;
pub mod zone;

pub use compile::{CompileOptions, compile};
pub use dispatch::{WarpMap, dispatch};
pub use layout::Layout;
pub use types::{Direction, Directions, Surface, SurfaceError};
pub use zone::{EdgeZone, GapZone, Zone, ZoneKind};
