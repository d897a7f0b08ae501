// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compile a layout and list its zones.
//!
//! Three surfaces: a tall one on the left and two short ones on the right,
//! with empty space between every pair. The listing shows which strips
//! continue the pointer on a neighbor and which jump it to an anchor.
//!
//! Run:
//! - `cargo run -p seam_demos --example layout_zones`
//! - `SEAM_LOG=trace cargo run -p seam_demos --example layout_zones`

use kurbo::{Point, Rect};
use seam_zones::{CompileOptions, Directions, Layout, WarpMap, Zone};

fn main() {
    seam_demos::init_logging();

    let rects = [
        Rect::new(0.0, 0.0, 1920.0, 2160.0),
        Rect::new(2120.0, 0.0, 4040.0, 1080.0),
        Rect::new(2120.0, 1400.0, 3400.0, 2120.0),
        // Zero height: reported by some platforms while a display wakes up.
        Rect::new(5000.0, 0.0, 6000.0, 0.0),
    ];

    let map = WarpMap::from_rects(rects);
    println!(
        "{} surfaces, {} zones",
        map.layout().len(),
        map.zones().len()
    );
    for (i, zone) in map.zones().iter().enumerate() {
        match zone {
            Zone::Edge(e) => println!(
                "  [{i}] {:?} edge  at {:>6} over [{}, {}) -> {}",
                e.direction, e.boundary, e.lo, e.hi, e.target
            ),
            Zone::Gap(g) => println!(
                "  [{i}] {:?} gap   at {:>6} over [{}, {}] -> ({}, {})",
                g.direction, g.boundary, g.lo, g.hi, g.anchor.x, g.anchor.y
            ),
        }
    }

    for p in [
        Point::new(1920.0, 500.0),
        Point::new(1920.0, 1200.0),
        Point::new(1920.4, 2000.2),
        Point::new(960.0, 1000.0),
    ] {
        match map.dispatch(p) {
            Some(to) => println!("sample ({}, {}) -> ({}, {})", p.x, p.y, to.x, to.y),
            None => println!("sample ({}, {}) stays", p.x, p.y),
        }
    }

    // Only side-by-side travel, and no jumps across empty stretches.
    let layout = Layout::from_rects(rects);
    let options = CompileOptions {
        directions: Directions::HORIZONTAL,
        gaps: false,
        ..CompileOptions::default()
    };
    let edges_only = WarpMap::with_options(layout, options);
    println!("horizontal edges only: {} zones", edges_only.len());
}
