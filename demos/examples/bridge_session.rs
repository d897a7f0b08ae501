// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a [`Bridge`] through a short session.
//!
//! A fake platform reports displays, a sampling thread feeds pointer
//! positions, and the main thread plays display configuration changes. The
//! pointer primitive works top-down, so it is wrapped in [`FlipVertical`].
//!
//! Run:
//! - `cargo run -p seam_demos --example bridge_session`

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use kurbo::{Point, Rect};
use seam_bridge::{Bridge, BridgeConfig, FlipVertical, Listener, Refresh};
use seam_zones::Layout;

#[derive(Debug, Default)]
struct FakeListener {
    running: bool,
}

impl Listener for FakeListener {
    fn start(&mut self) {
        tracing::info!("listener started");
        self.running = true;
    }

    fn stop(&mut self) {
        tracing::info!("listener stopped");
        self.running = false;
    }
}

fn main() {
    seam_demos::init_logging();

    let configurations = [
        // Laptop alone.
        vec![Rect::new(0.0, 0.0, 1440.0, 900.0)],
        // External display docked to the right, offset upward.
        vec![
            Rect::new(0.0, 0.0, 1440.0, 900.0),
            Rect::new(1640.0, 300.0, 3560.0, 1380.0),
        ],
        // Same again: no rebuild.
        vec![
            Rect::new(0.0, 0.0, 1440.0, 900.0),
            Rect::new(1640.0, 300.0, 3560.0, 1380.0),
        ],
        // Undocked.
        vec![Rect::new(0.0, 0.0, 1440.0, 900.0)],
    ];

    let bridge = Arc::new(Bridge::new(BridgeConfig::default()));
    let mut listener = FakeListener::default();
    let (tx, rx) = mpsc::channel::<Point>();

    let sampler = {
        let bridge = Arc::clone(&bridge);
        thread::spawn(move || {
            let mut warp = FlipVertical::new(|p: Point, _: &Layout| {
                println!("  warp (y-down) -> ({}, {})", p.x, p.y);
            });
            let mut warped = 0_usize;
            for sample in rx {
                if bridge.handle_sample(sample, &mut warp) {
                    warped += 1;
                }
            }
            warped
        })
    };

    for (step, rects) in configurations.iter().enumerate() {
        let mut source = || rects.clone();
        let refresh = bridge.sync(&mut source, &mut listener);
        match refresh {
            Refresh::Unchanged => println!("step {step}: unchanged"),
            Refresh::Rebuilt { zones, bridging } => {
                println!("step {step}: rebuilt, {zones} zones, bridging = {bridging}");
            }
        }
        if listener.running {
            for y in [100.0, 350.0, 899.0] {
                // Samples are only delivered while the listener runs.
                let _ = tx.send(Point::new(1440.0, y));
            }
        }
    }
    bridge.shutdown(&mut listener);
    drop(tx);

    match sampler.join() {
        Ok(warped) => println!("{warped} samples warped"),
        Err(_) => eprintln!("sampler thread panicked"),
    }
}
