// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the Seam demos.

use std::env;

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// The filter comes from `SEAM_LOG`, then `RUST_LOG`, and otherwise shows
/// `debug` for the Seam crates and `warn` for everything else.
pub fn init_logging() {
    let filter = env::var("SEAM_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn,seam_zones=debug,seam_bridge=debug"));
    // A subscriber may already be installed when demos run under a harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
