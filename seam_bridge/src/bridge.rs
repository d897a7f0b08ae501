// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Bridge`]: owner of the current warp map.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwap;
use kurbo::{Point, Rect};
use parking_lot::Mutex;
use seam_zones::{CompileOptions, Layout, WarpMap};

use crate::host::{Listener, PointerWarp, SurfaceSource};

/// Bridge configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Options passed to the compiler on every rebuild.
    pub compile: CompileOptions,
}

/// Outcome of [`Bridge::refresh`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// The rectangles match the previous ones; the map was kept.
    Unchanged,
    /// A new map replaced the old one.
    Rebuilt {
        /// Number of zones in the new map.
        zones: usize,
        /// Whether the new map can warp at all.
        bridging: bool,
    },
}

/// One consistent view: the raw rectangles and the map compiled from them.
#[derive(Debug, Default)]
pub struct Snapshot {
    rects: Vec<Rect>,
    map: WarpMap,
}

impl Snapshot {
    /// Rectangles as reported by the surface source, malformed ones included.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// The compiled map.
    pub fn map(&self) -> &WarpMap {
        &self.map
    }
}

/// Holds the current [`WarpMap`] and routes pointer samples through it.
///
/// Rebuilds and samples may come from different threads. Each snapshot is
/// replaced in a single atomic swap, so a sample is always dispatched against
/// one complete map, old or new.
///
/// [`sync`](Self::sync) and [`shutdown`](Self::shutdown) are serialized, so
/// the listener state always ends up matching the stored map.
#[derive(Debug)]
pub struct Bridge {
    config: BridgeConfig,
    current: ArcSwap<Snapshot>,
    listening: AtomicBool,
    /// Held across refresh and listener updates in `sync` and `shutdown`.
    lifecycle: Mutex<()>,
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl Bridge {
    /// Create a bridge with an empty layout. Nothing warps until the first
    /// [`refresh`](Self::refresh) with at least two surfaces.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            current: ArcSwap::from_pointee(Snapshot::default()),
            listening: AtomicBool::new(false),
            lifecycle: Mutex::new(()),
        }
    }

    /// The configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Recompile if `rects` differ from the previous rectangles.
    ///
    /// Rectangles are compared element-wise in order; a reordering counts as a
    /// change since it can change the reference surface.
    pub fn refresh(&self, rects: &[Rect]) -> Refresh {
        if self.current.load().rects == rects {
            return Refresh::Unchanged;
        }
        let layout = Layout::from_rects(rects.iter().copied());
        let map = WarpMap::with_options(layout, self.config.compile);
        let zones = map.len();
        let bridging = !map.is_empty();
        self.current.store(Arc::new(Snapshot {
            rects: rects.to_vec(),
            map,
        }));
        tracing::debug!(surfaces = rects.len(), zones, bridging, "rebuilt warp map");
        Refresh::Rebuilt { zones, bridging }
    }

    /// Refresh from `source`, then start or stop `listener` so that it runs
    /// exactly when the current map can bridge.
    ///
    /// A bare [`refresh`](Self::refresh) never touches the listener; the next
    /// `sync` catches up with it.
    pub fn sync<S, L>(&self, source: &mut S, listener: &mut L) -> Refresh
    where
        S: SurfaceSource + ?Sized,
        L: Listener + ?Sized,
    {
        let _lifecycle = self.lifecycle.lock();
        let rects = source.surfaces();
        let refresh = self.refresh(&rects);
        self.set_listening(self.is_bridging(), listener);
        refresh
    }

    /// Stop `listener` if it is running. Call once when the host shuts down.
    pub fn shutdown<L: Listener + ?Sized>(&self, listener: &mut L) {
        let _lifecycle = self.lifecycle.lock();
        self.set_listening(false, listener);
    }

    /// Relocation target for a pointer sample, if any.
    pub fn dispatch(&self, point: Point) -> Option<Point> {
        self.current.load().map.dispatch(point)
    }

    /// Dispatch a sample and hand a match to `warp`. Returns whether the
    /// pointer was relocated.
    pub fn handle_sample<W: PointerWarp + ?Sized>(&self, point: Point, warp: &mut W) -> bool {
        let snapshot = self.current.load();
        let Some(target) = snapshot.map.dispatch(point) else {
            return false;
        };
        tracing::trace!(from = ?point, to = ?target, "warping pointer");
        warp.warp_to(target, snapshot.map.layout());
        true
    }

    /// Whether the listener is currently running.
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }

    /// Whether the current map has any zones.
    pub fn is_bridging(&self) -> bool {
        !self.current.load().map.is_empty()
    }

    /// Number of zones in the current map.
    pub fn zone_count(&self) -> usize {
        self.current.load().map.len()
    }

    /// The current snapshot. Holding it does not block rebuilds.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    fn set_listening<L: Listener + ?Sized>(&self, on: bool, listener: &mut L) {
        let was = self.listening.swap(on, Ordering::AcqRel);
        match (was, on) {
            (false, true) => {
                tracing::info!("bridging enabled, starting pointer listener");
                listener.start();
            }
            (true, false) => {
                tracing::info!("bridging disabled, stopping pointer listener");
                listener.stop();
            }
            _ => {}
        }
    }
}
