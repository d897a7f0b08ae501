// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use seam_zones::WarpMap;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_staggered_row(n: usize, size: f64, gap: f64) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let x0 = i as f64 * (size + gap);
            let y0 = (i % 3) as f64 * size * 0.4;
            Rect::new(x0, y0, x0 + size, y0 + size)
        })
        .collect()
}

/// Samples anywhere in the layout's bounding box.
fn gen_interior_samples(rects: &[Rect], count: usize, seed: u64) -> Vec<Point> {
    let bounds = rects.iter().fold(Rect::ZERO, |acc, r| acc.union(*r));
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            Point::new(
                bounds.x0 + rng.next_f64() * bounds.width(),
                bounds.y0 + rng.next_f64() * bounds.height(),
            )
        })
        .collect()
}

/// Samples sitting on the zone strips, so every one of them warps.
fn gen_strip_samples(map: &WarpMap, count: usize, seed: u64) -> Vec<Point> {
    let zones = map.zones();
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let zone = &zones[(rng.next_u64() as usize) % zones.len()];
            let (lo, hi) = zone.range();
            let across = (lo + rng.next_f64() * (hi - lo - 1.0).max(0.0)).floor();
            if zone.direction().is_horizontal() {
                Point::new(zone.boundary(), across)
            } else {
                Point::new(across, zone.boundary())
            }
        })
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[2_usize, 4, 8] {
        let rects = gen_staggered_row(n, 1000.0, 200.0);
        let map = WarpMap::from_rects(rects.iter().copied());

        let misses = gen_interior_samples(&rects, 1024, 0x5eed);
        group.throughput(Throughput::Elements(misses.len() as u64));
        group.bench_function(format!("interior_{n}"), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for p in &misses {
                    hits += usize::from(map.dispatch(black_box(*p)).is_some());
                }
                black_box(hits)
            });
        });

        let strips = gen_strip_samples(&map, 1024, 0xfeed);
        group.throughput(Throughput::Elements(strips.len() as u64));
        group.bench_function(format!("on_strip_{n}"), |b| {
            b.iter(|| {
                for p in &strips {
                    black_box(map.dispatch(black_box(*p)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
