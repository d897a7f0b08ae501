// Copyright 2025 the Seam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use seam_zones::{CompileOptions, Directions, Layout, compile};

/// A row of `n` surfaces, each shifted vertically and separated by a gap.
fn gen_staggered_row(n: usize, size: f64, gap: f64) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let x0 = i as f64 * (size + gap);
            let y0 = (i % 3) as f64 * size * 0.4;
            Rect::new(x0, y0, x0 + size, y0 + size)
        })
        .collect()
}

/// An `n` x `n` grid where every other surface is shrunk, leaving ragged gaps.
fn gen_ragged_grid(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            let inset = if (x + y) % 2 == 0 { 0.0 } else { cell * 0.25 };
            out.push(Rect::new(x0 + inset, y0, x0 + cell - 1.0, y0 + cell - inset));
        }
    }
    out
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for &n in &[2_usize, 4, 8] {
        let rects = gen_staggered_row(n, 1000.0, 200.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("staggered_row_{n}"), |b| {
            b.iter_batched(
                || Layout::from_rects(rects.iter().copied()),
                |layout| black_box(compile(&layout, CompileOptions::default())),
                BatchSize::SmallInput,
            );
        });
    }
    for &n in &[2_usize, 3, 4] {
        let layout = Layout::from_rects(gen_ragged_grid(n, 1000.0));
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("ragged_grid_{n}x{n}"), |b| {
            b.iter(|| black_box(compile(&layout, CompileOptions::default())));
        });
        let horizontal = CompileOptions {
            directions: Directions::HORIZONTAL,
            ..CompileOptions::default()
        };
        group.bench_function(format!("ragged_grid_{n}x{n}_horizontal"), |b| {
            b.iter(|| black_box(compile(&layout, horizontal)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
