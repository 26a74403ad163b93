// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use veranda_overlay::{Side, position};

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

/// Triggers scattered across the viewport interior: mostly unclamped.
fn gen_interior_triggers(count: usize, viewport: Size) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = 200.0 + rng.next_f64() * (viewport.width - 400.0);
        let y0 = 200.0 + rng.next_f64() * (viewport.height - 400.0);
        out.push(Rect::from_origin_size((x0, y0), (50.0, 20.0)));
    }
    out
}

/// Triggers hugging the viewport edges: every reposition clamps.
fn gen_edge_triggers(count: usize, viewport: Size) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for i in 0..count {
        let along = rng.next_f64();
        let r = match i % 4 {
            0 => Rect::from_origin_size((0.0, along * viewport.height), (50.0, 20.0)),
            1 => Rect::from_origin_size((viewport.width - 50.0, along * viewport.height), (50.0, 20.0)),
            2 => Rect::from_origin_size((along * viewport.width, 0.0), (50.0, 20.0)),
            _ => Rect::from_origin_size((along * viewport.width, viewport.height - 20.0), (50.0, 20.0)),
        };
        out.push(r);
    }
    out
}

fn bench_reposition(c: &mut Criterion) {
    let viewport = Size::new(1000.0, 800.0);
    let overlay = Size::new(200.0, 100.0);
    let sides = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    let mut group = c.benchmark_group("reposition");
    for &count in &[256usize, 4096] {
        let interior = gen_interior_triggers(count, viewport);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("interior_n{}", count), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for (i, t) in interior.iter().enumerate() {
                    let p = position::reposition(*t, overlay, sides[i % 4], viewport, 8.0);
                    acc += p.x + p.y;
                }
                black_box(acc);
            })
        });

        let edges = gen_edge_triggers(count, viewport);
        group.bench_function(format!("clamped_n{}", count), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for (i, t) in edges.iter().enumerate() {
                    let p = position::reposition(*t, overlay, sides[i % 4], viewport, 8.0);
                    acc += p.x + p.y;
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reposition);
criterion_main!(benches);
