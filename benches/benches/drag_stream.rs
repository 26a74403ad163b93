// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use veranda_surface::{DismissController, DragEvent, SurfaceConfig};

/// A held drag of `moves` pointer samples oscillating around rest, ending a
/// little displaced so the release springs back.
fn gen_spring_back_stream(moves: usize) -> Vec<DragEvent> {
    let mut out = Vec::with_capacity(moves + 3);
    out.push(DragEvent::PointerDown);
    for i in 0..moves {
        let dx = if i % 2 == 0 { 12.0 } else { -12.0 };
        out.push(DragEvent::PointerMove { dx });
    }
    out.push(DragEvent::PointerMove { dx: 30.0 });
    out.push(DragEvent::PointerUp);
    out
}

/// A touch gesture that crosses the threshold and commits.
fn gen_commit_stream(moves: usize) -> Vec<DragEvent> {
    let mut out = Vec::with_capacity(moves + 2);
    out.push(DragEvent::TouchStart { touch_count: 1 });
    for i in 0..moves {
        out.push(DragEvent::TouchMove {
            x: (i as f64) * (260.0 / moves as f64),
            touch_count: 1,
        });
    }
    out.push(DragEvent::TouchEnd { touch_count: 0 });
    out
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_stream");
    for &moves in &[64usize, 1024] {
        let spring = gen_spring_back_stream(moves);
        group.throughput(Throughput::Elements(spring.len() as u64));
        group.bench_function(format!("spring_back_n{}", moves), |b| {
            b.iter_batched(
                || DismissController::new(SurfaceConfig::new(800.0)),
                |mut ctl| {
                    let mut emitted = 0usize;
                    for (i, ev) in spring.iter().enumerate() {
                        emitted += ctl.handle(*ev, i as f64 * 16.0).len();
                    }
                    black_box(emitted);
                },
                BatchSize::SmallInput,
            )
        });

        let commit = gen_commit_stream(moves);
        group.bench_function(format!("commit_n{}", moves), |b| {
            b.iter_batched(
                || DismissController::new(SurfaceConfig::new(800.0)),
                |mut ctl| {
                    let mut emitted = 0usize;
                    for (i, ev) in commit.iter().enumerate() {
                        emitted += ctl.handle(*ev, i as f64 * 16.0).len();
                    }
                    emitted += ctl.frame(100_000.0).len();
                    black_box(emitted);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag_stream);
criterion_main!(benches);
