// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_pan_zoom::{
    Modifiers, PanZoomController, PointerButton, PointerButtonEvent, PointerMoveEvent,
    ViewportHost, WheelEvent,
};
use understory_view2d::{ContentViewport, ViewportTransform};

fn fresh_host() -> ViewportHost<ContentViewport> {
    ViewportHost::new(ContentViewport::new(Size::new(1920.0, 1080.0)))
}

fn bench_pan_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_zoom/pan");

    for moves in [16usize, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("drag", moves), &moves, |b, &moves| {
            b.iter_batched(
                || (fresh_host(), PanZoomController::new()),
                |(mut host, mut pz)| {
                    let down = PointerButtonEvent::new((960.0, 540.0), PointerButton::Primary);
                    pz.on_pointer_down(&mut host, &down);
                    for i in 0..moves {
                        let t = i as f64;
                        let ev = PointerMoveEvent::new((960.0 + t.sin() * 200.0, 540.0 + t * 0.1));
                        black_box(pz.on_pointer_move(&mut host, &ev));
                    }
                    black_box(host.content_offset());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_wheel_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_zoom/wheel");

    for (name, modifiers) in [("coarse", Modifiers::empty()), ("precise", Modifiers::CONTROL)] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut host = fresh_host();
                    host.set_modifiers(modifiers);
                    (host, PanZoomController::new())
                },
                |(mut host, mut pz)| {
                    // Alternate in and out so the scale stays in a realistic band.
                    for i in 0..64 {
                        let delta = if i % 2 == 0 { 120.0 } else { -120.0 };
                        let ev = WheelEvent::new((400.0 + f64::from(i), 300.0), delta);
                        let _ = black_box(pz.on_wheel(&mut host, &ev));
                    }
                    black_box(host.content_scale());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pan_moves, bench_wheel_zoom);
criterion_main!(benches);
