// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pan/zoom session.
//!
//! Replays a short input stream through `understory_pan_zoom` against a
//! bounded `ContentViewport` and prints the transform after every input.
//!
//! Run:
//! - `cargo run -p understory_demos --example scripted_session`
//! - `RUST_LOG=understory_pan_zoom=trace cargo run -p understory_demos --example scripted_session`

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_demos::{Input, replay};
use understory_pan_zoom::{Modifiers, PanZoomController, PointerButton, ViewportHost};
use understory_view2d::ContentViewport;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut view = ContentViewport::new(Size::new(640.0, 480.0));
    view.set_content_bounds(Some(Rect::new(0.0, 0.0, 4000.0, 3000.0)));
    view.set_scale_limits(Some((0.1, 8.0)));
    let mut host = ViewportHost::new(view);

    let mut controller = PanZoomController::new();
    // Zoom out twice as fast as the default.
    controller
        .policy_mut()
        .overrides_mut()
        .set_zoom_out(|ctx| ctx.default_delta * 2.0);

    let p = Point::new;
    let script = [
        // Drag the content up-left by 100x50 pixels.
        Input::Down(p(320.0, 240.0), PointerButton::Primary),
        Input::Move(p(270.0, 215.0)),
        Input::Move(p(220.0, 190.0)),
        Input::Up(p(220.0, 190.0), PointerButton::Primary),
        // Wheel in three notches over the top-left quadrant.
        Input::Wheel(p(160.0, 120.0), 120.0),
        Input::Wheel(p(160.0, 120.0), 120.0),
        Input::Wheel(p(160.0, 120.0), 120.0),
        // Precise wheel out.
        Input::Modifiers(Modifiers::CONTROL),
        Input::Wheel(p(160.0, 120.0), -120.0),
        // Shift-click zoom in, shift-right-click zoom out.
        Input::Modifiers(Modifiers::SHIFT),
        Input::Down(p(400.0, 300.0), PointerButton::Primary),
        Input::Up(p(400.0, 300.0), PointerButton::Primary),
        Input::Down(p(400.0, 300.0), PointerButton::Secondary),
        Input::Up(p(400.0, 300.0), PointerButton::Secondary),
        // A drag that gets interrupted leaves no trace.
        Input::Modifiers(Modifiers::empty()),
        Input::Down(p(100.0, 100.0), PointerButton::Primary),
        Input::Cancel,
        Input::Move(p(500.0, 500.0)),
        // Middle button is not ours.
        Input::Down(p(10.0, 10.0), PointerButton::Auxiliary),
    ];

    for step in replay(&mut controller, &mut host, &script) {
        let handled = match &step.handled {
            Ok(true) => "handled".to_string(),
            Ok(false) => "-".to_string(),
            Err(err) => format!("error: {err}"),
        };
        println!(
            "{:<48} {:<10} scale={:.4} offset=({:.2}, {:.2})",
            format!("{:?}", step.input),
            handled,
            step.scale,
            step.offset.x,
            step.offset.y
        );
    }

    let info = host.transform().debug_info();
    println!("visible content: {:?}", info.visible_content_rect);
}
