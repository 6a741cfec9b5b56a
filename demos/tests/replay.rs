// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays short scripts and checks the recorded steps.

use kurbo::{Point, Size};
use understory_demos::{Input, replay};
use understory_pan_zoom::{Modifiers, PanZoomController, PointerButton, ViewportHost};
use understory_view2d::ContentViewport;

fn host() -> ViewportHost<ContentViewport> {
    ViewportHost::new(ContentViewport::new(Size::new(200.0, 200.0)))
}

#[test]
fn drag_then_wheel_records_each_transform() {
    let mut h = host();
    let mut pz = PanZoomController::new();
    let steps = replay(
        &mut pz,
        &mut h,
        &[
            Input::Down(Point::new(50.0, 50.0), PointerButton::Primary),
            Input::Move(Point::new(60.0, 40.0)),
            Input::Up(Point::new(60.0, 40.0), PointerButton::Primary),
            Input::Wheel(Point::new(0.0, 0.0), 120.0),
        ],
    );

    assert_eq!(steps.len(), 4);
    assert!(steps.iter().all(|s| matches!(s.handled, Ok(true))));
    assert_eq!(steps[1].offset, Point::new(-10.0, 10.0));
    assert_eq!(steps[2].offset, Point::new(-10.0, 10.0));
    assert!((steps[3].scale - 1.05).abs() < 1e-12);
}

#[test]
fn modifiers_and_cancel_are_not_claimed() {
    let mut h = host();
    let mut pz = PanZoomController::new();
    let steps = replay(
        &mut pz,
        &mut h,
        &[
            Input::Modifiers(Modifiers::SHIFT),
            Input::Down(Point::new(10.0, 10.0), PointerButton::Secondary),
            Input::Cancel,
            Input::Up(Point::new(10.0, 10.0), PointerButton::Secondary),
        ],
    );

    assert!(matches!(steps[0].handled, Ok(false)));
    assert!(matches!(steps[1].handled, Ok(true)));
    assert!(matches!(steps[2].handled, Ok(false)));
    assert!(matches!(steps[3].handled, Ok(false)));
    assert_eq!(steps[3].scale, 1.0);
    assert!(!h.is_captured());
}
