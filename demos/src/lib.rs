// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the demos: a scripted input stream and a replay loop.

use kurbo::Point;
use understory_pan_zoom::{
    Modifiers, PanZoomController, PointerButton, PointerButtonEvent, PointerMoveEvent,
    ViewportHost, ViewportTransform, WheelEvent, ZoomError,
};

/// One scripted input, in viewport coordinates.
#[derive(Clone, Copy, Debug)]
pub enum Input {
    /// Change the held modifiers.
    Modifiers(Modifiers),
    /// Button press.
    Down(Point, PointerButton),
    /// Pointer move.
    Move(Point),
    /// Button release.
    Up(Point, PointerButton),
    /// Wheel tick.
    Wheel(Point, f64),
    /// Involuntary loss of capture.
    Cancel,
}

/// What happened to one scripted input.
#[derive(Debug)]
pub struct Step {
    /// The input.
    pub input: Input,
    /// Whether the controller claimed it, or why the zoom failed.
    pub handled: Result<bool, ZoomError>,
    /// Scale after the input.
    pub scale: f64,
    /// Offset after the input.
    pub offset: Point,
}

/// Feeds `script` through `controller`, recording the transform after each input.
pub fn replay<T: ViewportTransform>(
    controller: &mut PanZoomController,
    host: &mut ViewportHost<T>,
    script: &[Input],
) -> Vec<Step> {
    script
        .iter()
        .map(|&input| {
            let handled = match input {
                Input::Modifiers(m) => {
                    host.set_modifiers(m);
                    Ok(false)
                }
                Input::Down(p, b) => Ok(controller.on_pointer_down(host, &PointerButtonEvent::new(p, b))),
                Input::Move(p) => Ok(controller.on_pointer_move(host, &PointerMoveEvent::new(p))),
                Input::Up(p, b) => controller.on_pointer_up(host, &PointerButtonEvent::new(p, b)),
                Input::Wheel(p, delta) => controller.on_wheel(host, &WheelEvent::new(p, delta)),
                Input::Cancel => {
                    controller.cancel(host);
                    Ok(false)
                }
            };
            Step {
                input,
                handled,
                scale: host.content_scale(),
                offset: host.content_offset(),
            }
        })
        .collect()
}
