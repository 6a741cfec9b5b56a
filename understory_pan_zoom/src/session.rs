// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::bindings::GestureMode;
use crate::input::PointerButton;

/// State of one in-flight pointer gesture.
///
/// Created on a claimed pointer-down and dropped on pointer-up or
/// cancellation. The down points never change during the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    mode: GestureMode,
    button: PointerButton,
    viewport_down_point: Point,
    content_down_point: Point,
    last_viewport_point: Point,
}

impl GestureSession {
    pub(crate) fn begin(
        mode: GestureMode,
        button: PointerButton,
        viewport_down_point: Point,
        content_down_point: Point,
    ) -> Self {
        debug_assert!(mode != GestureMode::None, "sessions are only created for active modes");
        Self {
            mode,
            button,
            viewport_down_point,
            content_down_point,
            last_viewport_point: viewport_down_point,
        }
    }

    /// Mode entered on pointer-down.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Button that started the gesture.
    #[must_use]
    pub fn button(&self) -> PointerButton {
        self.button
    }

    /// Pointer position at pointer-down, in viewport space.
    #[must_use]
    pub fn viewport_down_point(&self) -> Point {
        self.viewport_down_point
    }

    /// Pointer position at pointer-down, converted to content space through the
    /// transform as it was then.
    #[must_use]
    pub fn content_down_point(&self) -> Point {
        self.content_down_point
    }

    /// Last pointer position seen during the gesture, in viewport space.
    #[must_use]
    pub fn last_viewport_point(&self) -> Point {
        self.last_viewport_point
    }

    /// Viewport-space distance travelled since pointer-down.
    #[must_use]
    pub fn viewport_travel(&self) -> Vec2 {
        self.last_viewport_point - self.viewport_down_point
    }

    pub(crate) fn record_move(&mut self, viewport_point: Point) {
        self.last_viewport_point = viewport_point;
    }

    /// Content-space drag of `current` relative to the down point.
    pub(crate) fn drag_offset(&self, current: Point) -> Vec2 {
        current - self.content_down_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_records_down_points() {
        let s = GestureSession::begin(
            GestureMode::Panning,
            PointerButton::Primary,
            Point::new(10.0, 20.0),
            Point::new(5.0, 10.0),
        );
        assert_eq!(s.mode(), GestureMode::Panning);
        assert_eq!(s.button(), PointerButton::Primary);
        assert_eq!(s.viewport_down_point(), Point::new(10.0, 20.0));
        assert_eq!(s.content_down_point(), Point::new(5.0, 10.0));
        assert_eq!(s.last_viewport_point(), Point::new(10.0, 20.0));
        assert_eq!(s.viewport_travel(), Vec2::ZERO);
    }

    #[test]
    fn moves_update_travel_but_not_down_points() {
        let mut s = GestureSession::begin(
            GestureMode::Zooming,
            PointerButton::Secondary,
            Point::new(100.0, 100.0),
            Point::new(50.0, 50.0),
        );
        s.record_move(Point::new(90.0, 130.0));
        assert_eq!(s.viewport_travel(), Vec2::new(-10.0, 30.0));
        assert_eq!(s.content_down_point(), Point::new(50.0, 50.0));
        assert_eq!(s.drag_offset(Point::new(52.0, 47.5)), Vec2::new(2.0, -2.5));
    }
}
