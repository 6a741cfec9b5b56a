// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! ## Usage
//!
//! 1) Forward pointer-down, move, up and wheel events to the matching
//!    `on_*` method together with the host.
//! 2) Stop the host's default handling when a method reports `true`.
//! 3) Call [`PanZoomController::cancel`] when capture is lost involuntarily or
//!    the window is deactivated.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_pan_zoom::{
//!     GestureMode, PanZoomController, PointerButton, PointerButtonEvent, PointerMoveEvent,
//!     ViewportHost,
//! };
//! use understory_view2d::{ContentViewport, ViewportTransform};
//!
//! let mut host = ViewportHost::new(ContentViewport::new(Size::new(800.0, 600.0)));
//! let mut pz = PanZoomController::new();
//!
//! // Plain primary drag from (100, 100) to (130, 90) pans.
//! assert!(pz.on_pointer_down(&mut host, &PointerButtonEvent::new((100.0, 100.0), PointerButton::Primary)));
//! assert_eq!(pz.mode(), GestureMode::Panning);
//! assert!(pz.on_pointer_move(&mut host, &PointerMoveEvent::new((130.0, 90.0))));
//! assert!(pz.on_pointer_up(&mut host, &PointerButtonEvent::new((130.0, 90.0), PointerButton::Primary)).unwrap());
//!
//! // The content followed the pointer.
//! assert_eq!(host.content_offset(), kurbo::Point::new(-30.0, 10.0));
//! assert_eq!(pz.mode(), GestureMode::None);
//! ```

use kurbo::Point;
use tracing::trace;

use crate::bindings::{GestureBindings, GestureMode};
use crate::error::ZoomError;
use crate::host::PanZoomHost;
use crate::input::{Modifiers, PointerButton, PointerButtonEvent, PointerMoveEvent, WheelEvent};
use crate::policy::{ZoomDirection, ZoomOutcome, ZoomPolicy, ZoomRequest};
use crate::session::GestureSession;

/// Pan/zoom gesture state machine.
///
/// Holds at most one [`GestureSession`]; the controller is idle when there is
/// none. All methods run to completion synchronously and must be called from
/// the host's event-dispatch thread in event order.
#[derive(Debug, Default)]
pub struct PanZoomController {
    bindings: GestureBindings,
    policy: ZoomPolicy,
    session: Option<GestureSession>,
}

impl PanZoomController {
    /// Creates an idle controller with the default bindings and policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pointer-down transition table, builder style.
    #[must_use]
    pub fn with_bindings(mut self, bindings: GestureBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Replaces the zoom policy, builder style.
    #[must_use]
    pub fn with_policy(mut self, policy: ZoomPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the pointer-down transition table.
    #[must_use]
    pub fn bindings(&self) -> &GestureBindings {
        &self.bindings
    }

    /// Replaces the pointer-down transition table.
    ///
    /// An active gesture keeps the mode it started with.
    pub fn set_bindings(&mut self, bindings: GestureBindings) {
        self.bindings = bindings;
    }

    /// Returns the zoom policy.
    #[must_use]
    pub fn policy(&self) -> &ZoomPolicy {
        &self.policy
    }

    /// Returns the zoom policy for modification, for example to register
    /// scale overrides.
    pub fn policy_mut(&mut self) -> &mut ZoomPolicy {
        &mut self.policy
    }

    /// Current mode; [`GestureMode::None`] when idle.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.session.map_or(GestureMode::None, |s| s.mode())
    }

    /// The in-flight gesture, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Handles a button press. Returns whether the event was claimed.
    ///
    /// A press that matches the bindings starts a gesture and captures the
    /// pointer. A press while a gesture is already active is swallowed without
    /// starting another one. Anything else is left to the host.
    pub fn on_pointer_down<H: PanZoomHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerButtonEvent,
    ) -> bool {
        if let Some(active) = &self.session {
            trace!(
                active = ?active.mode(),
                button = ?event.button,
                "pointer down during active gesture ignored"
            );
            return true;
        }
        let modifiers = host.modifiers();
        let Some(mode) = self.bindings.resolve(event.button, modifiers) else {
            trace!(button = ?event.button, ?modifiers, "pointer down not claimed");
            return false;
        };
        let content_down = host.pointer_to_content(event.position);
        self.session = Some(GestureSession::begin(
            mode,
            event.button,
            event.position,
            content_down,
        ));
        host.capture_pointer();
        trace!(?mode, button = ?event.button, x = event.position.x, y = event.position.y, "gesture started");
        true
    }

    /// Handles a pointer move. Returns whether the event was claimed.
    ///
    /// While panning, the offset is shifted so that the content point grabbed
    /// at pointer-down is back under the pointer. No clamping happens here;
    /// that is the transform's business.
    pub fn on_pointer_move<H: PanZoomHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerMoveEvent,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.record_move(event.position);
        if session.mode() != GestureMode::Panning {
            return false;
        }
        let current = host.pointer_to_content(event.position);
        let drag = session.drag_offset(current);
        host.offset_by(-drag);
        trace!(dx = drag.x, dy = drag.y, "pan");
        true
    }

    /// Handles a button release. Returns whether the event was claimed.
    ///
    /// Ends any active gesture and releases the capture. A zooming gesture
    /// started with the primary button zooms in about the release point, one
    /// started with the secondary button zooms out. A step that would take the
    /// scale to zero or below is skipped. If a scale override is misconfigured
    /// the gesture is still over and the error is returned.
    pub fn on_pointer_up<H: PanZoomHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerButtonEvent,
    ) -> Result<bool, ZoomError> {
        let Some(session) = self.session.take() else {
            return Ok(false);
        };
        let direction = match (session.mode(), session.button()) {
            (GestureMode::Zooming, PointerButton::Primary) => Some(ZoomDirection::In),
            (GestureMode::Zooming, PointerButton::Secondary) => Some(ZoomDirection::Out),
            _ => None,
        };
        let result = match direction {
            Some(direction) => {
                let anchor = host.pointer_to_content(event.position);
                self.zoom_from_input(host, ZoomRequest { anchor, direction })
            }
            None => Ok(()),
        };
        host.release_pointer();
        trace!(mode = ?session.mode(), "gesture ended");
        result.map(|()| true)
    }

    /// Handles a wheel tick. Always claims the event.
    ///
    /// Works regardless of any active gesture. A zero delta, or a step that
    /// would take the scale to zero or below, does nothing but is still
    /// claimed. Only a misconfigured scale override is reported as an error.
    pub fn on_wheel<H: PanZoomHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &WheelEvent,
    ) -> Result<bool, ZoomError> {
        let direction = if event.delta > 0.0 {
            ZoomDirection::In
        } else if event.delta < 0.0 {
            ZoomDirection::Out
        } else {
            return Ok(true);
        };
        let anchor = host.pointer_to_content(event.position);
        self.zoom_from_input(host, ZoomRequest { anchor, direction })?;
        Ok(true)
    }

    /// Zoom driven by user input: running out of scale is a no-op, override
    /// bugs still propagate.
    fn zoom_from_input<H: PanZoomHost + ?Sized>(
        &self,
        host: &mut H,
        request: ZoomRequest,
    ) -> Result<(), ZoomError> {
        match self.zoom(host, request) {
            Ok(_) | Err(ZoomError::NonPositiveScale(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Abandons the active gesture, if any, and releases the capture.
    ///
    /// Nothing is applied to the transform.
    pub fn cancel<H: PanZoomHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(session) = self.session.take() {
            host.release_pointer();
            trace!(mode = ?session.mode(), "gesture cancelled");
        }
    }

    /// Applies a zoom request using the host's current modifiers.
    pub fn zoom<H: PanZoomHost + ?Sized>(
        &self,
        host: &mut H,
        request: ZoomRequest,
    ) -> Result<ZoomOutcome, ZoomError> {
        let precise = host.modifiers().contains(Modifiers::CONTROL);
        self.policy.apply(host, request, precise)
    }

    /// Zooms in one step about a content-space point.
    pub fn zoom_in_at<H: PanZoomHost + ?Sized>(
        &self,
        host: &mut H,
        content_point: Point,
    ) -> Result<ZoomOutcome, ZoomError> {
        self.zoom(host, ZoomRequest::new(content_point, ZoomDirection::In))
    }

    /// Zooms out one step about a content-space point.
    pub fn zoom_out_at<H: PanZoomHost + ?Sized>(
        &self,
        host: &mut H,
        content_point: Point,
    ) -> Result<ZoomOutcome, ZoomError> {
        self.zoom(host, ZoomRequest::new(content_point, ZoomDirection::Out))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use understory_view2d::{ContentViewport, ViewportTransform};

    use super::*;
    use crate::host::ViewportHost;

    fn host() -> ViewportHost<ContentViewport> {
        ViewportHost::new(ContentViewport::new(Size::new(800.0, 600.0)))
    }

    fn down(x: f64, y: f64, button: PointerButton) -> PointerButtonEvent {
        PointerButtonEvent::new((x, y), button)
    }

    #[test]
    fn plain_secondary_down_is_not_claimed() {
        let mut h = host();
        let mut pz = PanZoomController::new();
        assert!(!pz.on_pointer_down(&mut h, &down(1.0, 1.0, PointerButton::Secondary)));
        assert_eq!(pz.mode(), GestureMode::None);
        assert!(!h.is_captured());
        assert!(!pz.on_pointer_up(&mut h, &down(1.0, 1.0, PointerButton::Secondary)).unwrap());
    }

    #[test]
    fn down_records_session_points() {
        let mut h = host();
        h.transform_mut().set_content_scale(2.0);
        h.transform_mut().set_content_offset(Point::new(10.0, 10.0));
        let mut pz = PanZoomController::new();
        assert!(pz.on_pointer_down(&mut h, &down(40.0, 60.0, PointerButton::Primary)));
        let s = pz.session().unwrap();
        assert_eq!(s.viewport_down_point(), Point::new(40.0, 60.0));
        assert_eq!(s.content_down_point(), Point::new(30.0, 40.0));
        assert!(h.is_captured());
    }

    #[test]
    fn panning_move_keeps_grab_point_under_pointer() {
        let mut h = host();
        h.transform_mut().set_content_scale(2.0);
        let mut pz = PanZoomController::new();
        pz.on_pointer_down(&mut h, &down(100.0, 100.0, PointerButton::Primary));
        let grabbed = pz.session().unwrap().content_down_point();

        for (x, y) in [(120.0, 90.0), (60.0, 300.0), (-50.0, -20.0)] {
            assert!(pz.on_pointer_move(&mut h, &PointerMoveEvent::new((x, y))));
            let under = h.pointer_to_content(Point::new(x, y));
            assert!((under - grabbed).hypot() < 1e-9);
        }
        assert_eq!(pz.session().unwrap().viewport_travel(), Vec2::new(-150.0, -120.0));
    }

    #[test]
    fn move_without_gesture_or_while_zooming_is_not_claimed() {
        let mut h = host();
        let mut pz = PanZoomController::new();
        assert!(!pz.on_pointer_move(&mut h, &PointerMoveEvent::new((5.0, 5.0))));

        h.set_modifiers(Modifiers::SHIFT);
        pz.on_pointer_down(&mut h, &down(0.0, 0.0, PointerButton::Primary));
        assert!(!pz.on_pointer_move(&mut h, &PointerMoveEvent::new((50.0, 50.0))));
        assert_eq!(h.content_offset(), Point::ZERO);
    }

    #[test]
    fn shift_secondary_click_zooms_out_about_release_point() {
        let mut h = host();
        h.transform_mut().set_content_scale(2.0);
        h.set_modifiers(Modifiers::SHIFT);
        let mut pz = PanZoomController::new();
        pz.on_pointer_down(&mut h, &down(10.0, 10.0, PointerButton::Secondary));
        assert_eq!(pz.mode(), GestureMode::Zooming);

        let release = Point::new(200.0, 150.0);
        let anchor = h.pointer_to_content(release);
        assert!(pz.on_pointer_up(&mut h, &down(release.x, release.y, PointerButton::Secondary)).unwrap());
        assert!((h.content_scale() - 1.9).abs() < 1e-12);
        assert!((h.content_to_viewport(anchor) - release).hypot() < 1e-9);
        assert!(!h.is_captured());
    }

    #[test]
    fn failing_zoom_on_release_still_ends_gesture() {
        let mut h = host();
        h.set_modifiers(Modifiers::SHIFT);
        let mut pz = PanZoomController::new();
        pz.policy_mut().overrides_mut().set_zoom_in(|_| 0.0);
        pz.on_pointer_down(&mut h, &down(10.0, 10.0, PointerButton::Primary));

        let err = pz.on_pointer_up(&mut h, &down(10.0, 10.0, PointerButton::Primary));
        assert!(matches!(err, Err(ZoomError::InvalidScaleDelta { .. })));
        assert_eq!(pz.mode(), GestureMode::None);
        assert!(!h.is_captured());
        assert_eq!(h.content_scale(), 1.0);
    }

    #[test]
    fn shift_secondary_click_at_tiny_scale_is_claimed_noop() {
        let mut h = host();
        h.transform_mut().set_content_scale(0.015);
        h.set_modifiers(Modifiers::SHIFT);
        let mut pz = PanZoomController::new();
        pz.on_pointer_down(&mut h, &down(10.0, 10.0, PointerButton::Secondary));

        assert!(pz.on_pointer_up(&mut h, &down(10.0, 10.0, PointerButton::Secondary)).unwrap());
        assert_eq!(h.content_scale(), 0.015);
        assert_eq!(h.content_offset(), Point::ZERO);
        assert!(!h.is_captured());

        // Programmatic zoom still reports the rejection.
        assert!(matches!(
            pz.zoom_out_at(&mut h, Point::ZERO),
            Err(ZoomError::NonPositiveScale(_))
        ));
    }

    #[test]
    fn wheel_zero_is_claimed_noop() {
        let mut h = host();
        let mut pz = PanZoomController::new();
        assert!(pz.on_wheel(&mut h, &WheelEvent::new((3.0, 3.0), 0.0)).unwrap());
        assert_eq!(h.content_scale(), 1.0);
        assert_eq!(h.content_offset(), Point::ZERO);
    }

    #[test]
    fn wheel_down_zooms_out() {
        let mut h = host();
        h.transform_mut().set_content_scale(3.0);
        let mut pz = PanZoomController::new();
        assert!(pz.on_wheel(&mut h, &WheelEvent::new((400.0, 300.0), -120.0)).unwrap());
        assert!((h.content_scale() - 2.9).abs() < 1e-12);
    }

    #[test]
    fn cancel_releases_capture_and_applies_nothing() {
        let mut h = host();
        h.set_modifiers(Modifiers::SHIFT);
        let mut pz = PanZoomController::new();
        pz.on_pointer_down(&mut h, &down(10.0, 10.0, PointerButton::Primary));
        pz.cancel(&mut h);
        assert_eq!(pz.mode(), GestureMode::None);
        assert!(!h.is_captured());

        assert!(!pz.on_pointer_up(&mut h, &down(10.0, 10.0, PointerButton::Primary)).unwrap());
        assert_eq!(h.content_scale(), 1.0);

        // Cancelling while idle is harmless.
        pz.cancel(&mut h);
        assert!(!h.is_captured());
    }

    #[test]
    fn programmatic_zoom_uses_precise_modifier() {
        let mut h = host();
        let pz = PanZoomController::new();
        h.set_modifiers(Modifiers::CONTROL);
        let out = pz.zoom_in_at(&mut h, Point::new(20.0, 20.0)).unwrap();
        assert!((out.new_scale - 1.005).abs() < 1e-12);
        h.set_modifiers(Modifiers::empty());
        let out = pz.zoom_out_at(&mut h, Point::new(20.0, 20.0)).unwrap();
        assert!((out.previous_scale - 1.005).abs() < 1e-12);
        assert!((out.new_scale - 0.955).abs() < 1e-12);
    }
}
