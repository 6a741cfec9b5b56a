// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_view2d::ViewportTransform;

use crate::input::Modifiers;

/// Services the controller needs from the widget that hosts it.
///
/// The transform part comes from [`ViewportTransform`]; this trait adds
/// pointer capture and the modifier query.
pub trait PanZoomHost: ViewportTransform {
    /// Routes all further pointer events to this widget until released, even
    /// when the pointer leaves its bounds.
    fn capture_pointer(&mut self);

    /// Ends a capture started by [`PanZoomHost::capture_pointer`].
    fn release_pointer(&mut self);

    /// Modifiers held right now.
    fn modifiers(&self) -> Modifiers;
}

/// Adapts any [`ViewportTransform`] into a [`PanZoomHost`].
///
/// Suitable for hosts that read modifiers from their own events: store them
/// with [`ViewportHost::set_modifiers`] before forwarding each event, then poll
/// [`ViewportHost::is_captured`] to drive the platform's capture API.
#[derive(Clone, Debug, Default)]
pub struct ViewportHost<T> {
    transform: T,
    modifiers: Modifiers,
    captured: bool,
}

impl<T: ViewportTransform> ViewportHost<T> {
    /// Wraps `transform` with no modifiers held and no capture.
    #[must_use]
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            modifiers: Modifiers::empty(),
            captured: false,
        }
    }

    /// The wrapped transform.
    #[must_use]
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// The wrapped transform, mutably.
    pub fn transform_mut(&mut self) -> &mut T {
        &mut self.transform
    }

    /// Unwraps the transform.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.transform
    }

    /// Records the modifiers that subsequent events are delivered with.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Whether the pointer is currently captured.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

impl<T: ViewportTransform> ViewportTransform for ViewportHost<T> {
    fn content_scale(&self) -> f64 {
        self.transform.content_scale()
    }

    fn set_content_scale(&mut self, scale: f64) {
        self.transform.set_content_scale(scale);
    }

    fn content_offset(&self) -> Point {
        self.transform.content_offset()
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.transform.set_content_offset(offset);
    }

    fn normal_scale(&self) -> f64 {
        self.transform.normal_scale()
    }

    fn pointer_to_content(&self, viewport_point: Point) -> Point {
        self.transform.pointer_to_content(viewport_point)
    }

    fn content_to_viewport(&self, content_point: Point) -> Point {
        self.transform.content_to_viewport(content_point)
    }
}

impl<T: ViewportTransform> PanZoomHost for ViewportHost<T> {
    fn capture_pointer(&mut self) {
        self.captured = true;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
