// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pan Zoom: pointer-driven pan and zoom for a content viewport.
//!
//! This crate turns raw pointer and wheel input into changes of a
//! [`ViewportTransform`] from `understory_view2d`:
//!
//! - Plain primary drag pans; the grabbed content point follows the pointer.
//! - Shift + primary click zooms in, Shift + secondary click zooms out, about
//!   the release point.
//! - The wheel zooms about the pointer.
//! - Holding Control selects finer zoom steps.
//!
//! It is split into two cooperating parts:
//!
//! - [`PanZoomController`]: the gesture state machine (`None`, `Panning`,
//!   `Zooming`), driven by a data-driven [`GestureBindings`] table.
//! - [`ZoomPolicy`]: the non-linear step computation, host overrides via
//!   [`ScaleOverrides`], and the anchored application of a step.
//!
//! Nothing here renders, owns focus, or persists state. The host implements
//! [`PanZoomHost`] (or wraps a transform in [`ViewportHost`]) to provide the
//! transform, pointer capture, and modifier state.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_pan_zoom::{
//!     Modifiers, PanZoomController, PointerButton, PointerButtonEvent, ViewportHost, WheelEvent,
//! };
//! use understory_view2d::{ContentViewport, ViewportTransform};
//!
//! let mut host = ViewportHost::new(ContentViewport::new(Size::new(800.0, 600.0)));
//! let mut controller = PanZoomController::new();
//!
//! // One wheel notch at the normal scale zooms in by a damped step.
//! let handled = controller
//!     .on_wheel(&mut host, &WheelEvent::new((400.0, 300.0), 120.0))
//!     .unwrap();
//! assert!(handled);
//! assert!((host.content_scale() - 1.05).abs() < 1e-12);
//!
//! // Shift + primary click zooms in about the click point.
//! host.set_modifiers(Modifiers::SHIFT);
//! let click = PointerButtonEvent::new((100.0, 100.0), PointerButton::Primary);
//! let anchor = host.pointer_to_content(Point::new(100.0, 100.0));
//! controller.on_pointer_down(&mut host, &click);
//! controller.on_pointer_up(&mut host, &click).unwrap();
//! let pixel = host.content_to_viewport(anchor);
//! assert!((pixel.x - 100.0).abs() < 1e-9 && (pixel.y - 100.0).abs() < 1e-9);
//! ```
//!
//! ## Overriding the step
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_pan_zoom::{PanZoomController, ViewportHost, ZoomError};
//! use understory_view2d::{ContentViewport, ViewportTransform};
//!
//! let mut host = ViewportHost::new(ContentViewport::new(Size::new(800.0, 600.0)));
//! let mut controller = PanZoomController::new();
//!
//! // Zoom in by a quarter of the current scale; zoom out is misconfigured.
//! let overrides = controller.policy_mut().overrides_mut();
//! overrides.set_zoom_in(|ctx| ctx.content_scale * 0.25);
//! overrides.set_zoom_out(|_| -1.0);
//!
//! controller.zoom_in_at(&mut host, Point::ZERO).unwrap();
//! assert_eq!(host.content_scale(), 1.25);
//!
//! let err = controller.zoom_out_at(&mut host, Point::ZERO).unwrap_err();
//! assert!(matches!(err, ZoomError::InvalidScaleDelta { .. }));
//! assert_eq!(host.content_scale(), 1.25);
//! ```
//!
//! ## Threading
//!
//! Everything is synchronous and expects events in temporal order from a
//! single dispatch thread. There is no internal locking.
//!
//! ## Logging
//!
//! Gesture transitions and pans are reported through `tracing` at `trace`
//! level, applied zooms at `debug`, and rejected zooms at `warn`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod bindings;
mod controller;
mod error;
mod host;
mod input;
pub mod policy;
mod session;

pub use bindings::{GestureBinding, GestureBindings, GestureMode};
pub use controller::PanZoomController;
pub use error::ZoomError;
pub use host::{PanZoomHost, ViewportHost};
pub use input::{Modifiers, PointerButton, PointerButtonEvent, PointerMoveEvent, WheelEvent};
pub use policy::{
    ScaleOverrideFn, ScaleOverrides, ZoomContext, ZoomDirection, ZoomOutcome, ZoomPolicy,
    ZoomPolicyConfig, ZoomRequest,
};
pub use session::GestureSession;
pub use understory_view2d::{NonPositiveScale, ViewportTransform};
