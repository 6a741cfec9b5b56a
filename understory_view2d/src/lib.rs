// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory View 2D: scale/offset state of a content surface behind a viewport.
//!
//! This crate provides the headless transform model that pan/zoom
//! controllers drive. It focuses on:
//! - The [`ViewportTransform`] abstraction a host implements over its own
//!   scale/offset state.
//! - Coordinate conversion between viewport (pixel) and content space.
//! - Anchor-preserving rescale ("zoom toward the cursor").
//! - [`ContentViewport`], a ready-made implementation with optional scale
//!   limits and content-bounds clamping.
//!
//! It does **not** interpret input events. Wire pointer and wheel input into
//! a controller such as `understory_pan_zoom`, which mutates a
//! [`ViewportTransform`].
//!
//! ## Coordinate model
//!
//! The offset is the content-space point shown at the viewport's top-left
//! corner, and the scale is the number of viewport pixels per content unit:
//!
//! ```text
//! viewport = (content - offset) * scale
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_view2d::{ContentViewport, ViewportTransform};
//!
//! let mut view = ContentViewport::new(Size::new(800.0, 600.0));
//!
//! // Zoom to 2x while keeping the content point (100, 100) under the same pixel.
//! let anchor = Point::new(100.0, 100.0);
//! let pixel = view.content_to_viewport(anchor);
//! view.zoom_about_point(2.0, anchor).unwrap();
//!
//! let after = view.content_to_viewport(anchor);
//! assert!((after.x - pixel.x).abs() < 1e-9);
//! assert!((after.y - pixel.y).abs() < 1e-9);
//!
//! // The viewport now shows half as much content.
//! assert_eq!(view.content_viewport_size(), Size::new(400.0, 300.0));
//! ```
//!
//! ## Design notes
//!
//! - Scaling is uniform and axis-aligned; there is no rotation.
//! - Scale must stay strictly positive; [`ViewportTransform::zoom_about_point`]
//!   rejects anything else with [`NonPositiveScale`] before mutating state.
//! - Clamping is a host policy. [`ContentViewport`] offers it, the trait does
//!   not require it.
//!
//! This crate is `no_std`.

#![no_std]

mod content_viewport;
mod modes;
mod transform;

pub use content_viewport::{ContentViewport, ContentViewportDebugInfo};
pub use modes::ClampMode;
pub use transform::{NonPositiveScale, ViewportTransform};
