// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing transform abstraction and the anchor-preserving rescale.

use kurbo::{Point, Vec2};

/// Error returned when a rescale targets a scale that is not strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("content scale must be strictly positive and finite, got {scale}")]
pub struct NonPositiveScale {
    /// The rejected target scale.
    pub scale: f64,
}

/// Mutable scale/offset state of a content surface shown through a viewport.
///
/// The mapping between the two spaces is
///
/// ```text
/// viewport = (content - offset) * scale
/// content  = viewport / scale + offset
/// ```
///
/// where `offset` is the content-space point shown at the viewport's top-left
/// corner. Implementations must keep `content_scale() > 0`.
///
/// Hosts that map pointer positions differently (for example because the
/// content is centered while smaller than the viewport) can override
/// [`pointer_to_content`](Self::pointer_to_content) and
/// [`content_to_viewport`](Self::content_to_viewport); the two must stay
/// inverses of each other.
pub trait ViewportTransform {
    /// Current zoom factor.
    fn content_scale(&self) -> f64;

    /// Commits a new zoom factor.
    ///
    /// Callers only pass strictly positive values. Implementations may clamp
    /// the value; [`content_scale`](Self::content_scale) reports what was
    /// actually committed.
    fn set_content_scale(&mut self, scale: f64);

    /// Content-space point shown at the viewport origin.
    fn content_offset(&self) -> Point;

    /// Moves the viewport origin to a new content-space point.
    fn set_content_offset(&mut self, offset: Point);

    /// The reference "100%" scale.
    fn normal_scale(&self) -> f64;

    /// Converts a viewport-space point into content space.
    fn pointer_to_content(&self, viewport_point: Point) -> Point {
        let scale = self.content_scale();
        self.content_offset() + viewport_point.to_vec2() / scale
    }

    /// Converts a content-space point into viewport space.
    fn content_to_viewport(&self, content_point: Point) -> Point {
        ((content_point - self.content_offset()) * self.content_scale()).to_point()
    }

    /// Shifts the offset by a content-space vector.
    fn offset_by(&mut self, delta: Vec2) {
        let offset = self.content_offset();
        self.set_content_offset(offset + delta);
    }

    /// Rescales to `new_scale` while keeping `content_center` under the same
    /// viewport pixel.
    ///
    /// Non-positive or non-finite targets are rejected before anything is
    /// mutated. The offset is derived from the scale the implementation
    /// actually committed, so clamping hosts still keep the anchor fixed.
    fn zoom_about_point(
        &mut self,
        new_scale: f64,
        content_center: Point,
    ) -> Result<(), NonPositiveScale> {
        if !(new_scale > 0.0 && new_scale.is_finite()) {
            return Err(NonPositiveScale { scale: new_scale });
        }
        let anchor_view = self.content_to_viewport(content_center);
        self.set_content_scale(new_scale);
        let committed = self.content_scale();
        self.set_content_offset(content_center - anchor_view.to_vec2() / committed);
        Ok(())
    }
}
