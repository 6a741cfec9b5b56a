// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::ClampMode;
use crate::transform::ViewportTransform;

/// A fixed-size viewport looking at a scaled content surface.
///
/// `ContentViewport` is a ready-made [`ViewportTransform`] for hosts that do
/// not already own scale/offset state. On top of the bare transform it can:
/// - Clamp committed scales into optional `[min, max]` limits.
/// - Keep the visible region overlapping optional content bounds.
/// - Report the visible content rectangle for culling.
#[derive(Clone, Debug)]
pub struct ContentViewport {
    viewport_size: Size,
    scale: f64,
    offset: Point,
    normal_scale: f64,
    scale_limits: Option<(f64, f64)>,
    content_bounds: Option<Rect>,
    clamp_mode: ClampMode,
}

impl ContentViewport {
    /// Creates a viewport of `viewport_size` pixels.
    ///
    /// - Scale and normal scale start at `1.0`.
    /// - The offset starts at the content origin.
    /// - No scale limits and no content bounds are set.
    #[must_use]
    pub fn new(viewport_size: Size) -> Self {
        Self {
            viewport_size,
            scale: 1.0,
            offset: Point::ZERO,
            normal_scale: 1.0,
            scale_limits: None,
            content_bounds: None,
            clamp_mode: ClampMode::default(),
        }
    }

    /// Builder-style variant of [`ContentViewport::set_normal_scale`].
    #[must_use]
    pub fn with_normal_scale(mut self, normal_scale: f64) -> Self {
        self.set_normal_scale(normal_scale);
        self
    }

    /// Sets the reference "100%" scale.
    ///
    /// Non-positive or non-finite values are ignored.
    pub fn set_normal_scale(&mut self, normal_scale: f64) {
        if normal_scale > 0.0 && normal_scale.is_finite() {
            self.normal_scale = normal_scale;
        }
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Resizes the viewport. Scale and offset are kept; clamping is reapplied.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport_size == size {
            return;
        }
        self.viewport_size = size;
        self.clamp_to_bounds();
    }

    /// Sets inclusive scale limits, or removes them with `None`.
    ///
    /// The pair is normalized so that `min <= max`. Limits that are not
    /// finite and strictly positive are rejected. The current scale is
    /// clamped into the new range.
    pub fn set_scale_limits(&mut self, limits: Option<(f64, f64)>) {
        self.scale_limits = match limits {
            Some((a, b)) if a > 0.0 && b > 0.0 && a.is_finite() && b.is_finite() => {
                Some(if a <= b { (a, b) } else { (b, a) })
            }
            Some(_) => return,
            None => None,
        };
        let scale = self.scale;
        self.set_content_scale(scale);
    }

    /// Returns the scale limits, if any.
    #[must_use]
    pub fn scale_limits(&self) -> Option<(f64, f64)> {
        self.scale_limits
    }

    /// Sets optional content bounds used for clamping.
    pub fn set_content_bounds(&mut self, bounds: Option<Rect>) {
        if self.content_bounds == bounds {
            return;
        }
        self.content_bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Returns the content bounds, if any.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    /// Sets the clamp mode used together with the content bounds.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_bounds();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Viewport extent measured in content units.
    #[must_use]
    pub fn content_viewport_size(&self) -> Size {
        self.viewport_size / self.scale
    }

    /// Content-space rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.content_viewport_size())
    }

    /// Pans by a content-space delta, then clamps.
    pub fn pan_by_content(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += delta;
        self.clamp_to_bounds();
    }

    /// Moves the offset so that `content_pt` sits at the viewport center.
    pub fn center_on(&mut self, content_pt: Point) {
        let half = self.content_viewport_size().to_vec2() / 2.0;
        self.offset = content_pt - half;
        self.clamp_to_bounds();
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ContentViewportDebugInfo {
        ContentViewportDebugInfo {
            viewport_size: self.viewport_size,
            scale: self.scale,
            offset: self.offset,
            normal_scale: self.normal_scale,
            scale_limits: self.scale_limits,
            content_bounds: self.content_bounds,
            visible_content_rect: self.visible_content_rect(),
            clamp_mode: self.clamp_mode,
        }
    }

    fn clamp_to_bounds(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let bounds = match self.content_bounds {
            Some(b) if b.width() > 0.0 && b.height() > 0.0 => b,
            _ => return,
        };
        let visible = self.visible_content_rect();
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;

        if visible.max_x() < bounds.min_x() {
            dx = bounds.min_x() - visible.max_x();
        } else if visible.min_x() > bounds.max_x() {
            dx = bounds.max_x() - visible.min_x();
        }

        if visible.max_y() < bounds.min_y() {
            dy = bounds.min_y() - visible.max_y();
        } else if visible.min_y() > bounds.max_y() {
            dy = bounds.max_y() - visible.min_y();
        }

        // The offset is the visible rect's origin, so it moves by exactly the
        // content-space correction.
        self.offset += Vec2::new(dx, dy);
    }
}

impl ViewportTransform for ContentViewport {
    fn content_scale(&self) -> f64 {
        self.scale
    }

    fn set_content_scale(&mut self, scale: f64) {
        if !(scale > 0.0 && scale.is_finite()) {
            return;
        }
        let clamped = match self.scale_limits {
            Some((min, max)) => scale.clamp(min, max),
            None => scale,
        };
        if self.scale == clamped {
            return;
        }
        self.scale = clamped;
        self.clamp_to_bounds();
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.clamp_to_bounds();
    }

    fn normal_scale(&self) -> f64 {
        self.normal_scale
    }
}

/// Debug snapshot of a [`ContentViewport`].
#[derive(Clone, Copy, Debug)]
pub struct ContentViewportDebugInfo {
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Current zoom factor.
    pub scale: f64,
    /// Content-space point at the viewport origin.
    pub offset: Point,
    /// Reference "100%" scale.
    pub normal_scale: f64,
    /// Inclusive scale limits, if any.
    pub scale_limits: Option<(f64, f64)>,
    /// Content bounds used for clamping, if any.
    pub content_bounds: Option<Rect>,
    /// Content-space rectangle visible through the viewport.
    pub visible_content_rect: Rect,
    /// Clamp mode applied against the content bounds.
    pub clamp_mode: ClampMode,
}
