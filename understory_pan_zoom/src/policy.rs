// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom policy: non-linear step sizes and point-anchored application.
//!
//! The default step is `0.1` scale units, or `0.01` with the precise modifier
//! held. It is then damped near the normal scale:
//!
//! | current scale                          | step      |
//! |----------------------------------------|-----------|
//! | `< normal`                             | `step / 5` |
//! | `>= normal` and `< normal * 1.25`      | `step / 2` |
//! | otherwise                              | `step`    |
//!
//! Hosts can replace the default through [`ScaleOverrides`]. A zoom-in or
//! zoom-out specific override wins over the general one, which wins over the
//! computed default.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_pan_zoom::{ZoomDirection, ZoomPolicy, ZoomRequest};
//! use understory_view2d::{ContentViewport, ViewportTransform};
//!
//! let mut view = ContentViewport::new(Size::new(640.0, 480.0));
//! let policy = ZoomPolicy::default();
//!
//! let request = ZoomRequest::new(Point::new(50.0, 50.0), ZoomDirection::In);
//! let outcome = policy.apply(&mut view, request, false).unwrap();
//! assert!((outcome.new_scale - 1.05).abs() < 1e-12);
//! assert!((view.content_scale() - 1.05).abs() < 1e-12);
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;
use tracing::{debug, warn};
use understory_view2d::ViewportTransform;

use crate::error::ZoomError;

/// Which way a zoom goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Increase the content scale.
    In,
    /// Decrease the content scale.
    Out,
}

/// A request to zoom one step about a content-space anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRequest {
    /// Content-space point that stays under the same viewport pixel.
    pub anchor: Point,
    /// Zoom direction.
    pub direction: ZoomDirection,
}

impl ZoomRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(anchor: impl Into<Point>, direction: ZoomDirection) -> Self {
        Self {
            anchor: anchor.into(),
            direction,
        }
    }
}

/// Snapshot handed to scale overrides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomContext {
    /// Scale before the zoom.
    pub content_scale: f64,
    /// Reference "100%" scale.
    pub normal_scale: f64,
    /// Requested direction.
    pub direction: ZoomDirection,
    /// Whether the precise modifier is held.
    pub precise: bool,
    /// The step the policy would use without overrides.
    pub default_delta: f64,
}

/// Tunables for the default step computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPolicyConfig {
    /// Base step in scale units.
    pub step: f64,
    /// Base step while the precise modifier is held.
    pub precise_step: f64,
    /// Divisor applied while the scale is below normal.
    pub below_normal_divisor: f64,
    /// Divisor applied while the scale is at least normal but below
    /// `normal * near_normal_ratio`.
    pub near_normal_divisor: f64,
    /// Upper edge of the near-normal band, relative to the normal scale.
    pub near_normal_ratio: f64,
}

impl Default for ZoomPolicyConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            precise_step: 0.01,
            below_normal_divisor: 5.0,
            near_normal_divisor: 2.0,
            near_normal_ratio: 1.25,
        }
    }
}

/// Callback computing a zoom step from the current state.
pub type ScaleOverrideFn = Box<dyn Fn(&ZoomContext) -> f64>;

/// Host-registered replacements for the default zoom step.
#[derive(Default)]
pub struct ScaleOverrides {
    general: Option<ScaleOverrideFn>,
    zoom_in: Option<ScaleOverrideFn>,
    zoom_out: Option<ScaleOverrideFn>,
}

impl ScaleOverrides {
    /// Creates an empty set; the computed default is used everywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override used for both directions unless a direction-specific
    /// one is present.
    pub fn set_general(&mut self, f: impl Fn(&ZoomContext) -> f64 + 'static) {
        self.general = Some(Box::new(f));
    }

    /// Sets the override used for zooming in.
    pub fn set_zoom_in(&mut self, f: impl Fn(&ZoomContext) -> f64 + 'static) {
        self.zoom_in = Some(Box::new(f));
    }

    /// Sets the override used for zooming out.
    pub fn set_zoom_out(&mut self, f: impl Fn(&ZoomContext) -> f64 + 'static) {
        self.zoom_out = Some(Box::new(f));
    }

    /// Removes every override.
    pub fn clear(&mut self) {
        self.general = None;
        self.zoom_in = None;
        self.zoom_out = None;
    }

    /// Returns the override that applies to `direction`, if any.
    #[must_use]
    pub fn resolve(&self, direction: ZoomDirection) -> Option<&ScaleOverrideFn> {
        let specific = match direction {
            ZoomDirection::In => self.zoom_in.as_ref(),
            ZoomDirection::Out => self.zoom_out.as_ref(),
        };
        specific.or(self.general.as_ref())
    }
}

impl fmt::Debug for ScaleOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleOverrides")
            .field("general", &self.general.is_some())
            .field("zoom_in", &self.zoom_in.is_some())
            .field("zoom_out", &self.zoom_out.is_some())
            .finish()
    }
}

/// Result of a zoom that was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomOutcome {
    /// Direction of the zoom.
    pub direction: ZoomDirection,
    /// Content-space anchor that stayed in place.
    pub anchor: Point,
    /// Scale before the zoom.
    pub previous_scale: f64,
    /// Scale the transform committed, after any host clamping.
    pub new_scale: f64,
    /// Step used.
    pub delta: f64,
}

/// Computes zoom steps and applies them about an anchor.
#[derive(Debug, Default)]
pub struct ZoomPolicy {
    config: ZoomPolicyConfig,
    overrides: ScaleOverrides,
}

impl ZoomPolicy {
    /// Creates a policy with the given tunables and no overrides.
    #[must_use]
    pub fn new(config: ZoomPolicyConfig) -> Self {
        Self {
            config,
            overrides: ScaleOverrides::default(),
        }
    }

    /// Returns the tunables.
    #[must_use]
    pub fn config(&self) -> &ZoomPolicyConfig {
        &self.config
    }

    /// Replaces the tunables.
    pub fn set_config(&mut self, config: ZoomPolicyConfig) {
        self.config = config;
    }

    /// Returns the registered overrides.
    #[must_use]
    pub fn overrides(&self) -> &ScaleOverrides {
        &self.overrides
    }

    /// Returns the registered overrides for modification.
    pub fn overrides_mut(&mut self) -> &mut ScaleOverrides {
        &mut self.overrides
    }

    /// The damped default step for the given state.
    #[must_use]
    pub fn default_delta(&self, content_scale: f64, normal_scale: f64, precise: bool) -> f64 {
        let cfg = &self.config;
        let step = if precise { cfg.precise_step } else { cfg.step };
        if content_scale < normal_scale {
            step / cfg.below_normal_divisor
        } else if content_scale < normal_scale * cfg.near_normal_ratio {
            step / cfg.near_normal_divisor
        } else {
            step
        }
    }

    /// Builds the override snapshot for `transform`.
    #[must_use]
    pub fn context<T: ViewportTransform + ?Sized>(
        &self,
        transform: &T,
        direction: ZoomDirection,
        precise: bool,
    ) -> ZoomContext {
        let content_scale = transform.content_scale();
        let normal_scale = transform.normal_scale();
        ZoomContext {
            content_scale,
            normal_scale,
            direction,
            precise,
            default_delta: self.default_delta(content_scale, normal_scale, precise),
        }
    }

    /// The step to use: the applicable override, else the default.
    ///
    /// Fails with [`ZoomError::InvalidScaleDelta`] unless the step is strictly
    /// positive.
    pub fn scale_delta(&self, context: &ZoomContext) -> Result<f64, ZoomError> {
        let delta = match self.overrides.resolve(context.direction) {
            Some(f) => f(context),
            None => context.default_delta,
        };
        if delta > 0.0 {
            Ok(delta)
        } else {
            Err(ZoomError::InvalidScaleDelta {
                direction: context.direction,
                delta,
            })
        }
    }

    /// Zooms `transform` one step about `request.anchor`.
    ///
    /// Nothing is mutated when this returns an error.
    pub fn apply<T: ViewportTransform + ?Sized>(
        &self,
        transform: &mut T,
        request: ZoomRequest,
        precise: bool,
    ) -> Result<ZoomOutcome, ZoomError> {
        let context = self.context(transform, request.direction, precise);
        let delta = self.scale_delta(&context).inspect_err(|err| {
            warn!(%err, "zoom aborted");
        })?;
        let target = match request.direction {
            ZoomDirection::In => context.content_scale + delta,
            ZoomDirection::Out => context.content_scale - delta,
        };
        if let Err(err) = transform.zoom_about_point(target, request.anchor) {
            warn!(%err, direction = ?request.direction, "zoom rejected");
            return Err(err.into());
        }
        let outcome = ZoomOutcome {
            direction: request.direction,
            anchor: request.anchor,
            previous_scale: context.content_scale,
            new_scale: transform.content_scale(),
            delta,
        };
        debug!(
            direction = ?outcome.direction,
            from = outcome.previous_scale,
            to = outcome.new_scale,
            delta,
            "zoom applied"
        );
        Ok(outcome)
    }
}
