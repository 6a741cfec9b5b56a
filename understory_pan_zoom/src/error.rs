// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_view2d::NonPositiveScale;

use crate::policy::ZoomDirection;

/// Reasons a zoom was aborted.
///
/// Either way the transform is left exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ZoomError {
    /// A scale override returned a step that is not strictly positive.
    ///
    /// This is a host configuration bug, never a user action.
    #[error("scale override for zoom {direction:?} returned {delta}; zoom steps must be strictly positive")]
    InvalidScaleDelta {
        /// Direction of the aborted zoom.
        direction: ZoomDirection,
        /// The offending step.
        delta: f64,
    },
    /// The step would move the scale to zero, below zero, or out of range.
    #[error(transparent)]
    NonPositiveScale(#[from] NonPositiveScale),
}
