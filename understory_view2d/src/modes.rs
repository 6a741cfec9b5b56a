// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for the content offset relative to optional content bounds.
///
/// Consulted by [`crate::ContentViewport`] whenever its scale, offset or
/// viewport size changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the view may pan and zoom freely.
    None,
    /// Clamp so that the visible region never leaves the content bounds
    /// entirely.
    ///
    /// When content bounds are present, at least some portion of them stays
    /// visible.
    #[default]
    KeepSomeVisible,
}
