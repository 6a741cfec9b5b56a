// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition table from `(button, modifiers)` on pointer-down to a gesture mode.
//!
//! ## Usage
//!
//! Entries are checked in insertion order. The first entry whose button matches
//! and whose modifiers are all held decides the mode. Extra held modifiers do
//! not prevent a match, so put the more specific entries first.
//!
//! An entry that maps to [`GestureMode::None`] explicitly leaves that
//! combination to the host, shadowing any later entry.
//!
//! ```
//! use understory_pan_zoom::{GestureBindings, GestureMode, Modifiers, PointerButton};
//!
//! let bindings = GestureBindings::default();
//! assert_eq!(
//!     bindings.resolve(PointerButton::Primary, Modifiers::SHIFT),
//!     Some(GestureMode::Zooming)
//! );
//! assert_eq!(
//!     bindings.resolve(PointerButton::Primary, Modifiers::CONTROL),
//!     Some(GestureMode::Panning)
//! );
//! assert_eq!(bindings.resolve(PointerButton::Auxiliary, Modifiers::empty()), None);
//!
//! // Middle-drag pans, Alt+left is left alone.
//! let custom = GestureBindings::new()
//!     .bind(PointerButton::Primary, Modifiers::ALT, GestureMode::None)
//!     .bind(PointerButton::Primary, Modifiers::empty(), GestureMode::Zooming)
//!     .bind(PointerButton::Auxiliary, Modifiers::empty(), GestureMode::Panning);
//! assert_eq!(custom.resolve(PointerButton::Primary, Modifiers::ALT), None);
//! assert_eq!(
//!     custom.resolve(PointerButton::Auxiliary, Modifiers::SHIFT),
//!     Some(GestureMode::Panning)
//! );
//! ```

use smallvec::SmallVec;

use crate::input::{Modifiers, PointerButton};

/// What the controller is doing with the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureMode {
    /// Idle; pointer input is not captured.
    #[default]
    None,
    /// Dragging moves the content with the pointer.
    Panning,
    /// Releasing the button zooms about the release point.
    Zooming,
}

/// One row of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureBinding {
    /// Button that must go down.
    pub button: PointerButton,
    /// Modifiers that must all be held.
    pub modifiers: Modifiers,
    /// Mode entered on a match.
    pub mode: GestureMode,
}

/// Ordered pointer-down transition table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GestureBindings {
    entries: SmallVec<[GestureBinding; 4]>,
}

impl GestureBindings {
    /// Creates an empty table that claims no pointer-down at all.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Appends an entry, builder style.
    #[must_use]
    pub fn bind(mut self, button: PointerButton, modifiers: Modifiers, mode: GestureMode) -> Self {
        self.push(GestureBinding {
            button,
            modifiers,
            mode,
        });
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, binding: GestureBinding) {
        self.entries.push(binding);
    }

    /// Returns the entries in match order.
    #[must_use]
    pub fn entries(&self) -> &[GestureBinding] {
        &self.entries
    }

    /// Resolves a pointer-down into the mode it starts.
    ///
    /// Returns `None` when nothing matches or the first match is
    /// [`GestureMode::None`]; the event should then stay unhandled.
    #[must_use]
    pub fn resolve(&self, button: PointerButton, held: Modifiers) -> Option<GestureMode> {
        self.entries
            .iter()
            .find(|b| b.button == button && held.contains(b.modifiers))
            .map(|b| b.mode)
            .filter(|mode| *mode != GestureMode::None)
    }
}

impl Default for GestureBindings {
    /// Shift with the primary or secondary button zooms; a plain primary drag pans.
    fn default() -> Self {
        Self::new()
            .bind(PointerButton::Primary, Modifiers::SHIFT, GestureMode::Zooming)
            .bind(PointerButton::Secondary, Modifiers::SHIFT, GestureMode::Zooming)
            .bind(PointerButton::Primary, Modifiers::empty(), GestureMode::Panning)
    }
}
