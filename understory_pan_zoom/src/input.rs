// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer and wheel input, as delivered by the host's event loop.
//!
//! Positions are always in viewport space (pixels relative to the widget).

use kurbo::Point;

bitflags::bitflags! {
    /// Keyboard modifiers held while a pointer event is processed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0000_0001;
        /// Control key. Selects the precise zoom step.
        const CONTROL = 0b0000_0010;
        /// Alt / Option key.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows key.
        const META    = 0b0000_1000;
    }
}

/// Mouse button that changed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the middle button or wheel click.
    Auxiliary,
    /// Back side button.
    Back,
    /// Forward side button.
    Forward,
}

/// A button press or release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerButtonEvent {
    /// Pointer position in viewport space.
    pub position: Point,
    /// The button that changed state.
    pub button: PointerButton,
}

impl PointerButtonEvent {
    /// Creates a button event at `position`.
    #[must_use]
    pub fn new(position: impl Into<Point>, button: PointerButton) -> Self {
        Self {
            position: position.into(),
            button,
        }
    }
}

/// A pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMoveEvent {
    /// Pointer position in viewport space.
    pub position: Point,
}

impl PointerMoveEvent {
    /// Creates a move event at `position`.
    #[must_use]
    pub fn new(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
        }
    }
}

/// A wheel tick.
///
/// Only the sign of `delta` matters: positive scrolls away from the user
/// (zoom in), negative toward the user (zoom out).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position in viewport space.
    pub position: Point,
    /// Wheel delta, for example `120.0` per notch.
    pub delta: f64,
}

impl WheelEvent {
    /// Creates a wheel event at `position`.
    #[must_use]
    pub fn new(position: impl Into<Point>, delta: f64) -> Self {
        Self {
            position: position.into(),
            delta,
        }
    }
}
