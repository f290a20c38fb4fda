#![forbid(unsafe_code)]

//! Canonical pointer and keyboard input types.
//!
//! # Design Notes
//!
//! - Pointer positions are in the host's viewport coordinate space, the same
//!   space the container's viewport rectangle is reported in.
//! - Button numbering follows the DOM `PointerEvent.button` convention so
//!   hosts can forward raw values through [`PointerButton::from_index`].
//! - Only [`KeyCode::Escape`] has defined behavior in the engine; the other
//!   variants exist so hosts can forward every key press unchanged.

use crate::geometry::Point;

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button (usually left).
    Primary,
    /// Wheel or middle button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
    Back,
    Forward,
}

impl PointerButton {
    /// Map a DOM-style button index. Unknown indices yield `None`.
    #[must_use]
    pub const fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            3 => Some(Self::Back),
            4 => Some(Self::Forward),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// A pointer press delivered to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Host pointer identifier, used for pointer capture.
    pub pointer_id: u32,
    pub button: PointerButton,
    /// Position in viewport coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Primary-button event for pointer 1.
    #[must_use]
    pub const fn primary(position: Point) -> Self {
        Self {
            pointer_id: 1,
            button: PointerButton::Primary,
            position,
        }
    }

    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    #[must_use]
    pub const fn with_pointer_id(mut self, pointer_id: u32) -> Self {
        self.pointer_id = pointer_id;
        self
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Backspace,
    /// A printable character.
    Char(char),
    /// Any key the engine has no name for.
    Other,
}

/// What the host should do with the native key event after the engine saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Suppress the platform's default handling.
    PreventDefault,
    /// Let the event continue normally.
    PassThrough,
}
