//! GUI events
//!
//! Every event names the element it is semantically about (its origin). Events
//! are delivered to the whole tree pre-order; widgets compare the origin with
//! their own id to react only to events addressed to them. Whether delivery
//! continues is decided by the [`Propagation`] each handler returns.

use crate::foundation::collections::ElementId;
use crate::foundation::math::Vector2i;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
    /// Any further button reported by the host
    Other(u8),
}

impl MouseButton {
    /// Map a host button index (0 = left, 1 = right, 2 = middle)
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Middle,
            other => Self::Other(other),
        }
    }

    /// Host button index of this button
    pub fn index(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
            Self::Other(index) => index,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held while a key was typed
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Either shift key
        const SHIFT = 0b0001;
        /// Either control key
        const CONTROL = 0b0010;
        /// Either alt key
        const ALT = 0b0100;
    }
}

/// Outcome of handling an event at one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Keep delivering the event to the handler's children and the rest of the tree
    #[default]
    Continue,
    /// Halt delivery; no further element sees this event
    Stop,
}

impl Propagation {
    /// Whether delivery was halted
    pub fn is_stopped(self) -> bool {
        self == Self::Stop
    }
}

/// Event delivered through the element tree
#[derive(Debug, Clone, PartialEq)]
pub enum GuiEvent {
    /// A mouse button went down over `origin`
    MouseClicked {
        /// Element under the cursor
        origin: ElementId,
        /// Cursor position in root space
        position: Vector2i,
        /// Button that was pressed
        button: MouseButton,
    },
    /// A mouse button was released over `origin`
    MouseReleased {
        /// Element under the cursor
        origin: ElementId,
        /// Cursor position in root space
        position: Vector2i,
        /// Button that was released
        button: MouseButton,
    },
    /// The cursor moved; `origin` is the element now under it
    MouseMoved {
        /// Element under the cursor
        origin: ElementId,
        /// Cursor position in root space
        position: Vector2i,
    },
    /// A key was typed while `origin` held focus (or the root when nothing did)
    KeyTyped {
        /// Focused element
        origin: ElementId,
        /// Character produced by the key, if any
        character: Option<char>,
        /// Host key code
        key_code: u32,
        /// Modifiers held during the key press
        modifiers: KeyModifiers,
    },
    /// `origin` is losing focus
    FocusLost {
        /// Element being displaced
        origin: ElementId,
    },
    /// A control was activated (for example a button click completed)
    Activated {
        /// Activated control
        origin: ElementId,
    },
}

impl GuiEvent {
    /// Create a focus lost event addressed to `origin`
    pub fn focus_lost(origin: ElementId) -> Self {
        Self::FocusLost { origin }
    }

    /// Element this event is about
    pub fn origin(&self) -> ElementId {
        match self {
            Self::MouseClicked { origin, .. }
            | Self::MouseReleased { origin, .. }
            | Self::MouseMoved { origin, .. }
            | Self::KeyTyped { origin, .. }
            | Self::FocusLost { origin }
            | Self::Activated { origin } => *origin,
        }
    }

    /// Whether this event is addressed to `id`
    pub fn is_for(&self, id: ElementId) -> bool {
        self.origin() == id
    }

    /// Root space cursor position carried by mouse events
    pub fn mouse_position(&self) -> Option<Vector2i> {
        match self {
            Self::MouseClicked { position, .. }
            | Self::MouseReleased { position, .. }
            | Self::MouseMoved { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Short name of the variant for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::MouseClicked { .. } => "MouseClicked",
            Self::MouseReleased { .. } => "MouseReleased",
            Self::MouseMoved { .. } => "MouseMoved",
            Self::KeyTyped { .. } => "KeyTyped",
            Self::FocusLost { .. } => "FocusLost",
            Self::Activated { .. } => "Activated",
        }
    }
}
