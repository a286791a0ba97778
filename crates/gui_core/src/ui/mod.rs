//! GUI element tree
//!
//! Architecture:
//! - [`GuiTree`]: the root of a tree. Owns every element in an arena and holds
//!   the tree-wide state (focus slot, global mouse position, side).
//! - [`ElementNode`]: one element's place in the tree (parent, children,
//!   position, size) plus its boxed widget.
//! - [`Widget`]: behaviour of an element, assembled from the [`Eventable`],
//!   [`Tickable`] and [`Drawable`] capabilities.
//! - [`GuiContext`] / [`DrawContext`]: what a widget sees while it runs.
//!
//! All tree operations run on the thread that owns the tree. Widgets never get
//! mutable access to the tree; focus changes, injected events and structural
//! changes they request are queued and applied once the current traversal
//! finishes.

mod context;
mod dispatch;
mod draw;
mod element;
mod tree;
mod widget;

#[cfg(test)]
mod tests;

pub use context::{DrawContext, GuiContext};
pub use element::ElementNode;
pub use tree::GuiTree;
pub use widget::{AsAny, Drawable, Eventable, Tickable, Widget};

use crate::foundation::collections::ElementId;
use serde::{Deserialize, Serialize};

/// Execution context a tree is instantiated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Render thread of the game client; trees here can be drawn
    Client,
    /// Logic thread of the server; trees here only tick and handle events
    Server,
}

impl Side {
    /// Whether this is the client side
    pub fn is_client(self) -> bool {
        self == Self::Client
    }
}

/// Errors reported by tree operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuiError {
    /// Handle does not refer to a live element
    #[error("Unknown element {0:?}")]
    UnknownElement(ElementId),

    /// Attaching would make an element its own ancestor
    #[error("Adding {child:?} under {parent:?} would create a cycle")]
    CycleDetected {
        /// Requested parent
        parent: ElementId,
        /// Requested child
        child: ElementId,
    },

    /// Element is not connected to the tree root
    #[error("Element {0:?} is not attached to the tree root")]
    NotAttached(ElementId),

    /// The root cannot be reparented, detached or destroyed
    #[error("The root element cannot be reparented, detached or destroyed")]
    RootImmutable,

    /// Drawing was requested on a server-side tree
    #[error("Server-side trees cannot be drawn")]
    ServerSideRender,
}
