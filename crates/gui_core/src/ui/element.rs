//! Element node storage

use super::Widget;
use crate::foundation::collections::ElementId;
use crate::foundation::math::Vector2i;
use std::fmt;

/// One element of a [`GuiTree`](super::GuiTree)
pub struct ElementNode {
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) position: Vector2i,
    pub(crate) size: Vector2i,
    /// Empty only while the widget itself is running
    pub(crate) widget: Option<Box<dyn Widget>>,
}

impl ElementNode {
    pub(crate) fn new(widget: Box<dyn Widget>, position: Vector2i, size: Vector2i) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            position,
            size,
            widget: Some(widget),
        }
    }

    /// Owning element, `None` for the root and for detached elements
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Children in traversal and draw order
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Position relative to the parent's local origin
    pub fn position(&self) -> Vector2i {
        self.position
    }

    /// Width and height in the parent's local space
    pub fn size(&self) -> Vector2i {
        self.size
    }

    /// Widget driving this element
    pub fn widget(&self) -> Option<&dyn Widget> {
        self.widget.as_deref()
    }
}

impl fmt::Debug for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementNode")
            .field("widget", &self.widget.as_deref().map(|w| w.widget_name()))
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("position", &(self.position.x, self.position.y))
            .field("size", &(self.size.x, self.size.y))
            .finish()
    }
}
