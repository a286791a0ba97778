//! Tree structure and geometry

use super::{ElementNode, GuiError, Side, Widget};
use crate::config::GuiConfig;
use crate::foundation::collections::{ElementArena, ElementId};
use crate::foundation::math::{point_in_rect, saturating_add, saturating_sub, Vector2i};

/// Root of a GUI element tree
///
/// Owns every element in an arena addressed by [`ElementId`]. Parent links are
/// ids into the same arena, so the root of any element is found by walking
/// parents. Besides the elements the tree holds the focus slot, the global
/// mouse position (kept current by the host) and the [`Side`] fixed at
/// construction.
#[derive(Debug)]
pub struct GuiTree {
    pub(crate) nodes: ElementArena<ElementNode>,
    pub(crate) root: ElementId,
    pub(crate) focused: Option<ElementId>,
    pub(crate) global_mouse_position: Vector2i,
    side: Side,
}

impl GuiTree {
    /// Create a tree whose root element is driven by `root_widget`
    pub fn new(side: Side, root_widget: impl Widget, size: Vector2i) -> Self {
        let mut nodes = ElementArena::with_key();
        let root = nodes.insert(ElementNode::new(Box::new(root_widget), Vector2i::zeros(), size));
        log::debug!("Created {:?} side GUI tree with root {:?}", side, root);

        Self {
            nodes,
            root,
            focused: None,
            global_mouse_position: Vector2i::zeros(),
            side,
        }
    }

    /// Create a tree from configuration
    pub fn from_config(config: &GuiConfig, root_widget: impl Widget) -> Self {
        let mut tree = Self::new(config.side, root_widget, config.root_size);
        if let Some(root) = tree.nodes.get_mut(tree.root) {
            root.position = config.root_position;
        }
        tree
    }

    /// Root element
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Side the tree was created for
    pub fn side(&self) -> Side {
        self.side
    }

    /// Element currently holding focus
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Last mouse position reported by the host, in root space
    pub fn global_mouse_position(&self) -> Vector2i {
        self.global_mouse_position
    }

    /// Record the mouse position in root space
    pub fn set_global_mouse_position(&mut self, position: Vector2i) {
        self.global_mouse_position = position;
    }

    /// Number of live elements, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether only the root exists
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Whether `id` refers to a live element
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Node data of an element
    pub fn node(&self, id: ElementId) -> Option<&ElementNode> {
        self.nodes.get(id)
    }

    /// Widget of an element downcast to its concrete type
    pub fn widget<T: Widget>(&self, id: ElementId) -> Option<&T> {
        let widget = self.nodes.get(id)?.widget.as_deref()?;
        widget.as_any().downcast_ref::<T>()
    }

    /// Mutable widget of an element downcast to its concrete type
    pub fn widget_mut<T: Widget>(&mut self, id: ElementId) -> Option<&mut T> {
        let widget = self.nodes.get_mut(id)?.widget.as_deref_mut()?;
        widget.as_any_mut().downcast_mut::<T>()
    }

    fn node_mut(&mut self, id: ElementId) -> Result<&mut ElementNode, GuiError> {
        self.nodes.get_mut(id).ok_or(GuiError::UnknownElement(id))
    }

    fn ensure(&self, id: ElementId) -> Result<(), GuiError> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(GuiError::UnknownElement(id))
        }
    }

    /// Create an element and attach it as the last child of `parent`
    pub fn insert(
        &mut self,
        parent: ElementId,
        widget: impl Widget,
        position: Vector2i,
        size: Vector2i,
    ) -> Result<ElementId, GuiError> {
        self.ensure(parent)?;
        let mut node = ElementNode::new(Box::new(widget), position, size);
        node.parent = Some(parent);
        let id = self.nodes.insert(node);
        self.node_mut(parent)?.children.push(id);
        log::trace!("Inserted {:?} under {:?}", id, parent);
        Ok(id)
    }

    /// Create an element that is not attached anywhere yet
    pub fn insert_detached(&mut self, widget: impl Widget, position: Vector2i, size: Vector2i) -> ElementId {
        self.nodes.insert(ElementNode::new(Box::new(widget), position, size))
    }

    /// Append `child` to `parent`'s children.
    ///
    /// Adding an element that is already a child of `parent` does nothing. An
    /// element attached elsewhere is moved, so it never has two parents.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), GuiError> {
        if self.check_attach(parent, child)? {
            return Ok(());
        }
        if !self.is_attached(parent) {
            self.release_focus_within(child);
            // Focus lost handlers may have moved or destroyed either element
            if self.check_attach(parent, child)? {
                return Ok(());
            }
        }

        if let Some(old_parent) = self.node_mut(child)?.parent {
            if let Some(old) = self.nodes.get_mut(old_parent) {
                old.children.retain(|&c| c != child);
            }
            log::debug!("Moving {:?} from {:?} to {:?}", child, old_parent, parent);
        }

        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Validate attaching `child` under `parent`; `Ok(true)` when it is already there
    fn check_attach(&self, parent: ElementId, child: ElementId) -> Result<bool, GuiError> {
        self.ensure(parent)?;
        self.ensure(child)?;
        if child == self.root {
            return Err(GuiError::RootImmutable);
        }
        if self.children(parent).contains(&child) {
            return Ok(true);
        }
        if child == parent || self.is_ancestor(child, parent) {
            log::warn!("Rejected adding {:?} under {:?}: would create a cycle", child, parent);
            return Err(GuiError::CycleDetected { parent, child });
        }
        Ok(false)
    }

    /// Detach `child` from `parent`.
    ///
    /// Returns `Ok(false)` when `child` is not a child of `parent`. Focus held
    /// inside the detached subtree is dropped first.
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) -> Result<bool, GuiError> {
        self.ensure(parent)?;
        if !self.children(parent).contains(&child) {
            return Ok(false);
        }

        self.release_focus_within(child);
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|&c| c != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        log::debug!("Removed {:?} from {:?}", child, parent);
        Ok(true)
    }

    /// Detach an element from whatever parent it has
    pub fn detach(&mut self, id: ElementId) -> Result<bool, GuiError> {
        self.ensure(id)?;
        if id == self.root {
            return Err(GuiError::RootImmutable);
        }
        match self.parent(id) {
            Some(parent) => self.remove_child(parent, id),
            None => Ok(false),
        }
    }

    /// Detach every child of `parent`, returning them in their former order.
    ///
    /// The removed children become detached (no parent).
    pub fn clear_children(&mut self, parent: ElementId) -> Result<Vec<ElementId>, GuiError> {
        self.ensure(parent)?;
        let children = self.children(parent).to_vec();
        for child in children {
            self.release_focus_within(child);
        }

        // Focus lost handlers may have destroyed the parent itself
        let removed = std::mem::take(&mut self.node_mut(parent)?.children);
        for &child in &removed {
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = None;
            }
        }
        log::debug!("Cleared {} children of {:?}", removed.len(), parent);
        Ok(removed)
    }

    /// Detach an element and release it and its whole subtree from the arena
    pub fn destroy(&mut self, id: ElementId) -> Result<(), GuiError> {
        self.ensure(id)?;
        if id == self.root {
            return Err(GuiError::RootImmutable);
        }
        self.detach(id)?;
        // A detached subtree may still hold a stale focus
        if self.focused.is_some_and(|focused| focused == id || self.is_ancestor(id, focused)) {
            self.focused = None;
        }

        let mut pending = vec![id];
        let mut released = 0;
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
                released += 1;
            }
        }
        log::debug!("Destroyed {:?} ({} elements released)", id, released);
        Ok(())
    }

    /// Parent of an element
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id)?.parent
    }

    /// Children of an element, empty for unknown ids
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes.get(id).map(|node| node.children.as_slice()).unwrap_or_default()
    }

    /// Position of an element relative to its parent
    pub fn position(&self, id: ElementId) -> Option<Vector2i> {
        self.nodes.get(id).map(|node| node.position)
    }

    /// Size of an element
    pub fn size(&self, id: ElementId) -> Option<Vector2i> {
        self.nodes.get(id).map(|node| node.size)
    }

    /// Move an element within its parent
    pub fn set_position(&mut self, id: ElementId, position: Vector2i) -> Result<(), GuiError> {
        self.node_mut(id)?.position = position;
        Ok(())
    }

    /// Resize an element
    pub fn set_size(&mut self, id: ElementId, size: Vector2i) -> Result<(), GuiError> {
        self.node_mut(id)?.size = size;
        Ok(())
    }

    /// Whether `ancestor` lies on the parent chain of `id` (excluding `id` itself)
    pub fn is_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Whether `id` is the root of this tree
    pub fn is_top_parent(&self, id: ElementId) -> bool {
        id == self.root
    }

    /// Root reached by walking parent links, `None` for detached elements
    pub fn top_parent(&self, id: ElementId) -> Option<ElementId> {
        self.ensure(id).ok()?;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        (current == self.root).then_some(current)
    }

    /// Whether the element is connected to the root
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.top_parent(id).is_some()
    }

    /// Side of the root an element is attached to
    pub fn side_of(&self, id: ElementId) -> Option<Side> {
        self.top_parent(id).map(|_| self.side)
    }

    /// Sum of positions from `id` up to the topmost ancestor.
    ///
    /// For the root this is its own position.
    pub fn absolute_position(&self, id: ElementId) -> Option<Vector2i> {
        let mut node = self.nodes.get(id)?;
        let mut position = node.position;
        while let Some(parent) = node.parent.and_then(|p| self.nodes.get(p)) {
            position = saturating_add(position, parent.position);
            node = parent;
        }
        Some(position)
    }

    /// Convert a root space point into the element's local space
    pub fn localize_global(&self, id: ElementId, point: Vector2i) -> Option<Vector2i> {
        Some(saturating_sub(point, self.absolute_position(id)?))
    }

    /// Convert a point in the parent's local space into the element's local space
    pub fn localize_parent(&self, id: ElementId, point: Vector2i) -> Option<Vector2i> {
        Some(saturating_sub(point, self.position(id)?))
    }

    /// Mouse position in the element's local space
    pub fn local_mouse_position(&self, id: ElementId) -> Option<Vector2i> {
        self.localize_global(id, self.global_mouse_position)
    }

    /// Whether a point given in the parent's local space lies on the element.
    ///
    /// Bounds are inclusive on all four edges.
    pub fn point_in_element(&self, id: ElementId, point: Vector2i) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| point_in_rect(point, node.position, node.size))
    }

    /// Deepest element under a point given in `id`'s local space.
    ///
    /// Children are tested in insertion order and the first one containing
    /// the point wins. Falls back to `id` when no child contains it.
    pub fn find_element_at(&self, id: ElementId, point: Vector2i) -> Option<ElementId> {
        let node = self.nodes.get(id)?;
        for &child in &node.children {
            if self.point_in_element(child, point) {
                let local = self.localize_parent(child, point)?;
                return self.find_element_at(child, local);
            }
        }
        Some(id)
    }

    /// Deepest element under a root space point
    pub fn element_at(&self, point: Vector2i) -> ElementId {
        self.localize_global(self.root, point)
            .and_then(|local| self.find_element_at(self.root, local))
            .unwrap_or(self.root)
    }
}
