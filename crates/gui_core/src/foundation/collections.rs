//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to an element stored in a [`GuiTree`](crate::ui::GuiTree)
    ///
    /// Handles stay valid while the element lives in the arena and never alias a
    /// newer element after it is destroyed.
    pub struct ElementId;
}

/// Arena holding every element node of a tree
pub type ElementArena<T> = SlotMap<ElementId, T>;
