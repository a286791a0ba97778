//! Controls built on the element tree
//!
//! Thin widgets that subscribe to the events addressed to them and draw
//! themselves in the three stages.

pub mod button;
pub mod panel;
pub mod slot;

pub use button::{ButtonState, ControlButton};
pub use panel::ControlPanel;
pub use slot::{ControlSlot, ItemStack, SlotBinding};

use crate::ui::{Drawable, Eventable, Tickable};

/// Plain control that only groups its children
#[derive(Debug, Clone, Copy, Default)]
pub struct GuiControl;

impl Eventable for GuiControl {}
impl Tickable for GuiControl {}
impl Drawable for GuiControl {}
