//! Widget capabilities
//!
//! A widget implements the capabilities it needs and leaves the others at
//! their no-op defaults with an empty `impl`. Anything implementing all three
//! (plus `Debug`) is a [`Widget`] and can be placed in a tree.

use super::{DrawContext, GuiContext};
use crate::events::{GuiEvent, Propagation};
use crate::render::RenderStage;
use std::any::Any;
use std::fmt;

/// Downcasting support for boxed widgets
pub trait AsAny: Any {
    /// Borrow as `Any`
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as `Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Type name of the concrete widget
    fn widget_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn widget_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Reacts to events delivered through the tree
pub trait Eventable {
    /// Handle an event seen by this element.
    ///
    /// Every element sees every event that reaches it; compare
    /// [`GuiEvent::origin`] with [`GuiContext::id`] to act only on events
    /// addressed to this element. Return [`Propagation::Stop`] to halt
    /// delivery to this element's children and the rest of the tree.
    fn handle_event(&mut self, _event: &GuiEvent, _ctx: &mut GuiContext<'_>) -> Propagation {
        Propagation::Continue
    }
}

/// Updated once per logic frame
pub trait Tickable {
    /// Per-frame state update. Children are ticked after this returns.
    fn gui_tick(&mut self, _ctx: &mut GuiContext<'_>) {}
}

/// Contributes to the three draw stages
///
/// Hooks run in the parent's local frame: draw at [`DrawContext::position`]
/// to land on the element's own bounds.
pub trait Drawable {
    /// Background stage hook
    fn draw_background(&self, _ctx: &mut DrawContext<'_>) {}

    /// Foreground stage hook
    fn draw_foreground(&self, _ctx: &mut DrawContext<'_>) {}

    /// Overlay stage hook
    fn draw_overlay(&self, _ctx: &mut DrawContext<'_>) {}

    /// Run the hook for `stage`
    fn draw_stage(&self, stage: RenderStage, ctx: &mut DrawContext<'_>) {
        match stage {
            RenderStage::Background => self.draw_background(ctx),
            RenderStage::Foreground => self.draw_foreground(ctx),
            RenderStage::Overlay => self.draw_overlay(ctx),
        }
    }
}

/// Behaviour attached to an element
pub trait Widget: Eventable + Tickable + Drawable + AsAny + fmt::Debug {}

impl<T> Widget for T where T: Eventable + Tickable + Drawable + fmt::Debug + 'static {}
