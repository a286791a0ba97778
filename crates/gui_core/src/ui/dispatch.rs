//! Event dispatch, focus protocol, ticking and host input adapters

use super::context::TreeCommand;
use super::{GuiContext, GuiError, GuiTree};
use crate::events::{GuiEvent, KeyModifiers, MouseButton, Propagation};
use crate::foundation::collections::ElementId;
use crate::foundation::math::Vector2i;

impl GuiTree {
    /// Deliver an event to the whole tree, starting at the root.
    ///
    /// Returns [`Propagation::Stop`] when a handler halted delivery.
    pub fn inject_event(&mut self, event: GuiEvent) -> Propagation {
        let root = self.root;
        self.run_dispatch(root, &event)
    }

    /// Deliver an event either from the top of the tree or to the subtree at `id`.
    ///
    /// With `at_top` the event is forwarded to the root exactly like
    /// [`inject_event`](Self::inject_event); otherwise `id` receives it and
    /// relays it to its own descendants.
    pub fn inject_event_at(&mut self, id: ElementId, event: GuiEvent, at_top: bool) -> Result<Propagation, GuiError> {
        if !self.contains(id) {
            return Err(GuiError::UnknownElement(id));
        }
        let start = if at_top { self.root } else { id };
        Ok(self.run_dispatch(start, &event))
    }

    fn run_dispatch(&mut self, start: ElementId, event: &GuiEvent) -> Propagation {
        log::trace!("Dispatching {} for {:?} from {:?}", event.name(), event.origin(), start);
        let mut commands = Vec::new();
        let outcome = self.receive_event(start, event, &mut commands);
        self.apply_commands(commands);
        outcome
    }

    /// Handle at `id` first, then relay to its children unless halted
    fn receive_event(&mut self, id: ElementId, event: &GuiEvent, commands: &mut Vec<TreeCommand>) -> Propagation {
        let Some(mut widget) = self.nodes.get_mut(id).and_then(|node| node.widget.take()) else {
            return Propagation::Continue;
        };
        let outcome = {
            let mut ctx = GuiContext::new(self, id, commands);
            widget.handle_event(event, &mut ctx)
        };
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget = Some(widget);
        }

        if outcome.is_stopped() {
            log::trace!("{} halted at {:?}", event.name(), id);
            return Propagation::Stop;
        }

        // Snapshot so handlers can't invalidate the iteration
        let children = self.children(id).to_vec();
        for child in children {
            if self.receive_event(child, event, commands).is_stopped() {
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }

    /// Run one logic frame over the tree, parents before children
    pub fn gui_tick(&mut self) {
        let mut commands = Vec::new();
        let root = self.root;
        self.tick_element(root, &mut commands);
        self.apply_commands(commands);
    }

    fn tick_element(&mut self, id: ElementId, commands: &mut Vec<TreeCommand>) {
        if let Some(mut widget) = self.nodes.get_mut(id).and_then(|node| node.widget.take()) {
            {
                let mut ctx = GuiContext::new(self, id, commands);
                widget.gui_tick(&mut ctx);
            }
            if let Some(node) = self.nodes.get_mut(id) {
                node.widget = Some(widget);
            }
        }

        let children = self.children(id).to_vec();
        for child in children {
            self.tick_element(child, commands);
        }
    }

    fn apply_commands(&mut self, commands: Vec<TreeCommand>) {
        for command in commands {
            let result = match &command {
                TreeCommand::TakeFocus(id) => self.take_focus(*id),
                TreeCommand::DropFocus(id) => self.drop_focus(*id),
                TreeCommand::Inject(event) => {
                    self.inject_event(event.clone());
                    Ok(())
                }
                TreeCommand::Detach(id) => self.detach(*id).map(|_| ()),
                TreeCommand::Destroy(id) => self.destroy(*id),
            };
            if let Err(err) = result {
                log::warn!("Deferred {:?} failed: {}", command, err);
            }
        }
    }

    /// Whether `id` holds focus
    pub fn has_focus(&self, id: ElementId) -> bool {
        self.focused == Some(id)
    }

    /// Give focus to `id`.
    ///
    /// The element currently holding focus receives a
    /// [`GuiEvent::FocusLost`] while it still holds the slot; only then is
    /// `id` installed. Taking focus again while holding it does nothing.
    ///
    /// Requests queued by handlers of the focus lost event run after `id`
    /// has been installed.
    pub fn take_focus(&mut self, id: ElementId) -> Result<(), GuiError> {
        if !self.contains(id) {
            return Err(GuiError::UnknownElement(id));
        }
        if !self.is_attached(id) {
            return Err(GuiError::NotAttached(id));
        }
        if self.focused == Some(id) {
            return Ok(());
        }

        let mut commands = Vec::new();
        if let Some(previous) = self.focused {
            self.notify_focus_lost(previous, &mut commands);
        }
        log::debug!("Focus moved to {:?}", id);
        self.focused = Some(id);
        self.apply_commands(commands);
        Ok(())
    }

    /// Drop focus from `id`, leaving nothing focused.
    ///
    /// Does nothing unless `id` holds focus. Requests queued by handlers of
    /// the focus lost event run after the slot has been cleared.
    pub fn drop_focus(&mut self, id: ElementId) -> Result<(), GuiError> {
        if !self.contains(id) {
            return Err(GuiError::UnknownElement(id));
        }
        if self.focused != Some(id) {
            return Ok(());
        }

        let mut commands = Vec::new();
        self.notify_focus_lost(id, &mut commands);
        log::debug!("Focus dropped by {:?}", id);
        self.focused = None;
        self.apply_commands(commands);
        Ok(())
    }

    /// Deliver a focus lost event for `id` without applying queued requests.
    ///
    /// Handlers only queue changes, so `id` keeps the slot for the whole
    /// delivery.
    fn notify_focus_lost(&mut self, id: ElementId, commands: &mut Vec<TreeCommand>) {
        let root = self.root;
        let event = GuiEvent::focus_lost(id);
        log::trace!("Dispatching {} for {:?}", event.name(), id);
        self.receive_event(root, &event, commands);
    }

    /// Drop focus if it is held by `id` or one of its descendants
    pub(crate) fn release_focus_within(&mut self, id: ElementId) {
        if let Some(focused) = self.focused {
            if focused == id || self.is_ancestor(id, focused) {
                if let Err(err) = self.drop_focus(focused) {
                    log::warn!("Could not release focus from {:?}: {}", focused, err);
                }
            }
        }
    }

    /// Host callback: the cursor moved to `position` (root space)
    pub fn mouse_moved(&mut self, position: Vector2i) -> Propagation {
        self.global_mouse_position = position;
        let origin = self.element_at(position);
        self.inject_event(GuiEvent::MouseMoved { origin, position })
    }

    /// Host callback: a mouse button went down at `position` (root space)
    pub fn mouse_clicked(&mut self, position: Vector2i, button: MouseButton) -> Propagation {
        self.global_mouse_position = position;
        let origin = self.element_at(position);
        log::debug!("Mouse {:?} clicked at {:?} over {:?}", button, position, origin);
        self.inject_event(GuiEvent::MouseClicked { origin, position, button })
    }

    /// Host callback: a mouse button was released at `position` (root space)
    pub fn mouse_released(&mut self, position: Vector2i, button: MouseButton) -> Propagation {
        self.global_mouse_position = position;
        let origin = self.element_at(position);
        self.inject_event(GuiEvent::MouseReleased { origin, position, button })
    }

    /// Host callback: a key was typed; addressed to the focused element or the root
    pub fn key_typed(&mut self, character: Option<char>, key_code: u32, modifiers: KeyModifiers) -> Propagation {
        let origin = self.focused.unwrap_or(self.root);
        self.inject_event(GuiEvent::KeyTyped {
            origin,
            character,
            key_code,
            modifiers,
        })
    }
}
