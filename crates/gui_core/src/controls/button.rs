//! Button control - interactive clickable buttons

use super::panel::fill_framed;
use crate::events::{GuiEvent, MouseButton, Propagation};
use crate::foundation::math::Color;
use crate::ui::{DrawContext, Drawable, Eventable, GuiContext, Tickable};

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Mouse is hovering over button
    Hovered,
    /// Button is being pressed
    Pressed,
    /// Button is disabled (non-interactive)
    Disabled,
}

/// Clickable button
///
/// A left click over the button presses it and takes focus; releasing the
/// button while still over it injects [`GuiEvent::Activated`] addressed to
/// the button.
#[derive(Debug, Clone)]
pub struct ControlButton {
    /// Current button state
    pub state: ButtonState,

    /// Colors for different states
    pub normal_color: Color,
    /// Hover state color
    pub hover_color: Color,
    /// Pressed state color
    pub pressed_color: Color,
    /// Disabled state color
    pub disabled_color: Color,

    /// Border color
    pub border_color: Color,
    /// Border width in pixels
    pub border_width: i32,

    /// Whether the button reacts to input
    pub enabled: bool,

    /// Completed clicks so far
    pub activations: u32,
}

impl Default for ControlButton {
    fn default() -> Self {
        Self {
            state: ButtonState::Normal,
            normal_color: Color::new(0.3, 0.3, 0.3, 0.9),
            hover_color: Color::new(0.4, 0.4, 0.5, 1.0),
            pressed_color: Color::new(0.5, 0.5, 0.6, 1.0),
            disabled_color: Color::new(0.2, 0.2, 0.2, 0.5),
            border_color: Color::new(0.6, 0.6, 0.6, 1.0),
            border_width: 2,
            enabled: true,
            activations: 0,
        }
    }
}

impl ControlButton {
    /// Create an enabled button with default colors
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the button
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.state = if enabled { ButtonState::Normal } else { ButtonState::Disabled };
    }

    /// Get the current color based on button state
    pub fn current_color(&self) -> Color {
        if !self.enabled {
            return self.disabled_color;
        }

        match self.state {
            ButtonState::Normal => self.normal_color,
            ButtonState::Hovered => self.hover_color,
            ButtonState::Pressed => self.pressed_color,
            ButtonState::Disabled => self.disabled_color,
        }
    }
}

impl Eventable for ControlButton {
    fn handle_event(&mut self, event: &GuiEvent, ctx: &mut GuiContext<'_>) -> Propagation {
        if !self.enabled {
            self.state = ButtonState::Disabled;
            return Propagation::Continue;
        }

        let over_self = event.is_for(ctx.id());
        match event {
            GuiEvent::MouseMoved { .. } => {
                self.state = match (self.state, over_self) {
                    (ButtonState::Pressed, _) => ButtonState::Pressed,
                    (_, true) => ButtonState::Hovered,
                    (_, false) => ButtonState::Normal,
                };
            }
            GuiEvent::MouseClicked {
                button: MouseButton::Left,
                ..
            } if over_self => {
                self.state = ButtonState::Pressed;
                if !ctx.has_focus() {
                    ctx.take_focus();
                }
            }
            GuiEvent::MouseReleased {
                button: MouseButton::Left,
                ..
            } if self.state == ButtonState::Pressed => {
                if over_self {
                    self.state = ButtonState::Hovered;
                    self.activations += 1;
                    log::debug!("Button {:?} activated", ctx.id());
                    ctx.inject_event(GuiEvent::Activated { origin: ctx.id() });
                } else {
                    self.state = ButtonState::Normal;
                }
            }
            _ => {}
        }
        Propagation::Continue
    }
}

impl Drawable for ControlButton {
    fn draw_background(&self, ctx: &mut DrawContext<'_>) {
        let (position, size) = (ctx.position(), ctx.size());
        fill_framed(ctx, position, size, self.current_color(), self.border_color, self.border_width);
    }
}

impl Tickable for ControlButton {}
