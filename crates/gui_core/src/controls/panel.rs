//! Panel control - rectangular backgrounds with optional borders

use crate::foundation::math::{Color, Vector2i};
use crate::ui::{DrawContext, Drawable, Eventable, Tickable};

/// Colored rectangle drawn behind its children
#[derive(Debug, Clone)]
pub struct ControlPanel {
    /// Background color (RGBA)
    pub color: Color,

    /// Border color (RGBA), if border_width > 0
    pub border_color: Color,

    /// Border width in pixels
    pub border_width: i32,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            color: Color::new(0.2, 0.2, 0.2, 0.8),
            border_color: Color::new(1.0, 1.0, 1.0, 1.0),
            border_width: 0,
        }
    }
}

impl ControlPanel {
    /// Create a borderless panel
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Add a border (builder pattern)
    pub fn with_border(mut self, color: Color, width: i32) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }
}

/// Fill `size` at `position`, optionally framed by a border drawn underneath
pub(crate) fn fill_framed(
    ctx: &mut DrawContext<'_>,
    position: Vector2i,
    size: Vector2i,
    fill: Color,
    border: Color,
    border_width: i32,
) {
    if border_width > 0 && size.x > 2 * border_width && size.y > 2 * border_width {
        ctx.fill_rect(position, size, border);
        let inset = Vector2i::repeat(border_width);
        ctx.fill_rect(position + inset, size - inset * 2, fill);
    } else {
        ctx.fill_rect(position, size, fill);
    }
}

impl Drawable for ControlPanel {
    fn draw_background(&self, ctx: &mut DrawContext<'_>) {
        let (position, size) = (ctx.position(), ctx.size());
        fill_framed(ctx, position, size, self.color, self.border_color, self.border_width);
    }
}

impl Eventable for ControlPanel {}
impl Tickable for ControlPanel {}
