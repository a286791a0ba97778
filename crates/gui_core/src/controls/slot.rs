//! Inventory slot control

use crate::events::{GuiEvent, MouseButton, Propagation};
use crate::foundation::math::{point_in_rect, to_vector3d, Color, Vector2i, Vector3d};
use crate::render::ResourceLocation;
use crate::transform::{Scale, TransformationList, Translation};
use crate::ui::{DrawContext, Drawable, Eventable, GuiContext, Tickable};

/// Items held in a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    /// Item identifier understood by the host
    pub item_id: String,
    /// Stack size
    pub count: u32,
}

/// Inventory slot shown by a [`ControlSlot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBinding {
    /// Index of the slot in the host inventory
    pub index: usize,
    /// Current contents
    pub item: Option<ItemStack>,
}

/// View over one inventory slot
///
/// Clicking a bound slot selects it by taking focus; losing focus deselects
/// it. A slot without a binding ignores input.
#[derive(Debug, Clone)]
pub struct ControlSlot {
    binding: Option<SlotBinding>,
    texture: ResourceLocation,
    uv: Vector2i,
    selected: bool,
    last_click: Option<MouseButton>,
}

const ITEM_INSET: i32 = 1;
/// Item icons are authored at this size and scaled to fit the slot
const ITEM_ICON_SIZE: i32 = 16;
const ITEM_COLOR: [f32; 4] = [0.55, 0.45, 0.3, 1.0];
const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];

impl ControlSlot {
    /// Create a slot drawing its frame from `texture` at texel offset `uv`
    pub fn new(binding: Option<SlotBinding>, texture: ResourceLocation, uv: Vector2i) -> Self {
        Self {
            binding,
            texture,
            uv,
            selected: false,
            last_click: None,
        }
    }

    /// Bound inventory slot
    pub fn binding(&self) -> Option<&SlotBinding> {
        self.binding.as_ref()
    }

    /// Replace the bound inventory slot
    pub fn set_binding(&mut self, binding: Option<SlotBinding>) {
        if binding.is_none() {
            self.selected = false;
        }
        self.binding = binding;
    }

    /// Whether the slot is currently selected
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Button of the last click that selected the slot
    pub fn last_click(&self) -> Option<MouseButton> {
        self.last_click
    }
}

impl Eventable for ControlSlot {
    fn handle_event(&mut self, event: &GuiEvent, ctx: &mut GuiContext<'_>) -> Propagation {
        if !event.is_for(ctx.id()) {
            return Propagation::Continue;
        }

        match event {
            GuiEvent::FocusLost { .. } => self.selected = false,
            GuiEvent::MouseClicked { button, .. } => {
                let Some(binding) = &self.binding else {
                    return Propagation::Continue;
                };
                log::debug!("Slot {} clicked with {:?}", binding.index, button);
                self.last_click = Some(*button);
                self.selected = true;
                if !ctx.has_focus() {
                    ctx.take_focus();
                }
            }
            _ => {}
        }
        Propagation::Continue
    }
}

impl Drawable for ControlSlot {
    fn draw_background(&self, ctx: &mut DrawContext<'_>) {
        let (position, size) = (ctx.position(), ctx.size());
        ctx.bind_texture(&self.texture);
        ctx.draw_textured_rect(position, size, self.uv);
    }

    fn draw_foreground(&self, ctx: &mut DrawContext<'_>) {
        let occupied = self.binding.as_ref().is_some_and(|b| b.item.is_some());
        if occupied {
            let inset = Vector2i::repeat(ITEM_INSET);
            let area = ctx.size() - inset * 2;
            let icon = TransformationList::new()
                .with(Scale::new(Vector3d::new(
                    f64::from(area.x) / f64::from(ITEM_ICON_SIZE),
                    f64::from(area.y) / f64::from(ITEM_ICON_SIZE),
                    1.0,
                )))
                .with(Translation::new(to_vector3d(ctx.position() + inset)));
            ctx.with_transformation(&icon, |ctx| {
                ctx.fill_rect(Vector2i::zeros(), Vector2i::repeat(ITEM_ICON_SIZE), Color::from(ITEM_COLOR));
            });
        }
    }

    fn draw_overlay(&self, ctx: &mut DrawContext<'_>) {
        let size = ctx.size();
        let hovered = point_in_rect(ctx.local_mouse_position(), Vector2i::zeros(), size);
        if self.selected || hovered {
            let position = ctx.position();
            ctx.fill_rect(position, size, Color::from(HIGHLIGHT_COLOR));
        }
    }
}

impl Tickable for ControlSlot {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::GuiControl;
    use crate::foundation::collections::ElementId;
    use crate::render::{DrawCommand, RecordingBackend};
    use crate::ui::{GuiTree, Side};

    fn bound(index: usize) -> Option<SlotBinding> {
        Some(SlotBinding {
            index,
            item: Some(ItemStack {
                item_id: "iron_ingot".to_string(),
                count: 12,
            }),
        })
    }

    fn slot(binding: Option<SlotBinding>) -> ControlSlot {
        ControlSlot::new(binding, ResourceLocation::new("gui", "textures/slot.png"), Vector2i::new(0, 16))
    }

    fn setup() -> (GuiTree, ElementId, ElementId, ElementId) {
        let mut tree = GuiTree::new(Side::Client, GuiControl, Vector2i::new(100, 100));
        let root = tree.root();
        let first = tree.insert(root, slot(bound(0)), Vector2i::new(0, 0), Vector2i::new(18, 18)).unwrap();
        let second = tree.insert(root, slot(bound(1)), Vector2i::new(20, 0), Vector2i::new(18, 18)).unwrap();
        let empty = tree.insert(root, slot(None), Vector2i::new(40, 0), Vector2i::new(18, 18)).unwrap();
        (tree, first, second, empty)
    }

    #[test]
    fn test_slot_selection_follows_focus() {
        let (mut tree, first, second, _) = setup();

        tree.mouse_clicked(Vector2i::new(5, 5), MouseButton::Right);
        assert!(tree.widget::<ControlSlot>(first).unwrap().is_selected());
        assert_eq!(tree.widget::<ControlSlot>(first).unwrap().last_click(), Some(MouseButton::Right));
        assert!(tree.has_focus(first));

        tree.mouse_clicked(Vector2i::new(25, 5), MouseButton::Left);
        assert!(!tree.widget::<ControlSlot>(first).unwrap().is_selected());
        assert!(tree.widget::<ControlSlot>(second).unwrap().is_selected());
        assert!(tree.has_focus(second));
    }

    #[test]
    fn test_unbound_slot_ignores_clicks() {
        let (mut tree, _, _, empty) = setup();

        tree.mouse_clicked(Vector2i::new(45, 5), MouseButton::Left);

        let widget = tree.widget::<ControlSlot>(empty).unwrap();
        assert!(!widget.is_selected());
        assert_eq!(widget.last_click(), None);
        assert_eq!(tree.focused(), None);
    }

    #[test]
    fn test_slot_draws_frame_then_item() {
        let (mut tree, _, second, _) = setup();
        tree.set_global_mouse_position(Vector2i::new(90, 90));
        let mut backend = RecordingBackend::new();

        tree.draw_frame(&mut backend).unwrap();

        let textured = backend
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::TexturedRect { texture: Some(_), .. }))
            .count();
        assert_eq!(textured, 3);

        // Foreground item of the second slot sits one pixel inside its frame
        let items: Vec<_> = backend
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillRect { .. }))
            .map(DrawCommand::origin)
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], Vector3d::new(21.0, 1.0, 0.0));
        assert!(tree.contains(second));
    }
}
