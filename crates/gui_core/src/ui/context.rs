//! Contexts handed to widgets while they run

use super::{GuiTree, Side};
use crate::events::GuiEvent;
use crate::foundation::collections::ElementId;
use crate::foundation::math::{saturating_sub, Color, Vector2i, Vector3d};
use crate::render::{GuiRenderBackend, RenderStack, RenderStage, ResourceLocation};
use crate::transform::Transformation;

/// Change requested by a widget, applied after the current traversal
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TreeCommand {
    TakeFocus(ElementId),
    DropFocus(ElementId),
    Inject(GuiEvent),
    Detach(ElementId),
    Destroy(ElementId),
}

/// View of the tree given to event handlers and tick hooks
///
/// Reads see the tree as it is during the traversal. Requested changes are
/// queued and applied in order after the traversal completes.
pub struct GuiContext<'a> {
    tree: &'a GuiTree,
    id: ElementId,
    commands: &'a mut Vec<TreeCommand>,
}

impl<'a> GuiContext<'a> {
    pub(crate) fn new(tree: &'a GuiTree, id: ElementId, commands: &'a mut Vec<TreeCommand>) -> Self {
        Self { tree, id, commands }
    }

    /// Element whose widget is running
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Read access to the whole tree
    pub fn tree(&self) -> &GuiTree {
        self.tree
    }

    /// Position relative to the parent
    pub fn position(&self) -> Vector2i {
        self.tree.position(self.id).unwrap_or_else(Vector2i::zeros)
    }

    /// Size of the element
    pub fn size(&self) -> Vector2i {
        self.tree.size(self.id).unwrap_or_else(Vector2i::zeros)
    }

    /// Position in root space
    pub fn absolute_position(&self) -> Vector2i {
        self.tree.absolute_position(self.id).unwrap_or_else(Vector2i::zeros)
    }

    /// Convert a root space point into this element's local space
    pub fn localize_global(&self, point: Vector2i) -> Vector2i {
        saturating_sub(point, self.absolute_position())
    }

    /// Mouse position in this element's local space
    pub fn local_mouse_position(&self) -> Vector2i {
        self.localize_global(self.tree.global_mouse_position())
    }

    /// Whether this element holds focus
    pub fn has_focus(&self) -> bool {
        self.tree.has_focus(self.id)
    }

    /// Side of the tree
    pub fn side(&self) -> Side {
        self.tree.side()
    }

    /// Take focus for this element once the traversal completes
    pub fn take_focus(&mut self) {
        self.commands.push(TreeCommand::TakeFocus(self.id));
    }

    /// Drop focus from this element once the traversal completes
    pub fn drop_focus(&mut self) {
        self.commands.push(TreeCommand::DropFocus(self.id));
    }

    /// Inject an event at the top of the tree once the traversal completes
    pub fn inject_event(&mut self, event: GuiEvent) {
        self.commands.push(TreeCommand::Inject(event));
    }

    /// Detach an element from its parent once the traversal completes
    pub fn detach(&mut self, id: ElementId) {
        self.commands.push(TreeCommand::Detach(id));
    }

    /// Destroy an element and its subtree once the traversal completes
    pub fn destroy(&mut self, id: ElementId) {
        self.commands.push(TreeCommand::Destroy(id));
    }
}

/// View of the tree and the render backend given to draw hooks
///
/// A texture bound through [`bind_texture`](Self::bind_texture) is released
/// when the context is dropped at the end of the hook.
pub struct DrawContext<'a> {
    tree: &'a GuiTree,
    id: ElementId,
    stage: RenderStage,
    backend: &'a mut dyn GuiRenderBackend,
    texture_bound: bool,
}

impl<'a> DrawContext<'a> {
    pub(crate) fn new(
        tree: &'a GuiTree,
        id: ElementId,
        stage: RenderStage,
        backend: &'a mut dyn GuiRenderBackend,
    ) -> Self {
        Self {
            tree,
            id,
            stage,
            backend,
            texture_bound: false,
        }
    }

    /// Element being drawn
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Read access to the whole tree
    pub fn tree(&self) -> &GuiTree {
        self.tree
    }

    /// Stage being drawn
    pub fn stage(&self) -> RenderStage {
        self.stage
    }

    /// Position relative to the parent, i.e. in the current drawing frame
    pub fn position(&self) -> Vector2i {
        self.tree.position(self.id).unwrap_or_else(Vector2i::zeros)
    }

    /// Size of the element
    pub fn size(&self) -> Vector2i {
        self.tree.size(self.id).unwrap_or_else(Vector2i::zeros)
    }

    /// Whether this element holds focus
    pub fn has_focus(&self) -> bool {
        self.tree.has_focus(self.id)
    }

    /// Mouse position in this element's local space
    pub fn local_mouse_position(&self) -> Vector2i {
        self.tree
            .local_mouse_position(self.id)
            .unwrap_or_else(|| self.tree.global_mouse_position())
    }

    /// Bind a texture for the rest of this hook
    pub fn bind_texture(&mut self, texture: &ResourceLocation) {
        self.backend.bind_texture(texture);
        self.texture_bound = true;
    }

    /// Fill a rectangle in the current frame
    pub fn fill_rect(&mut self, position: Vector2i, size: Vector2i, color: Color) {
        self.backend.fill_rect(position, size, color);
    }

    /// Draw part of the bound texture in the current frame
    pub fn draw_textured_rect(&mut self, position: Vector2i, size: Vector2i, uv: Vector2i) {
        self.backend.draw_textured_rect(position, size, uv);
    }

    /// Run `draw` with `transformation` applied on top of the current frame.
    ///
    /// The backend's transform stack is restored afterwards.
    pub fn with_transformation(&mut self, transformation: &dyn Transformation, draw: impl FnOnce(&mut Self)) {
        self.backend.push_matrix();
        transformation.push_to_render_stack(&mut BackendStack(&mut *self.backend));
        draw(self);
        self.backend.pop_matrix();
    }

    /// Direct access to the backend
    pub fn backend(&mut self) -> &mut dyn GuiRenderBackend {
        &mut *self.backend
    }
}

/// Exposes a render backend through its transform stack alone
struct BackendStack<'b>(&'b mut dyn GuiRenderBackend);

impl RenderStack for BackendStack<'_> {
    fn push_matrix(&mut self) {
        self.0.push_matrix();
    }

    fn pop_matrix(&mut self) {
        self.0.pop_matrix();
    }

    fn translate(&mut self, offset: Vector3d) {
        self.0.translate(offset);
    }

    fn scale(&mut self, factor: Vector3d) {
        self.0.scale(factor);
    }

    fn rotate(&mut self, angle_degrees: f64, axis: Vector3d) {
        self.0.rotate(angle_degrees, axis);
    }
}

impl Drop for DrawContext<'_> {
    fn drop(&mut self) {
        if self.texture_bound {
            self.backend.unbind_texture();
        }
    }
}
