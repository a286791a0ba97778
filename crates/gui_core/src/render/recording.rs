//! Recording render backend
//!
//! Resolves every draw call against its own [`MatrixStack`] and stores the
//! result as a [`DrawCommand`] in root space. Used by headless hosts and tests.

use super::{GuiRenderBackend, MatrixStack, RenderStack, ResourceLocation};
use crate::foundation::math::{to_vector3d, Color, Vector2i, Vector3d};

/// A draw call resolved to root space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle
    FillRect {
        /// Top-left corner after applying the transform stack
        origin: Vector3d,
        /// Size as requested by the widget
        size: Vector2i,
        /// Fill color
        color: Color,
    },
    /// Textured rectangle
    TexturedRect {
        /// Top-left corner after applying the transform stack
        origin: Vector3d,
        /// Size as requested by the widget
        size: Vector2i,
        /// Texel offset into the texture
        uv: Vector2i,
        /// Texture bound when the draw was issued
        texture: Option<ResourceLocation>,
    },
}

impl DrawCommand {
    /// Root space origin of the command
    pub fn origin(&self) -> Vector3d {
        match self {
            Self::FillRect { origin, .. } | Self::TexturedRect { origin, .. } => *origin,
        }
    }
}

/// Software [`GuiRenderBackend`] that records resolved draw commands
#[derive(Debug, Default)]
pub struct RecordingBackend {
    stack: MatrixStack,
    bound_texture: Option<ResourceLocation>,
    commands: Vec<DrawCommand>,
    texture_binds: usize,
    frames: u64,
}

impl RecordingBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last [`clear`](Self::clear)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forget recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Transform stack used to resolve coordinates
    pub fn stack(&self) -> &MatrixStack {
        &self.stack
    }

    /// Texture currently bound, if any
    pub fn bound_texture(&self) -> Option<&ResourceLocation> {
        self.bound_texture.as_ref()
    }

    /// Total number of texture binds requested
    pub fn texture_binds(&self) -> usize {
        self.texture_binds
    }

    /// Number of completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderStack for RecordingBackend {
    fn push_matrix(&mut self) {
        self.stack.push_matrix();
    }

    fn pop_matrix(&mut self) {
        self.stack.pop_matrix();
    }

    fn translate(&mut self, offset: Vector3d) {
        self.stack.translate(offset);
    }

    fn scale(&mut self, factor: Vector3d) {
        self.stack.scale(factor);
    }

    fn rotate(&mut self, angle_degrees: f64, axis: Vector3d) {
        self.stack.rotate(angle_degrees, axis);
    }
}

impl GuiRenderBackend for RecordingBackend {
    fn begin_frame(&mut self) {
        self.bound_texture = None;
    }

    fn end_frame(&mut self) {
        if self.stack.depth() != 0 {
            log::warn!("Frame ended with {} unbalanced matrix pushes", self.stack.depth());
            self.stack.reset();
        }
        self.frames += 1;
    }

    fn bind_texture(&mut self, texture: &ResourceLocation) {
        log::trace!("Binding texture {}", texture);
        self.bound_texture = Some(texture.clone());
        self.texture_binds += 1;
    }

    fn unbind_texture(&mut self) {
        self.bound_texture = None;
    }

    fn fill_rect(&mut self, position: Vector2i, size: Vector2i, color: Color) {
        let origin = self.stack.transform_point(to_vector3d(position));
        self.commands.push(DrawCommand::FillRect { origin, size, color });
    }

    fn draw_textured_rect(&mut self, position: Vector2i, size: Vector2i, uv: Vector2i) {
        if self.bound_texture.is_none() {
            log::warn!("Textured draw at {:?} with no texture bound", position);
        }
        let origin = self.stack.transform_point(to_vector3d(position));
        self.commands.push(DrawCommand::TexturedRect {
            origin,
            size,
            uv,
            texture: self.bound_texture.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_resolved_through_stack() {
        let mut backend = RecordingBackend::new();
        backend.push_matrix();
        backend.translate(Vector3d::new(10.0, 20.0, 0.0));
        backend.fill_rect(Vector2i::new(1, 2), Vector2i::new(3, 3), Color::new(1.0, 0.0, 0.0, 1.0));
        backend.pop_matrix();
        backend.fill_rect(Vector2i::new(1, 2), Vector2i::new(3, 3), Color::new(1.0, 0.0, 0.0, 1.0));

        let origins: Vec<_> = backend.commands().iter().map(DrawCommand::origin).collect();
        assert_eq!(origins, vec![Vector3d::new(11.0, 22.0, 0.0), Vector3d::new(1.0, 2.0, 0.0)]);
    }

    #[test]
    fn test_textured_rect_captures_binding() {
        let mut backend = RecordingBackend::new();
        let texture = ResourceLocation::new("gui", "slot.png");
        backend.bind_texture(&texture);
        backend.draw_textured_rect(Vector2i::zeros(), Vector2i::new(18, 18), Vector2i::new(0, 0));
        backend.unbind_texture();

        match &backend.commands()[0] {
            DrawCommand::TexturedRect { texture: bound, .. } => assert_eq!(bound.as_ref(), Some(&texture)),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(backend.bound_texture(), None);
        assert_eq!(backend.texture_binds(), 1);
    }

    #[test]
    fn test_end_frame_resets_unbalanced_stack() {
        let mut backend = RecordingBackend::new();
        backend.begin_frame();
        backend.push_matrix();
        backend.end_frame();
        assert_eq!(backend.stack().depth(), 0);
        assert_eq!(backend.frames(), 1);
    }
}
