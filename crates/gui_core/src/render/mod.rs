//! Render contract between the GUI tree and the host engine
//!
//! The tree never talks to a graphics API. It issues immediate-mode calls on a
//! [`GuiRenderBackend`]: a native transform stack plus texture binding and a
//! couple of rectangle primitives. Hosts implement the trait on top of their
//! renderer; [`RecordingBackend`] is a software implementation that records
//! what was drawn and where.

pub mod matrix_stack;
pub mod recording;
pub mod resource;

pub use matrix_stack::MatrixStack;
pub use recording::{DrawCommand, RecordingBackend};
pub use resource::{ParseResourceLocationError, ResourceLocation};

use crate::foundation::math::{Color, Vector2i, Vector3d};

/// Visual layer drawn by one full pass over the tree
///
/// A frame draws every element's background, then every foreground, then
/// every overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStage {
    /// Backdrops, slot frames, panels
    Background,
    /// Element content
    Foreground,
    /// Highlights and tooltips drawn above everything else
    Overlay,
}

impl RenderStage {
    /// All stages in frame order
    pub const ALL: [RenderStage; 3] = [Self::Background, Self::Foreground, Self::Overlay];
}

/// Native transform stack of the host
///
/// Transform calls post-multiply the current matrix, so the most recently
/// issued transform is the first one applied to vertices.
pub trait RenderStack {
    /// Save a copy of the current matrix
    fn push_matrix(&mut self);

    /// Restore the matrix saved by the matching [`push_matrix`](Self::push_matrix)
    fn pop_matrix(&mut self);

    /// Translate the current matrix
    fn translate(&mut self, offset: Vector3d);

    /// Scale the current matrix non-uniformly
    fn scale(&mut self, factor: Vector3d);

    /// Rotate the current matrix by `angle_degrees` around `axis`
    fn rotate(&mut self, angle_degrees: f64, axis: Vector3d);
}

/// Backend-agnostic GUI rendering interface
///
/// Coordinates passed to the drawing primitives are in the current frame of
/// the transform stack.
pub trait GuiRenderBackend: RenderStack {
    /// Called once before the background pass of a frame
    fn begin_frame(&mut self) {}

    /// Called once after the overlay pass of a frame
    fn end_frame(&mut self) {}

    /// Bind a texture for the following textured draws
    fn bind_texture(&mut self, texture: &ResourceLocation);

    /// Release the texture bound during the current draw hook
    fn unbind_texture(&mut self) {}

    /// Fill a solid rectangle
    fn fill_rect(&mut self, position: Vector2i, size: Vector2i, color: Color);

    /// Draw a rectangle sampled from the bound texture starting at `uv` (texels)
    fn draw_textured_rect(&mut self, position: Vector2i, size: Vector2i, uv: Vector2i);
}
