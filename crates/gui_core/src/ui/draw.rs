//! Three-stage draw pipeline

use super::{DrawContext, GuiError, GuiTree};
use crate::foundation::collections::ElementId;
use crate::foundation::math::to_vector3d;
use crate::render::{GuiRenderBackend, RenderStage};

impl GuiTree {
    /// Draw a full frame: background, foreground and overlay passes over the
    /// whole tree, in that order.
    pub fn draw_frame(&self, backend: &mut dyn GuiRenderBackend) -> Result<(), GuiError> {
        self.ensure_client()?;
        backend.begin_frame();
        for stage in RenderStage::ALL {
            self.draw_recursive(self.root, stage, backend);
        }
        backend.end_frame();
        Ok(())
    }

    /// Draw one stage of `id` and its subtree.
    ///
    /// The element's hook runs in the current frame of the backend's transform
    /// stack; each child is drawn with the stack translated by the element's
    /// position and restored afterwards.
    pub fn draw_element(
        &self,
        id: ElementId,
        stage: RenderStage,
        backend: &mut dyn GuiRenderBackend,
    ) -> Result<(), GuiError> {
        self.ensure_client()?;
        if !self.contains(id) {
            return Err(GuiError::UnknownElement(id));
        }
        self.draw_recursive(id, stage, backend);
        Ok(())
    }

    fn ensure_client(&self) -> Result<(), GuiError> {
        if self.side().is_client() {
            Ok(())
        } else {
            Err(GuiError::ServerSideRender)
        }
    }

    fn draw_recursive(&self, id: ElementId, stage: RenderStage, backend: &mut dyn GuiRenderBackend) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };

        if let Some(widget) = node.widget.as_deref() {
            let mut ctx = DrawContext::new(self, id, stage, backend);
            widget.draw_stage(stage, &mut ctx);
        }

        let offset = to_vector3d(node.position);
        for &child in &node.children {
            backend.push_matrix();
            backend.translate(offset);
            self.draw_recursive(child, stage, backend);
            backend.pop_matrix();
        }
    }
}
