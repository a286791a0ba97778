//! Software transform stack

use super::RenderStack;
use crate::foundation::math::{utils, Matrix4d, Rotation3, Unit, Vector3d};
use nalgebra::Point3;

/// Matrix stack with OpenGL-style post-multiplication
///
/// The stack is never empty; the bottom entry starts as the identity.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<Matrix4d>,
}

impl MatrixStack {
    /// Create a stack holding only the identity matrix
    pub fn new() -> Self {
        Self {
            stack: vec![Matrix4d::identity()],
        }
    }

    /// Current matrix
    pub fn top(&self) -> &Matrix4d {
        // The bottom entry is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Matrix4d {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Number of saved matrices above the bottom entry
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Multiply the current matrix by `matrix` on the right
    pub fn mult_matrix(&mut self, matrix: &Matrix4d) {
        let top = self.top_mut();
        *top *= matrix;
    }

    /// Map a point through the current matrix
    pub fn transform_point(&self, point: Vector3d) -> Vector3d {
        self.top().transform_point(&Point3::from(point)).coords
    }

    /// Reset to a single identity matrix
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(Matrix4d::identity());
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStack for MatrixStack {
    fn push_matrix(&mut self) {
        let top = *self.top();
        self.stack.push(top);
    }

    fn pop_matrix(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            log::warn!("Matrix stack underflow: pop without matching push");
        }
    }

    fn translate(&mut self, offset: Vector3d) {
        self.mult_matrix(&Matrix4d::new_translation(&offset));
    }

    fn scale(&mut self, factor: Vector3d) {
        self.mult_matrix(&Matrix4d::new_nonuniform_scaling(&factor));
    }

    fn rotate(&mut self, angle_degrees: f64, axis: Vector3d) {
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), utils::deg_to_rad(angle_degrees));
        self.mult_matrix(&rotation.to_homogeneous());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_push_pop_restores_matrix() {
        let mut stack = MatrixStack::new();
        stack.translate(Vector3d::new(5.0, 0.0, 0.0));
        stack.push_matrix();
        stack.translate(Vector3d::new(0.0, 7.0, 0.0));
        assert_eq!(stack.depth(), 1);
        assert_relative_eq!(stack.transform_point(Vector3d::zeros()), Vector3d::new(5.0, 7.0, 0.0));

        stack.pop_matrix();
        assert_eq!(stack.depth(), 0);
        assert_relative_eq!(stack.transform_point(Vector3d::zeros()), Vector3d::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_pop_underflow_keeps_bottom() {
        let mut stack = MatrixStack::new();
        stack.pop_matrix();
        assert_eq!(stack.depth(), 0);
        assert_eq!(*stack.top(), Matrix4d::identity());
    }

    #[test]
    fn test_last_transform_applies_first() {
        let mut stack = MatrixStack::new();
        stack.translate(Vector3d::new(10.0, 0.0, 0.0));
        stack.scale(Vector3d::new(2.0, 2.0, 1.0));

        // Scale first, then translate
        assert_relative_eq!(stack.transform_point(Vector3d::new(1.0, 1.0, 0.0)), Vector3d::new(12.0, 2.0, 0.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut stack = MatrixStack::new();
        stack.rotate(90.0, Vector3d::z());
        assert_relative_eq!(
            stack.transform_point(Vector3d::new(1.0, 0.0, 0.0)),
            Vector3d::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }
}
