use super::Transformation;
use crate::foundation::math::{Matrix4d, Vector3d};
use crate::render::RenderStack;

/// Ordered composition of transformations
///
/// The first transformation added is the first one applied to points.
#[derive(Debug, Default)]
pub struct TransformationList {
    transformations: Vec<Box<dyn Transformation>>,
}

impl TransformationList {
    /// Create an empty list, equivalent to the identity
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformation (builder pattern)
    pub fn with(mut self, transformation: impl Transformation + 'static) -> Self {
        self.transformations.push(Box::new(transformation));
        self
    }

    /// Append a boxed transformation
    pub fn push(&mut self, transformation: Box<dyn Transformation>) {
        self.transformations.push(transformation);
    }

    /// Number of transformations in the list
    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    /// Whether the list is the identity
    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }
}

impl Transformation for TransformationList {
    fn apply_to(&self, point: &mut Vector3d) {
        for transformation in &self.transformations {
            transformation.apply_to(point);
        }
    }

    fn apply_to_normal(&self, normal: &mut Vector3d) {
        for transformation in &self.transformations {
            transformation.apply_to_normal(normal);
        }
    }

    fn apply_to_matrix(&self, matrix: &mut Matrix4d) {
        for transformation in &self.transformations {
            transformation.apply_to_matrix(matrix);
        }
    }

    fn push_to_render_stack(&self, stack: &mut dyn RenderStack) {
        // The stack post-multiplies, so issue the last transformation first
        for transformation in self.transformations.iter().rev() {
            transformation.push_to_render_stack(stack);
        }
    }

    fn inverse(&self) -> Box<dyn Transformation> {
        Box::new(Self {
            transformations: self.transformations.iter().rev().map(|t| t.inverse()).collect(),
        })
    }
}
