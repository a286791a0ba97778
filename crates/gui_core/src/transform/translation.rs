use super::Transformation;
use crate::foundation::math::{Matrix4d, Vector3d};
use crate::render::RenderStack;

/// Translation by a fixed offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    /// Offset added to points
    pub offset: Vector3d,
}

impl Translation {
    /// Create a translation
    pub fn new(offset: Vector3d) -> Self {
        Self { offset }
    }
}

impl Transformation for Translation {
    fn apply_to(&self, point: &mut Vector3d) {
        *point += self.offset;
    }

    fn apply_to_normal(&self, _normal: &mut Vector3d) {}

    fn apply_to_matrix(&self, matrix: &mut Matrix4d) {
        *matrix = Matrix4d::new_translation(&self.offset) * *matrix;
    }

    fn push_to_render_stack(&self, stack: &mut dyn RenderStack) {
        stack.translate(self.offset);
    }

    fn inverse(&self) -> Box<dyn Transformation> {
        Box::new(Self::new(-self.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::assert_consistent;

    #[test]
    fn test_translation_moves_points_not_normals() {
        let translation = Translation::new(Vector3d::new(1.0, -2.0, 0.5));
        let mut point = Vector3d::new(1.0, 1.0, 1.0);
        let mut normal = Vector3d::new(0.0, 0.0, 1.0);
        translation.apply_to(&mut point);
        translation.apply_to_normal(&mut normal);

        assert_eq!(point, Vector3d::new(2.0, -1.0, 1.5));
        assert_eq!(normal, Vector3d::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_translation_forms_agree() {
        assert_consistent(&Translation::new(Vector3d::new(7.0, 0.0, -3.0)), Vector3d::new(1.0, 2.0, 3.0));
    }
}
