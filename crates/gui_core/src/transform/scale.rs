use super::Transformation;
use crate::foundation::math::{Matrix4d, Vector3d};
use crate::render::RenderStack;

/// Non-uniform scale
///
/// Normals are left untouched; no inverse-transpose correction is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Per-axis scale factor
    pub factor: Vector3d,
}

impl Scale {
    /// Create a per-axis scale
    pub fn new(factor: Vector3d) -> Self {
        Self { factor }
    }

    /// Create the same scale on every axis
    pub fn uniform(factor: f64) -> Self {
        Self::new(Vector3d::repeat(factor))
    }
}

impl Transformation for Scale {
    fn apply_to(&self, point: &mut Vector3d) {
        point.component_mul_assign(&self.factor);
    }

    fn apply_to_normal(&self, _normal: &mut Vector3d) {}

    fn apply_to_matrix(&self, matrix: &mut Matrix4d) {
        *matrix = Matrix4d::new_nonuniform_scaling(&self.factor) * *matrix;
    }

    fn push_to_render_stack(&self, stack: &mut dyn RenderStack) {
        stack.scale(self.factor);
    }

    fn inverse(&self) -> Box<dyn Transformation> {
        Box::new(Self::new(self.factor.map(|f| 1.0 / f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::assert_consistent;

    #[test]
    fn test_scale_point_component_wise() {
        let mut point = Vector3d::new(1.0, 2.0, 3.0);
        Scale::new(Vector3d::new(2.0, 3.0, 4.0)).apply_to(&mut point);
        assert_eq!(point, Vector3d::new(2.0, 6.0, 12.0));
    }

    #[test]
    fn test_scale_leaves_normals() {
        let mut normal = Vector3d::new(0.0, 1.0, 0.0);
        Scale::uniform(5.0).apply_to_normal(&mut normal);
        assert_eq!(normal, Vector3d::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_scale_matrix_scales_diagonal() {
        let mut matrix = Matrix4d::identity();
        Scale::new(Vector3d::new(2.0, 3.0, 4.0)).apply_to_matrix(&mut matrix);
        assert_eq!(matrix[(0, 0)], 2.0);
        assert_eq!(matrix[(1, 1)], 3.0);
        assert_eq!(matrix[(2, 2)], 4.0);
        assert_eq!(matrix[(3, 3)], 1.0);
    }

    #[test]
    fn test_scale_forms_agree() {
        assert_consistent(&Scale::new(Vector3d::new(0.5, 2.0, -1.0)), Vector3d::new(3.0, -4.0, 8.0));
    }
}
