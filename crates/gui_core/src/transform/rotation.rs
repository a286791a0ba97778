use super::Transformation;
use crate::foundation::math::{utils, Matrix4d, Rotation3, Unit, Vector3d};
use crate::render::RenderStack;

/// Rotation around an axis through the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Angle in radians, counter-clockwise looking down the axis
    pub angle: f64,
    /// Rotation axis
    pub axis: Unit<Vector3d>,
}

impl Rotation {
    /// Create a rotation of `angle` radians around `axis`
    pub fn new(angle: f64, axis: Vector3d) -> Self {
        Self {
            angle,
            axis: Unit::new_normalize(axis),
        }
    }

    /// Create a rotation of `degrees` around `axis`
    pub fn from_degrees(degrees: f64, axis: Vector3d) -> Self {
        Self::new(utils::deg_to_rad(degrees), axis)
    }

    fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&self.axis, self.angle)
    }
}

impl Transformation for Rotation {
    fn apply_to(&self, point: &mut Vector3d) {
        *point = self.rotation() * *point;
    }

    fn apply_to_normal(&self, normal: &mut Vector3d) {
        *normal = self.rotation() * *normal;
    }

    fn apply_to_matrix(&self, matrix: &mut Matrix4d) {
        *matrix = self.rotation().to_homogeneous() * *matrix;
    }

    fn push_to_render_stack(&self, stack: &mut dyn RenderStack) {
        stack.rotate(utils::rad_to_deg(self.angle), self.axis.into_inner());
    }

    fn inverse(&self) -> Box<dyn Transformation> {
        Box::new(Self {
            angle: -self.angle,
            axis: self.axis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::assert_consistent;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_turns_points_and_normals() {
        let rotation = Rotation::from_degrees(90.0, Vector3d::z());
        let mut point = Vector3d::new(2.0, 0.0, 0.0);
        let mut normal = Vector3d::new(0.0, 1.0, 0.0);
        rotation.apply_to(&mut point);
        rotation.apply_to_normal(&mut normal);

        assert_relative_eq!(point, Vector3d::new(0.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(normal, Vector3d::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_forms_agree() {
        assert_consistent(&Rotation::from_degrees(33.0, Vector3d::new(1.0, 1.0, 0.0)), Vector3d::new(4.0, -1.0, 2.0));
    }
}
