//! Spatial transformations
//!
//! Every transformation can be applied to a point, to a normal, to a 4x4
//! matrix, or issued onto a host [`RenderStack`]. The four operations agree:
//! applying a transformation to the identity matrix and mapping a point through
//! the result gives the same point as [`Transformation::apply_to`], and pushing
//! it onto a fresh stack leaves that same matrix on top.

mod list;
mod rotation;
mod scale;
mod translation;

pub use list::TransformationList;
pub use rotation::Rotation;
pub use scale::Scale;
pub use translation::Translation;

use crate::foundation::math::{Matrix4d, Vector3d};
use crate::render::RenderStack;
use std::fmt;

/// Capability set shared by all transformations
pub trait Transformation: fmt::Debug {
    /// Transform a point in place
    fn apply_to(&self, point: &mut Vector3d);

    /// Transform a direction in place
    fn apply_to_normal(&self, normal: &mut Vector3d);

    /// Compose this transformation after the one already held by `matrix`
    fn apply_to_matrix(&self, matrix: &mut Matrix4d);

    /// Issue this transformation onto the host transform stack
    fn push_to_render_stack(&self, stack: &mut dyn RenderStack);

    /// Transformation undoing this one
    fn inverse(&self) -> Box<dyn Transformation>;

    /// Matrix form of this transformation
    fn to_matrix(&self) -> Matrix4d {
        let mut matrix = Matrix4d::identity();
        self.apply_to_matrix(&mut matrix);
        matrix
    }
}
