//! Math utilities and types
//!
//! Integer vectors for GUI geometry and double precision types for transforms.

pub use nalgebra::{Matrix4, Rotation3, Unit, Vector2, Vector3, Vector4};

/// 2D integer vector used for element positions, sizes and mouse coordinates
pub type Vector2i = Vector2<i32>;

/// 3D vector type used by transformations
pub type Vector3d = Vector3<f64>;

/// 4x4 matrix type used by transformations and the render stack
pub type Matrix4d = Matrix4<f64>;

/// RGBA color, components in `0.0..=1.0`
pub type Color = Vector4<f32>;

/// Check if a point lies inside an axis-aligned rectangle.
///
/// All four edges are inclusive, so a rectangle of size `(w, h)` at `origin`
/// covers `origin.x..=origin.x + w` and `origin.y..=origin.y + h`.
pub fn point_in_rect(point: Vector2i, origin: Vector2i, size: Vector2i) -> bool {
    let far = saturating_add(origin, size);
    point.x >= origin.x && point.y >= origin.y && point.x <= far.x && point.y <= far.y
}

/// Component-wise addition clamped to the `i32` range
pub fn saturating_add(a: Vector2i, b: Vector2i) -> Vector2i {
    a.zip_map(&b, i32::saturating_add)
}

/// Component-wise subtraction clamped to the `i32` range
pub fn saturating_sub(a: Vector2i, b: Vector2i) -> Vector2i {
    a.zip_map(&b, i32::saturating_sub)
}

/// Widen an integer GUI vector into transform space (z = 0).
pub fn to_vector3d(v: Vector2i) -> Vector3d {
    Vector3d::new(f64::from(v.x), f64::from(v.y), 0.0)
}

/// Math utility functions
pub mod utils {
    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * RAD_TO_DEG
    }
}
