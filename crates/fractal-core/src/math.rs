//! Planar vector helpers used by the subdivision rules.

use glam::Vec3;

/// Rotate the xy components of `v` about the z axis by `angle` radians,
/// counter-clockwise for positive angles. The z component passes through.
pub fn rotate_z(v: Vec3, angle: f32) -> Vec3 {
    let (sin_a, cos_a) = angle.sin_cos();
    Vec3::new(
        v.x * cos_a - v.y * sin_a,
        v.x * sin_a + v.y * cos_a,
        v.z,
    )
}

/// The +90 degree in-plane perpendicular of `v`: swap the xy components and
/// negate one, z forced to 0.
pub fn perp_xy(v: Vec3) -> Vec3 {
    Vec3::new(-v.y, v.x, 0.0)
}
