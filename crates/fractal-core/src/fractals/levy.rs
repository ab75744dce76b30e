//! Levy C curve: midpoint displacement with a red-to-green gradient.

use glam::Vec3;

use crate::geometry::GeometryBuffer;
use crate::math::perp_xy;

/// Root segment endpoints.
pub const ROOT: [Vec3; 2] = [Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)];

const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Replace `geom` with the Levy curve at `depth` subdivisions.
///
/// Emits `2 * 2^depth` vertices as a line list. Endpoint colors interpolate
/// from pure red at curve parameter 0 to pure green at 1; subdivision keeps
/// each half's parameter range nested inside its parent's, so the gradient
/// stays monotone along the emitted order.
pub fn generate(geom: &mut GeometryBuffer, depth: u32) {
    geom.clear();
    subdivide(geom, ROOT[0], ROOT[1], depth, 0.0, 1.0);
}

fn subdivide(geom: &mut GeometryBuffer, p1: Vec3, p2: Vec3, depth: u32, t1: f32, t2: f32) {
    if depth == 0 {
        geom.push(p1, RED.lerp(GREEN, t1));
        geom.push(p2, RED.lerp(GREEN, t2));
    } else {
        // Push the midpoint out sideways by half the segment length; the
        // +90 degree turn is what folds the curve into its right angles.
        let dir = p2 - p1;
        let mid = (p1 + p2) * 0.5 + perp_xy(dir).normalize() * dir.length() * 0.5;
        let mid_t = (t1 + t2) * 0.5;

        subdivide(geom, p1, mid, depth - 1, t1, mid_t);
        subdivide(geom, mid, p2, depth - 1, mid_t, t2);
    }
}
