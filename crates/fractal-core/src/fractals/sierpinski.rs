//! Sierpinski triangle: corner subdivision with the central hole.

use glam::Vec3;

use crate::geometry::GeometryBuffer;

/// Root triangle, centered on the origin.
pub const ROOT: [Vec3; 3] = [
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.0, 0.5, 0.0),
];

/// Replace `geom` with the Sierpinski triangle at `depth` subdivisions.
///
/// Emits `3 * 3^depth` vertices as a triangle list, depth-first in corner
/// order, so the output order is stable across calls.
pub fn generate(geom: &mut GeometryBuffer, depth: u32) {
    geom.clear();
    subdivide(geom, ROOT[0], ROOT[1], ROOT[2], depth);
}

fn subdivide(geom: &mut GeometryBuffer, p1: Vec3, p2: Vec3, p3: Vec3, depth: u32) {
    if depth == 0 {
        // One flat-shaded triangle; the color keys off the first vertex,
        // remapped from [-1, 1] clip space into [0, 1].
        let color = Vec3::new((p1.x + 1.0) * 0.5, (p1.y + 1.0) * 0.5, 0.5);
        geom.push(p1, color);
        geom.push(p2, color);
        geom.push(p3, color);
    } else {
        let mid1 = (p1 + p2) * 0.5;
        let mid2 = (p2 + p3) * 0.5;
        let mid3 = (p1 + p3) * 0.5;

        // Three corner triangles; the middle one is the hole.
        subdivide(geom, p1, mid1, mid3, depth - 1);
        subdivide(geom, mid1, p2, mid2, depth - 1);
        subdivide(geom, mid3, mid2, p3, depth - 1);
    }
}
