//! Fractal tree: trunk plus three half-length children per branch.

use glam::Vec3;

use crate::geometry::GeometryBuffer;
use crate::math::rotate_z;

/// Trunk segment, from base to first fork.
pub const TRUNK: [Vec3; 2] = [Vec3::new(0.0, -0.8, 0.0), Vec3::new(0.0, -0.3, 0.0)];

/// Branch fork angle off the parent direction, in degrees.
pub const BRANCH_ANGLE_DEG: f32 = 25.7;

/// Levels at or below this are wood, deeper ones are foliage.
const WOOD_MAX_LEVEL: u32 = 3;

const BROWN: Vec3 = Vec3::new(0.4, 0.3, 0.2);
const GREEN: Vec3 = Vec3::new(0.13, 0.55, 0.13);

/// Replace `geom` with the tree branched `max_depth` times.
///
/// Every branch at every level is emitted (parents before children), for
/// `(3^(max_depth + 1) - 1) / 2` line segments total. Branch color is a hard
/// split on the recursion level, not a blend.
pub fn generate(geom: &mut GeometryBuffer, max_depth: u32) {
    geom.clear();
    grow(geom, TRUNK[0], TRUNK[1], 0, max_depth);
}

fn grow(geom: &mut GeometryBuffer, start: Vec3, end: Vec3, level: u32, max_depth: u32) {
    let color = if level <= WOOD_MAX_LEVEL { BROWN } else { GREEN };
    geom.push(start, color);
    geom.push(end, color);

    if level < max_depth {
        let dir = end - start;
        let length = dir.length();
        let unit = dir / length;
        let half = length * 0.5;
        let angle = BRANCH_ANGLE_DEG.to_radians();

        // One child continues straight past the tip; two fork off the
        // midpoint, turned either way off the parent direction.
        let midpoint = (start + end) * 0.5;
        let straight_end = end + unit * half;
        let fork_ccw = rotate_z(unit, angle) * half;
        let fork_cw = rotate_z(unit, -angle) * half;

        grow(geom, end, straight_end, level + 1, max_depth);
        grow(geom, midpoint, midpoint + fork_ccw, level + 1, max_depth);
        grow(geom, midpoint, midpoint + fork_cw, level + 1, max_depth);
    }
}
