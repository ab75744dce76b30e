//! Vertex stream containers shared by all generators.

use glam::Vec3;

/// How the renderer should group emitted positions into primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Every consecutive triplet of vertices forms one triangle.
    TriangleList,
    /// Every consecutive pair of vertices forms one line segment.
    LineList,
}

impl Topology {
    pub fn vertices_per_primitive(self) -> usize {
        match self {
            Topology::TriangleList => 3,
            Topology::LineList => 2,
        }
    }
}

/// GPU-compatible interleaved vertex: 24 bytes, position then color.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// Caller-owned destination for generated geometry.
///
/// Holds two index-aligned sequences: `positions[i]` pairs with `colors[i]`.
/// Generators overwrite the whole buffer on every invocation; nothing is
/// appended across calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
        }
    }

    /// Drops all vertices, keeping the allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    /// Appends one vertex, keeping the two sequences index-aligned.
    pub fn push(&mut self, position: Vec3, color: Vec3) {
        self.positions.push(position);
        self.colors.push(color);
    }

    /// Number of vertices (positions and colors always agree).
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.positions.len(), self.colors.len());
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
