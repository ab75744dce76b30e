//! The three fractal generators and the dispatch over them.
//!
//! Each submodule exposes one recursive rule; `generate_into` selects among
//! them by [`FractalKind`] and fully replaces the destination buffer.

pub mod levy;
pub mod sierpinski;
pub mod tree;

use crate::geometry::{GeometryBuffer, Topology};

/// Selector among the supported self-similar shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FractalKind {
    Sierpinski,
    LevyCurve,
    Tree,
}

impl FractalKind {
    /// The three kinds in selection order.
    pub const ALL: [FractalKind; 3] = [
        FractalKind::Sierpinski,
        FractalKind::LevyCurve,
        FractalKind::Tree,
    ];

    /// Primitive grouping the renderer must use for this kind's output.
    pub fn topology(self) -> Topology {
        match self {
            FractalKind::Sierpinski => Topology::TriangleList,
            FractalKind::LevyCurve | FractalKind::Tree => Topology::LineList,
        }
    }

    /// Largest depth worth rendering interactively. Deeper values only blow
    /// up the output size; callers clamp to this before generating.
    pub fn max_depth(self) -> u32 {
        match self {
            FractalKind::Sierpinski => 6,
            FractalKind::LevyCurve => 12,
            FractalKind::Tree => 10,
        }
    }

    /// Display label.
    pub fn name(self) -> &'static str {
        match self {
            FractalKind::Sierpinski => "Sierpinski Triangle",
            FractalKind::LevyCurve => "Levy Curve",
            FractalKind::Tree => "Tree",
        }
    }
}

/// Regenerate `geom` as fractal `kind` subdivided `depth` times.
///
/// Pure in `(kind, depth)`: repeated calls produce identical output. The
/// buffer's previous contents are discarded wholesale. Call-stack use grows
/// linearly with `depth`; callers keep it within [`FractalKind::max_depth`].
pub fn generate_into(kind: FractalKind, depth: u32, geom: &mut GeometryBuffer) {
    match kind {
        FractalKind::Sierpinski => sierpinski::generate(geom, depth),
        FractalKind::LevyCurve => levy::generate(geom, depth),
        FractalKind::Tree => tree::generate(geom, depth),
    }
}

/// Convenience wrapper allocating a fresh buffer.
pub fn generate(kind: FractalKind, depth: u32) -> GeometryBuffer {
    let mut geom = GeometryBuffer::new();
    generate_into(kind, depth, &mut geom);
    geom
}
