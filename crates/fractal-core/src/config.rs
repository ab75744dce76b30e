use crate::fractals::FractalKind;

/// Explicit scene selection threaded into every generation call.
///
/// There is deliberately no process-wide "current fractal" state; whoever
/// drives the render loop owns one of these and passes it along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub kind: FractalKind,
    pub depth: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            kind: FractalKind::Sierpinski,
            depth: 0,
        }
    }
}

impl SceneConfig {
    /// Requested depth clamped to the kind's interactive maximum, keeping
    /// output sizes tractable for display.
    pub fn clamped_depth(&self) -> u32 {
        self.depth.min(self.kind.max_depth())
    }
}
