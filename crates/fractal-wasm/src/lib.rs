use wasm_bindgen::prelude::*;

use fractal_core::config::SceneConfig;
use fractal_core::fractals::{generate_into, FractalKind};
use fractal_core::geometry::{GeometryBuffer, Topology, Vertex};

/// Interactive fractal scene driven from JavaScript.
///
/// Owns the selection state the renderer mutates (current kind, one
/// remembered depth per kind) and keeps an interleaved vertex buffer ready
/// for upload after every change.
#[wasm_bindgen]
pub struct FractalScene {
    config: SceneConfig,
    depths: [u32; 3],
    geometry: GeometryBuffer,
    gpu_buffer: Vec<Vertex>,
}

#[wasm_bindgen]
impl FractalScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FractalScene {
        web_sys::console::log_1(&"WASM FractalScene created".into());

        let mut scene = FractalScene {
            config: SceneConfig::default(),
            depths: [0; 3],
            geometry: GeometryBuffer::new(),
            gpu_buffer: Vec::new(),
        };
        scene.regenerate();
        scene
    }

    /// Select a fractal by 0-based index (0 Sierpinski, 1 Levy, 2 Tree).
    /// Out-of-range indices fall back to Sierpinski. Restores the depth the
    /// kind was last viewed at.
    #[wasm_bindgen]
    pub fn set_fractal(&mut self, index: u32) {
        let kind = match index {
            1 => FractalKind::LevyCurve,
            2 => FractalKind::Tree,
            _ => FractalKind::Sierpinski,
        };
        self.config.kind = kind;
        self.config.depth = self.depths[kind_slot(kind)];
        web_sys::console::log_1(&format!("Fractal: {}", kind.name()).into());
        self.regenerate();
    }

    /// Set the subdivision depth, clamped to the current kind's maximum.
    #[wasm_bindgen]
    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth.min(self.config.kind.max_depth());
        self.depths[kind_slot(self.config.kind)] = self.config.depth;
        self.regenerate();
    }

    /// Step the depth up or down one level, saturating at both ends.
    #[wasm_bindgen]
    pub fn step_depth(&mut self, up: bool) {
        let depth = if up {
            self.config.depth + 1
        } else {
            self.config.depth.saturating_sub(1)
        };
        self.set_depth(depth);
    }

    /// Rebuild the geometry and GPU buffer. Returns elapsed milliseconds.
    #[wasm_bindgen]
    pub fn regenerate(&mut self) -> f32 {
        let start = js_sys::Date::now();
        generate_into(
            self.config.kind,
            self.config.clamped_depth(),
            &mut self.geometry,
        );
        self.write_gpu_output();
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn fractal_name(&self) -> String {
        self.config.kind.name().to_string()
    }

    #[wasm_bindgen]
    pub fn depth(&self) -> u32 {
        self.config.depth
    }

    #[wasm_bindgen]
    pub fn max_depth(&self) -> u32 {
        self.config.kind.max_depth()
    }

    /// True when the renderer should draw line-list primitives rather than
    /// triangles.
    #[wasm_bindgen]
    pub fn is_line_list(&self) -> bool {
        self.config.kind.topology() == Topology::LineList
    }

    /// Vertex count for sizing the draw call.
    #[wasm_bindgen]
    pub fn vertex_count(&self) -> usize {
        self.geometry.len()
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<Vertex, u8>(&self.gpu_buffer).len()
    }
}

impl Default for FractalScene {
    fn default() -> Self {
        Self::new()
    }
}

impl FractalScene {
    fn write_gpu_output(&mut self) {
        self.gpu_buffer.clear();
        self.gpu_buffer.reserve(self.geometry.len());
        for i in 0..self.geometry.len() {
            self.gpu_buffer.push(Vertex::new(
                self.geometry.positions[i],
                self.geometry.colors[i],
            ));
        }
    }
}

fn kind_slot(kind: FractalKind) -> usize {
    match kind {
        FractalKind::Sierpinski => 0,
        FractalKind::LevyCurve => 1,
        FractalKind::Tree => 2,
    }
}
