use wasm_bindgen::prelude::*;

/// Timing of the last frame (zeros while perf metrics are disabled).
#[wasm_bindgen]
#[derive(Clone, Default, Debug)]
pub struct FrameStats {
    pub(super) frame_ms: f64,
    pub(super) step_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) render_ms: f64,
    pub(super) frame: u32,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
}

impl FrameStats {
    pub(super) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}
