use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::domain::SimulationConfig;
use crate::scene::toon_gradient;
use crate::systems::RapierWorld;

use super::perf_stats::FrameStats;
use super::{DrapeCore, JsRenderer};

#[wasm_bindgen]
pub struct MeshLayout {
    positions_ptr: u32,
    positions_len_elements: u32,
    normals_ptr: u32,
    normals_len_elements: u32,
    uvs_ptr: u32,
    uvs_len_elements: u32,
    indices_ptr: u32,
    indices_len_elements: u32,
}

#[wasm_bindgen]
impl MeshLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn positions_len_elements(&self) -> u32 { self.positions_len_elements }

    #[wasm_bindgen(getter)]
    pub fn normals_ptr(&self) -> u32 { self.normals_ptr }
    #[wasm_bindgen(getter)]
    pub fn normals_len_elements(&self) -> u32 { self.normals_len_elements }

    #[wasm_bindgen(getter)]
    pub fn uvs_ptr(&self) -> u32 { self.uvs_ptr }
    #[wasm_bindgen(getter)]
    pub fn uvs_len_elements(&self) -> u32 { self.uvs_len_elements }

    #[wasm_bindgen(getter)]
    pub fn indices_ptr(&self) -> u32 { self.indices_ptr }
    #[wasm_bindgen(getter)]
    pub fn indices_len_elements(&self) -> u32 { self.indices_len_elements }
}

/// The cloth demo as seen from the page.
#[wasm_bindgen]
pub struct ClothDemo {
    core: DrapeCore<RapierWorld>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Demo with the default 12x12 cloth.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ClothDemo, JsValue> {
        Self::build(SimulationConfig::default())
    }

    /// Demo from a (partial) JSON config. Bad config throws.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<ClothDemo, JsValue> {
        let config = SimulationConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(config)
    }

    fn build(config: SimulationConfig) -> Result<ClothDemo, JsValue> {
        let core = DrapeCore::with_rapier(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ClothDemo { core })
    }

    /// Run one frame. `render` receives
    /// `(meshDirty, sphereX, sphereY, sphereZ, sphereColor)`.
    pub fn frame(&mut self, render: &Function, controls: Option<Function>) {
        let mut renderer = JsRenderer::new(render, controls.as_ref());
        self.core.frame(&mut renderer);
    }

    /// Sync the mesh from physics without stepping.
    pub fn sync_mesh(&mut self) {
        self.core.sync_mesh();
    }

    /// Returns the new camera aspect ratio.
    pub fn resize(&mut self, width: f32, height: f32) -> f32 {
        self.core.resize(width, height)
    }

    #[wasm_bindgen(getter)]
    pub fn aspect(&self) -> f32 { self.core.viewport().aspect() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.grid().particle_count() }

    #[wasm_bindgen(getter)]
    pub fn constraint_count(&self) -> usize { self.core.grid().constraint_count() }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u32 { self.core.frame_count() }

    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> f32 { self.core.elapsed() }

    #[wasm_bindgen(getter)]
    pub fn sphere_x(&self) -> f32 { self.core.sphere_position().x }
    #[wasm_bindgen(getter)]
    pub fn sphere_y(&self) -> f32 { self.core.sphere_position().y }
    #[wasm_bindgen(getter)]
    pub fn sphere_z(&self) -> f32 { self.core.sphere_position().z }
    #[wasm_bindgen(getter)]
    pub fn sphere_color(&self) -> u32 { self.core.sphere_tint().color() }

    #[wasm_bindgen(getter)]
    pub fn ball_size(&self) -> f32 { self.core.config().ball_size }

    pub fn mesh_layout(&self) -> MeshLayout {
        let data = self.core.mesh_layout_data();
        MeshLayout {
            positions_ptr: data.positions_ptr as usize as u32,
            positions_len_elements: data.positions_len as u32,
            normals_ptr: data.normals_ptr as usize as u32,
            normals_len_elements: data.normals_len as u32,
            uvs_ptr: data.uvs_ptr as usize as u32,
            uvs_len_elements: data.uvs_len as u32,
            indices_ptr: data.indices_ptr as usize as u32,
            indices_len_elements: data.indices_len as u32,
        }
    }

    /// Copy of the vertex positions, for hosts without memory access.
    pub fn positions(&self) -> Vec<f32> {
        self.core.mesh().positions().to_vec()
    }

    pub fn normals(&self) -> Vec<f32> {
        self.core.mesh().normals().to_vec()
    }

    pub fn uvs(&self) -> Vec<f32> {
        self.core.mesh().uvs().to_vec()
    }

    pub fn indices(&self) -> Vec<u32> {
        self.core.mesh().indices().to_vec()
    }

    pub fn scene_settings_json(&self) -> String {
        self.core.scene().to_json()
    }

    /// RGBA8 strip for the toon material's gradient map.
    pub fn toon_gradient(&self) -> Vec<u8> {
        toon_gradient(self.core.scene().cloth.gradient_width as usize)
    }

    pub fn asset_loaded(&mut self, path: &str) {
        self.core.assets_mut().loaded(path);
    }

    /// Log a page-side load failure; the loop carries on.
    pub fn asset_failed(&mut self, path: &str, reason: &str) {
        self.core.assets_mut().failed(path, reason);
    }

    /// Enable or disable per-frame timing (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.stats()
    }
}

impl ClothDemo {
    pub fn core(&self) -> &DrapeCore<RapierWorld> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut DrapeCore<RapierWorld> {
        &mut self.core
    }
}
