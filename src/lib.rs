//! Drape Engine - cloth draped next to an orbiting sphere, in WASM
//!
//! Physics is delegated to rapier, rasterization to the page's renderer.
//! This crate owns the orchestration in between.
//!
//! Architecture:
//! - core/       - Errors
//! - domain/     - Config and parametric surfaces
//! - systems/    - Grid builder, orbit, mesh sync, physics seam
//! - scene/      - Scene settings, assets, viewport
//! - audio/      - Background tracks and start sequence
//! - simulation/ - App state, frame loop, wasm facade
//! - web/        - Browser runtime (wasm32 only)

pub mod core;
pub mod domain;
pub mod systems;
pub mod scene;
pub mod audio;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic reporting and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"drape: logger already initialized".into());
    }

    log::info!("drape engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use crate::core::DrapeError;
pub use crate::domain::{Plane, SimulationConfig, Surface};
pub use simulation::{ClothDemo, DrapeCore, FrameView, LoopState, Renderer};
pub use systems::{OrbitDriver, ParticleGrid, ParticleWorld, RapierWorld, RenderMesh, SphereTint, Stepper};
