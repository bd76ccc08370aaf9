//! Application state and the frame loop.
//!
//! `DrapeCore` owns everything the loop touches: the physics world, the
//! particle grid, the render mesh, the orbit and the viewport. The wasm
//! facade wraps one `DrapeCore<RapierWorld>`; tests drive it with stubs.
//!
//! Frame order: controls → physics step → orbit → mesh sync → render.

use glam::Vec3;

use crate::core::DrapeError;
use crate::domain::SimulationConfig;
use crate::scene::{AssetTracker, SceneSettings, Viewport};
use crate::systems::{OrbitDriver, ParticleGrid, RapierWorld, RenderMesh, SphereTint, Stepper};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/js_renderer.rs"]
mod js_renderer;
mod facade;

pub use facade::{ClothDemo, MeshLayout};
pub use js_renderer::JsRenderer;
pub use perf_stats::FrameStats;
pub use render_extract::{FrameView, Renderer};

use perf_timer::PhaseClock;
use render_extract::MeshLayoutData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

pub struct DrapeCore<S: Stepper> {
    config: SimulationConfig,
    scene: SceneSettings,
    world: S,
    grid: ParticleGrid<S::Handle>,
    mesh: RenderMesh,
    orbit: OrbitDriver,
    viewport: Viewport,
    assets: AssetTracker,

    // State
    state: LoopState,
    sphere_position: Vec3,
    sphere_tint: SphereTint,
    frame: u32,

    // Perf metrics
    perf_enabled: bool,
    stats: FrameStats,
}

impl<S: Stepper> DrapeCore<S> {
    /// Validate `config`, build the cloth into `world`, and lay out the mesh.
    pub fn new(config: SimulationConfig, world: S) -> Result<Self, DrapeError> {
        init::create_core(config, SceneSettings::default(), world)
    }

    pub fn with_scene(config: SimulationConfig, scene: SceneSettings, world: S) -> Result<Self, DrapeError> {
        init::create_core(config, scene, world)
    }

    /// Run one frame and hand the result to `renderer`.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        step::frame(self, renderer);
    }

    /// Copy particle positions into the mesh without stepping.
    pub fn sync_mesh(&mut self) {
        self.mesh.sync(&self.grid, &self.world);
    }

    pub fn resize(&mut self, width: f32, height: f32) -> f32 {
        self.viewport.resize(width, height)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.stats.reset();
        }
    }

    pub fn stats(&self) -> FrameStats {
        self.stats.clone()
    }

    /// Drop the loop state and hand the world back.
    pub fn teardown(self) -> S {
        log::debug!("drape core torn down after {} frames", self.frame);
        self.world
    }

    pub fn config(&self) -> &SimulationConfig { &self.config }
    pub fn scene(&self) -> &SceneSettings { &self.scene }
    pub fn world(&self) -> &S { &self.world }
    pub fn grid(&self) -> &ParticleGrid<S::Handle> { &self.grid }
    pub fn mesh(&self) -> &RenderMesh { &self.mesh }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn assets(&self) -> &AssetTracker { &self.assets }
    pub fn assets_mut(&mut self) -> &mut AssetTracker { &mut self.assets }
    pub fn state(&self) -> LoopState { self.state }
    pub fn sphere_position(&self) -> Vec3 { self.sphere_position }
    pub fn sphere_tint(&self) -> SphereTint { self.sphere_tint }
    pub fn frame_count(&self) -> u32 { self.frame }
    pub fn elapsed(&self) -> f32 { self.world.elapsed() }

    pub(crate) fn mesh_layout_data(&self) -> MeshLayoutData {
        MeshLayoutData::of(&self.mesh)
    }
}

impl DrapeCore<RapierWorld> {
    pub fn with_rapier(config: SimulationConfig) -> Result<Self, DrapeError> {
        config.validate()?;
        let world = RapierWorld::new(&config);
        Ok(init::assemble(config, SceneSettings::default(), world))
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
