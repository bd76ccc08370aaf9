use glam::Vec3;

use crate::core::DrapeError;
use crate::domain::SimulationConfig;
use crate::scene::{AssetTracker, SceneSettings, Viewport};
use crate::systems::{GridSpec, OrbitDriver, ParticleGrid, RenderMesh, SphereTint, Stepper};

use super::perf_stats::FrameStats;
use super::{DrapeCore, LoopState};

pub(super) fn create_core<S: Stepper>(
    config: SimulationConfig,
    scene: SceneSettings,
    world: S,
) -> Result<DrapeCore<S>, DrapeError> {
    config.validate()?;
    Ok(assemble(config, scene, world))
}

/// Build the core from a config that has already passed `validate`.
pub(super) fn assemble<S: Stepper>(
    config: SimulationConfig,
    scene: SceneSettings,
    mut world: S,
) -> DrapeCore<S> {
    let spec = GridSpec::from_config(&config);
    let plane = spec.plane();
    let grid = ParticleGrid::build(&mut world, &spec, &plane);
    let mesh = RenderMesh::from_surface(&plane, spec.nx, spec.ny);
    let orbit = OrbitDriver::new(config.orbit_radius);

    let mut assets = AssetTracker::new();
    assets.request(&scene.assets.sky_model);
    assets.request(&scene.assets.cloth_texture);

    log::info!(
        "drape core ready: {}x{} grid, {} particles, {} constraints",
        spec.nx,
        spec.ny,
        grid.particle_count(),
        grid.constraint_count()
    );

    DrapeCore {
        config,
        scene,
        world,
        grid,
        mesh,
        orbit,
        viewport: Viewport::default(),
        assets,
        state: LoopState::Idle,
        sphere_position: Vec3::ZERO,
        sphere_tint: SphereTint::Resting,
        frame: 0,
        perf_enabled: false,
        stats: FrameStats::default(),
    }
}
