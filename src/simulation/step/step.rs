use crate::systems::{SphereTint, Stepper};

use super::render_extract::{FrameView, Renderer};
use super::{DrapeCore, LoopState, PhaseClock};

pub(super) fn frame<S: Stepper, R: Renderer + ?Sized>(core: &mut DrapeCore<S>, renderer: &mut R) {
    if core.state == LoopState::Idle {
        log::info!("animation loop running");
        core.state = LoopState::Running;
    }

    let mut clock = core.perf_enabled.then(PhaseClock::start);

    renderer.update_controls();

    // === PHYSICS ===
    core.world.step(core.config.dt);
    if let Some(clock) = clock.as_mut() {
        core.stats.step_ms = clock.lap();
    }

    // === ORBIT ===
    let sphere = core.orbit.position_at(core.world.elapsed());
    core.world.set_sphere_position(sphere);
    core.sphere_position = sphere;
    core.sphere_tint = SphereTint::from_height(sphere.y);

    // === MESH SYNC ===
    core.mesh.sync(&core.grid, &core.world);
    if let Some(clock) = clock.as_mut() {
        core.stats.sync_ms = clock.lap();
    }

    // === RENDER ===
    let mesh_dirty = core.mesh.take_needs_upload();
    let view = FrameView {
        mesh: &core.mesh,
        sphere_position: core.sphere_position,
        sphere_tint: core.sphere_tint,
        mesh_dirty,
        frame: core.frame,
    };
    renderer.render(&view);

    if let Some(clock) = clock.as_mut() {
        core.stats.render_ms = clock.lap();
        core.stats.frame_ms = clock.total();
        core.stats.frame = core.frame;
    }
    core.frame = core.frame.wrapping_add(1);
}
