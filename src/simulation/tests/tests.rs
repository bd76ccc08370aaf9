use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;

use super::*;
use crate::audio::{Overlay, Playback, StartSequence};
use crate::systems::ParticleWorld;

type EventLog = Rc<RefCell<Vec<&'static str>>>;

/// Gravity-free world: particles stay where they were put, except that a
/// step nudges every free particle down by `drop_per_step`.
struct StubWorld {
    positions: Vec<Vec3>,
    fixed: Vec<bool>,
    links: usize,
    elapsed: f32,
    sphere: Vec3,
    drop_per_step: f32,
    log: EventLog,
}

impl StubWorld {
    fn new(log: EventLog) -> Self {
        StubWorld {
            positions: Vec::new(),
            fixed: Vec::new(),
            links: 0,
            elapsed: 0.0,
            sphere: Vec3::ZERO,
            drop_per_step: 0.01,
            log,
        }
    }
}

impl ParticleWorld for StubWorld {
    type Handle = usize;

    fn add_particle(&mut self, position: Vec3, mass: f32) -> usize {
        self.positions.push(position);
        self.fixed.push(mass == 0.0);
        self.positions.len() - 1
    }

    fn add_distance_constraint(&mut self, _a: usize, _b: usize, _rest: f32) {
        self.links += 1;
    }

    fn position(&self, handle: usize) -> Vec3 {
        self.positions[handle]
    }

    fn is_fixed(&self, handle: usize) -> bool {
        self.fixed[handle]
    }
}

impl Stepper for StubWorld {
    fn step(&mut self, dt: f32) {
        self.log.borrow_mut().push("step");
        for (p, fixed) in self.positions.iter_mut().zip(&self.fixed) {
            if !fixed {
                p.y -= self.drop_per_step;
            }
        }
        self.elapsed += dt;
    }

    fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn set_sphere_position(&mut self, position: Vec3) {
        self.log.borrow_mut().push("sphere");
        self.sphere = position;
    }
}

struct RecordingRenderer {
    log: EventLog,
    frames: Vec<(bool, Vec3, Vec<f32>)>,
}

impl RecordingRenderer {
    fn new(log: EventLog) -> Self {
        RecordingRenderer { log, frames: Vec::new() }
    }
}

impl Renderer for RecordingRenderer {
    fn update_controls(&mut self) {
        self.log.borrow_mut().push("controls");
    }

    fn render(&mut self, view: &FrameView<'_>) {
        self.log.borrow_mut().push("render");
        self.frames
            .push((view.mesh_dirty, view.sphere_position, view.mesh.positions().to_vec()));
    }
}

fn stub_core() -> (DrapeCore<StubWorld>, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let core = DrapeCore::new(SimulationConfig::default(), StubWorld::new(log.clone())).unwrap();
    (core, log)
}

#[test]
fn default_grid_has_169_particles_and_312_constraints() {
    let (core, _) = stub_core();
    assert_eq!(core.grid().particle_count(), 169);
    assert_eq!(core.grid().constraint_count(), 312);
    assert_eq!(core.world().links, 312);
    assert_eq!(core.mesh().vertex_count(), 169);
}

#[test]
fn frame_runs_phases_in_order() {
    let (mut core, log) = stub_core();
    let mut renderer = RecordingRenderer::new(log.clone());
    core.frame(&mut renderer);
    assert_eq!(*log.borrow(), vec!["controls", "step", "sphere", "render"]);
}

#[test]
fn loop_goes_idle_to_running() {
    let (mut core, log) = stub_core();
    assert_eq!(core.state(), LoopState::Idle);
    core.frame(&mut RecordingRenderer::new(log));
    assert_eq!(core.state(), LoopState::Running);
    assert_eq!(core.frame_count(), 1);
}

#[test]
fn sphere_follows_elapsed_time() {
    let (mut core, log) = stub_core();
    let mut renderer = RecordingRenderer::new(log);
    for _ in 0..90 {
        core.frame(&mut renderer);
    }
    let t = core.elapsed();
    let expected = Vec3::new(0.2 * t.sin(), 0.0, 0.2 * t.cos());
    assert!(core.sphere_position().abs_diff_eq(expected, 1e-6));
    assert_eq!(core.world().sphere, core.sphere_position());
    assert_eq!(renderer.frames.last().unwrap().1, core.sphere_position());
    assert_eq!(core.sphere_tint(), crate::systems::SphereTint::Resting);
}

#[test]
fn mesh_tracks_particles_after_frame() {
    let (mut core, log) = stub_core();
    let mut renderer = RecordingRenderer::new(log);
    core.frame(&mut renderer);

    let ny = core.grid().ny();
    for (i, j, h) in core.grid().iter() {
        let slot = (i * (ny + 1) + j) * 3;
        let p = core.world().position(h);
        assert_eq!(&core.mesh().positions()[slot..slot + 3], &[p.x, p.y, p.z]);
    }
    assert!(renderer.frames[0].0, "first frame uploads the mesh");
}

#[test]
fn sync_is_idempotent_without_step() {
    let (mut core, log) = stub_core();
    core.frame(&mut RecordingRenderer::new(log));
    core.sync_mesh();
    let first = (core.mesh().positions().to_vec(), core.mesh().normals().to_vec());
    core.sync_mesh();
    let second = (core.mesh().positions().to_vec(), core.mesh().normals().to_vec());
    assert_eq!(first, second);
}

#[test]
fn pinned_row_holds_while_rest_moves() {
    let (mut core, log) = stub_core();
    let before: Vec<Vec3> = core.grid().iter().map(|(_, _, h)| core.world().position(h)).collect();
    let mut renderer = RecordingRenderer::new(log);
    for _ in 0..10 {
        core.frame(&mut renderer);
    }
    for ((_, j, h), start) in core.grid().iter().zip(before) {
        let now = core.world().position(h);
        if core.grid().is_pinned(j) {
            assert_eq!(now, start);
        } else {
            assert!(now.y < start.y);
        }
    }
}

#[test]
fn perf_stats_zero_until_enabled() {
    let (mut core, log) = stub_core();
    let mut renderer = RecordingRenderer::new(log);
    core.frame(&mut renderer);
    assert_eq!(core.stats().frame_ms(), 0.0);

    core.enable_perf_metrics(true);
    core.frame(&mut renderer);
    let stats = core.stats();
    assert!(stats.frame_ms() >= stats.step_ms());
    let frame: u32 = stats.frame();
    assert_eq!(frame, 1);
}

#[test]
fn bad_config_is_rejected_before_building() {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let config = SimulationConfig { nx: 0, ..SimulationConfig::default() };
    let result = DrapeCore::new(config, StubWorld::new(log));
    assert!(matches!(result, Err(DrapeError::InvalidGrid { nx: 0, ny: 12 })));
}

#[test]
fn teardown_returns_world() {
    let (mut core, log) = stub_core();
    core.frame(&mut RecordingRenderer::new(log));
    let world = core.teardown();
    assert_eq!(world.positions.len(), 169);
    assert!(world.elapsed > 0.0);
}

struct RejectingAudio;

impl Playback for RejectingAudio {
    fn set_looping(&mut self, _looping: bool) {}
    fn set_volume(&mut self, _volume: f64) {}
    fn play(&mut self) -> Result<(), DrapeError> {
        Err(DrapeError::Playback("play() requires a user gesture".to_string()))
    }
    fn pause(&mut self) {}
    fn rewind(&mut self) {}
}

struct NoOverlay;

impl Overlay for NoOverlay {
    fn hide(&mut self) {}
}

#[test]
fn rejected_audio_does_not_stall_the_loop() {
    let (mut core, log) = stub_core();
    let mut renderer = RecordingRenderer::new(log);
    core.frame(&mut renderer);

    let mut start = StartSequence::new(RejectingAudio, RejectingAudio);
    start.activate(&mut NoOverlay);

    core.frame(&mut renderer);
    core.frame(&mut renderer);
    assert_eq!(core.frame_count(), 3);
    assert_eq!(renderer.frames.len(), 3);
}

#[test]
fn asset_failure_is_recorded_and_loop_continues() {
    let (mut core, log) = stub_core();
    let sky = core.scene().assets.sky_model.clone();
    core.assets_mut().failed(&sky, "404 Not Found");
    core.frame(&mut RecordingRenderer::new(log));
    assert_eq!(
        core.assets().status(&sky),
        Some(&crate::scene::AssetStatus::Failed("404 Not Found".to_string()))
    );
    assert_eq!(core.frame_count(), 1);
}
