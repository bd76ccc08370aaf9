//! Narrow seam over the external physics engine.
//!
//! The grid builder, orbit and mesh sync only talk to these traits, so they
//! can run against a stub world in tests and against rapier in the demo.

mod rapier_world;

use glam::Vec3;

pub use rapier_world::RapierWorld;

/// Registration and read-back of point masses and distance constraints.
pub trait ParticleWorld {
    type Handle: Copy;

    /// Add a point mass. A mass of zero makes the particle immovable.
    fn add_particle(&mut self, position: Vec3, mass: f32) -> Self::Handle;

    fn add_distance_constraint(&mut self, a: Self::Handle, b: Self::Handle, rest_distance: f32);

    fn position(&self, handle: Self::Handle) -> Vec3;

    fn is_fixed(&self, handle: Self::Handle) -> bool;
}

/// Fixed-timestep advancement plus the one body the loop drives directly.
pub trait Stepper: ParticleWorld {
    fn step(&mut self, dt: f32);

    /// Monotonic elapsed simulation time in seconds.
    fn elapsed(&self) -> f32;

    fn set_sphere_position(&mut self, position: Vec3);
}
