//! Simulation configuration.
//!
//! Every field has a default so the page can send a partial JSON object
//! (or nothing at all). Validation runs once at startup; a bad value is an
//! unrecoverable startup failure.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::DrapeError;

/// Friction / restitution / stiffness policy between cloth and sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMaterialConfig {
    pub friction: f32,
    pub restitution: f32,
    /// Contact spring natural frequency (Hz). Higher is stiffer.
    pub natural_frequency: f32,
    /// Contact damping ratio; plays the role of constraint relaxation.
    pub damping_ratio: f32,
}

impl Default for ContactMaterialConfig {
    fn default() -> Self {
        Self {
            friction: 0.0,
            restitution: 0.0,
            natural_frequency: 60.0,
            damping_ratio: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed timestep in seconds.
    pub dt: f32,
    /// Orbit radius of the sphere.
    pub orbit_radius: f32,
    pub cloth_mass: f32,
    pub cloth_size: f32,
    pub nx: usize,
    pub ny: usize,
    /// Visual radius of the sphere.
    pub ball_size: f32,
    /// Collider radius is `ball_size * collider_scale`.
    pub collider_scale: f32,
    /// How far below the origin the cloth hangs, in units of `ny * rest_distance`.
    pub hang_factor: f32,
    /// Collision radius given to each cloth particle.
    pub particle_radius: f32,
    pub gravity: Vec3,
    pub solver_iterations: usize,
    pub contact: ContactMaterialConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            orbit_radius: 0.2,
            cloth_mass: 1.0,
            cloth_size: 1.0,
            nx: 12,
            ny: 12,
            ball_size: 0.1,
            collider_scale: 1.3,
            hang_factor: 0.9,
            particle_radius: 0.005,
            gravity: Vec3::new(0.0, -9.82, 0.0),
            solver_iterations: 20,
            contact: ContactMaterialConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, DrapeError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DrapeError> {
        if self.nx == 0 || self.ny == 0 {
            return Err(DrapeError::InvalidGrid { nx: self.nx, ny: self.ny });
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(invalid("dt must be positive"));
        }
        if !(self.cloth_size.is_finite() && self.cloth_size > 0.0) {
            return Err(invalid("cloth_size must be positive"));
        }
        if !(self.cloth_mass.is_finite() && self.cloth_mass > 0.0) {
            return Err(invalid("cloth_mass must be positive"));
        }
        if self.solver_iterations == 0 {
            return Err(invalid("solver_iterations must be at least 1"));
        }
        if !(self.ball_size > 0.0 && self.collider_scale > 0.0 && self.particle_radius > 0.0) {
            return Err(invalid("collider radii must be positive"));
        }
        Ok(())
    }

    /// Target separation between adjacent particles.
    pub fn rest_distance(&self) -> f32 {
        self.cloth_size / self.nx as f32
    }

    pub fn particle_mass(&self) -> f32 {
        self.cloth_mass / (self.nx * self.ny) as f32
    }

    pub fn sphere_collider_radius(&self) -> f32 {
        self.ball_size * self.collider_scale
    }
}

fn invalid(reason: &str) -> DrapeError {
    DrapeError::InvalidConfig { reason: reason.to_string() }
}
