//! Particle grid (cloth) builder.
//!
//! Lays out an (nx+1)×(ny+1) lattice of particles over a parametric surface,
//! pins the `j == ny` row and links every adjacent pair with a distance
//! constraint. Handles are stored `[i][j]`.

use crate::domain::{Plane, SimulationConfig, Surface};
use crate::systems::physics::ParticleWorld;

/// Dimensions and per-particle parameters of a cloth grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub nx: usize,
    pub ny: usize,
    pub rest_distance: f32,
    pub particle_mass: f32,
    pub hang_factor: f32,
}

impl GridSpec {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            nx: config.nx,
            ny: config.ny,
            rest_distance: config.rest_distance(),
            particle_mass: config.particle_mass(),
            hang_factor: config.hang_factor,
        }
    }

    /// Flat plane spanning `nx` × `ny` rest distances.
    pub fn plane(&self) -> Plane {
        Plane::new(
            self.rest_distance * self.nx as f32,
            self.rest_distance * self.ny as f32,
        )
    }

    pub fn particle_count(&self) -> usize {
        (self.nx + 1) * (self.ny + 1)
    }

    pub fn constraint_count(&self) -> usize {
        self.nx * (self.ny + 1) + self.ny * (self.nx + 1)
    }
}

pub struct ParticleGrid<H> {
    handles: Vec<Vec<H>>,
    spec: GridSpec,
    constraints: usize,
}

impl<H: Copy> ParticleGrid<H> {
    pub fn build<W, S>(world: &mut W, spec: &GridSpec, surface: &S) -> Self
    where
        W: ParticleWorld<Handle = H>,
        S: Surface + ?Sized,
    {
        let GridSpec { nx, ny, rest_distance, particle_mass, hang_factor } = *spec;
        let drop = ny as f32 * hang_factor * rest_distance;

        let mut handles = Vec::with_capacity(nx + 1);
        for i in 0..=nx {
            let mut column = Vec::with_capacity(ny + 1);
            for j in 0..=ny {
                let mut p = surface.point(i as f32 / (nx + 1) as f32, j as f32 / (ny + 1) as f32);
                p.y -= drop;
                let mass = if j == ny { 0.0 } else { particle_mass };
                column.push(world.add_particle(p, mass));
            }
            handles.push(column);
        }

        let mut constraints = 0;
        for i in 0..=nx {
            for j in 0..=ny {
                if i < nx {
                    world.add_distance_constraint(handles[i][j], handles[i + 1][j], rest_distance);
                    constraints += 1;
                }
                if j < ny {
                    world.add_distance_constraint(handles[i][j], handles[i][j + 1], rest_distance);
                    constraints += 1;
                }
            }
        }

        log::debug!(
            "cloth grid built: {} particles, {} constraints",
            spec.particle_count(),
            constraints
        );

        ParticleGrid { handles, spec: *spec, constraints }
    }

    pub fn get(&self, i: usize, j: usize) -> H {
        self.handles[i][j]
    }

    /// Whether row `j` is the pinned row.
    pub fn is_pinned(&self, j: usize) -> bool {
        j == self.spec.ny
    }

    /// `(i, j, handle)` in vertex-buffer order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, H)> + '_ {
        self.handles
            .iter()
            .enumerate()
            .flat_map(|(i, column)| column.iter().enumerate().map(move |(j, h)| (i, j, *h)))
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn nx(&self) -> usize { self.spec.nx }
    pub fn ny(&self) -> usize { self.spec.ny }
    pub fn particle_count(&self) -> usize { self.handles.iter().map(Vec::len).sum() }
    pub fn constraint_count(&self) -> usize { self.constraints }
}
