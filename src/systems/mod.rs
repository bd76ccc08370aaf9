//! Cloth systems: grid construction, orbit, mesh sync, and the physics seam.

pub mod grid;
pub mod orbit;
pub mod physics;
pub mod render_mesh;

pub use grid::{GridSpec, ParticleGrid};
pub use orbit::{OrbitDriver, SphereTint};
pub use physics::{ParticleWorld, RapierWorld, Stepper};
pub use render_mesh::RenderMesh;
