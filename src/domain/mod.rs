pub mod config;
pub mod surface;

pub use config::{ContactMaterialConfig, SimulationConfig};
pub use surface::{Plane, Surface};
