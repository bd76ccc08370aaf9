//! Scene and asset configuration for the page-side renderer.

pub mod assets;
pub mod gradient;
pub mod settings;
pub mod viewport;

pub use assets::{AssetStatus, AssetTracker};
pub use gradient::toon_gradient;
pub use settings::SceneSettings;
pub use viewport::Viewport;
