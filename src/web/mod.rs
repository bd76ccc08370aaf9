//! Browser runtime: frame scheduling, resize handling, start screen and
//! `<audio>` playback. Only built for wasm32.

pub mod audio;
pub mod runner;
pub mod start_screen;

pub use audio::HtmlAudio;
pub use runner::run_demo;
pub use start_screen::mount_start_screen;
