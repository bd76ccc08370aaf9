//! Core plumbing shared by every layer.

pub mod error;

pub use error::DrapeError;
