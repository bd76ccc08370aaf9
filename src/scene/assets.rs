//! Load status of page-side assets.
//!
//! The page loads the sky model, texture and audio itself and reports back.
//! Failures are logged and remembered; the frame loop never waits on them.

use std::collections::HashMap;

use crate::core::DrapeError;

#[derive(Clone, Debug, PartialEq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Default)]
pub struct AssetTracker {
    status: HashMap<String, AssetStatus>,
}

impl AssetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, path: &str) {
        self.status.insert(path.to_string(), AssetStatus::Pending);
    }

    pub fn loaded(&mut self, path: &str) {
        log::info!("asset loaded: {}", path);
        self.status.insert(path.to_string(), AssetStatus::Loaded);
    }

    pub fn failed(&mut self, path: &str, reason: &str) {
        let err = DrapeError::Asset { path: path.to_string(), reason: reason.to_string() };
        log::error!("{}", err);
        self.status.insert(path.to_string(), AssetStatus::Failed(reason.to_string()));
    }

    pub fn status(&self, path: &str) -> Option<&AssetStatus> {
        self.status.get(path)
    }

    pub fn pending(&self) -> usize {
        self.status.values().filter(|s| **s == AssetStatus::Pending).count()
    }
}
