//! Error type for the drape engine.
//!
//! Startup failures (bad config, bad grid) propagate as `Result` and surface
//! to JS as a thrown `JsValue`. Asset and playback failures are only logged.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DrapeError {
    /// Grid must have at least one segment on each axis.
    InvalidGrid { nx: usize, ny: usize },
    /// A configuration value is out of range.
    InvalidConfig { reason: String },
    /// Configuration JSON could not be parsed.
    ConfigParse(String),
    /// Audio playback was rejected by the host.
    Playback(String),
    /// An asset failed to load.
    Asset { path: String, reason: String },
}

impl fmt::Display for DrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrapeError::InvalidGrid { nx, ny } => {
                write!(f, "grid needs at least 1x1 segments (got {}x{})", nx, ny)
            }
            DrapeError::InvalidConfig { reason } => write!(f, "invalid config: {}", reason),
            DrapeError::ConfigParse(msg) => write!(f, "config parse failed: {}", msg),
            DrapeError::Playback(msg) => write!(f, "Music playback failed: {}", msg),
            DrapeError::Asset { path, reason } => {
                write!(f, "asset '{}' failed to load: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for DrapeError {}

impl From<serde_json::Error> for DrapeError {
    fn from(err: serde_json::Error) -> Self {
        DrapeError::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_convert() {
        let err: DrapeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DrapeError::ConfigParse(_)));
    }

    #[test]
    fn grid_error_names_dimensions() {
        let msg = DrapeError::InvalidGrid { nx: 0, ny: 3 }.to_string();
        assert!(msg.contains("0x3"));
    }
}
