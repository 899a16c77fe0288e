// SPDX-License-Identifier: GPL-3.0-only

//! Startup configuration handling

use crate::app::state::Facing;
use crate::detector::Symbology;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Startup configuration
///
/// Seeds the controller's initial state and carries the symbology allowlist
/// handed to the external detector. Loaded from a JSON file; missing fields
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbologies the detector is asked to recognize
    pub symbologies: Vec<Symbology>,
    /// Initial camera facing direction
    pub facing: Facing,
    /// Alert on every scan event from the start
    pub alert_on_scan: bool,
    /// Draw the bounding polygon from the start
    pub show_bounding_box: bool,
    /// Draw the payload text from the start
    pub show_payload_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbologies: Symbology::ALL.to_vec(),
            facing: Facing::Back, // Rear camera on mount
            alert_on_scan: false,
            show_bounding_box: false,
            show_payload_text: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
