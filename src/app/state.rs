// SPDX-License-Identifier: GPL-3.0-only

//! Overlay state model and update messages

use crate::config::Config;
use crate::detector::{CanvasSize, ScanResult};
use serde::{Deserialize, Serialize};

/// Camera facing direction
///
/// The controller only stores the value; the camera collaborator reads it on
/// the next render and switches the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Front (selfie) camera
    Front,
    /// Rear camera
    #[default]
    Back,
}

impl Facing {
    /// The opposite direction; applied twice this returns the original value
    pub fn toggled(self) -> Self {
        match self {
            Facing::Front => Facing::Back,
            Facing::Back => Facing::Front,
        }
    }

    /// Get display name for the direction
    pub fn display_name(&self) -> &'static str {
        match self {
            Facing::Front => "Front",
            Facing::Back => "Back",
        }
    }
}

/// The boolean overlay toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    /// Alert on every scan event
    Alert,
    /// Draw the bounding polygon around the last scan
    BoundingBox,
    /// Draw the scanned payload text
    PayloadText,
}

/// Transient overlay state for one mounted preview screen
///
/// Exactly one instance exists per active screen and all writes happen on the
/// render thread, through [`Message`] values applied by the reducer. The state
/// lives as long as the screen is mounted; teardown is owned by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayState {
    /// Camera facing direction
    pub facing: Facing,
    /// Alert on every scan event
    pub alert_on_scan: bool,
    /// Draw the bounding polygon
    pub show_bounding_box: bool,
    /// Draw the payload text
    pub show_payload_text: bool,
    /// Orientation lock requested by the user; the window collaborator applies it
    pub orientation_locked: bool,
    /// Measured surface size; None until the surface reports its first layout
    pub canvas_size: Option<CanvasSize>,
    /// Most recent scan; overwritten on every detector event, no history
    pub last_scan: Option<ScanResult>,
}

impl OverlayState {
    /// Build the initial state from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            facing: config.facing,
            alert_on_scan: config.alert_on_scan,
            show_bounding_box: config.show_bounding_box,
            show_payload_text: config.show_payload_text,
            ..Self::default()
        }
    }

    /// Current value of the given toggle
    pub fn toggle(&self, kind: ToggleKind) -> bool {
        match kind {
            ToggleKind::Alert => self.alert_on_scan,
            ToggleKind::BoundingBox => self.show_bounding_box,
            ToggleKind::PayloadText => self.show_payload_text,
        }
    }

    /// Integer-rounded `"x,y x,y ..."` encoding of the last scan's corner
    /// points
    ///
    /// Derived from `last_scan` alone; None while no scan has arrived.
    pub fn corner_points_path(&self) -> Option<String> {
        self.last_scan
            .as_ref()
            .map(|scan| super::geometry::corner_points_path(&scan.corner_points))
    }
}

/// State update operations
///
/// Each variant overwrites exactly the fields it names and nothing else. This
/// is the typed replacement for an untyped partial-state merge: the same
/// "any field can be updated" ergonomics, but every transition has a checkable
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Set the camera facing direction
    SetFacing(Facing),
    /// Record the measured surface size (rotation re-reports; always overwrites)
    SetCanvasSize(CanvasSize),
    /// Set one of the boolean overlay toggles
    SetToggle(ToggleKind, bool),
    /// Set the orientation lock flag
    SetOrientationLock(bool),
    /// Replace the last scan result (last-write-wins)
    SetScan(ScanResult),
}
