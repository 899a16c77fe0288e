// SPDX-License-Identifier: GPL-3.0-only

//! Scan overlay controller
//!
//! Owns the overlay state for one mounted preview screen and turns
//! collaborator events into reducer messages:
//!
//! - the detector's scan callback replaces the last result (last-write-wins)
//! - the layout callback records the measured surface size
//! - the user toggles flip their flags
//!
//! Everything runs on the render thread; there is no concurrent writer and no
//! locking. The only side effect is the scan alert, which goes out over an
//! unbounded channel so the scan callback never blocks on it.

pub mod geometry;
pub mod state;
pub mod update;

use crate::config::Config;
use crate::detector::{CanvasSize, ScanResult};
use geometry::OverlayGeometry;
use state::{Message, OverlayState, ToggleKind};
use tokio::sync::mpsc::UnboundedSender;

/// Controller for the scan preview overlay
pub struct ScanOverlayController {
    state: OverlayState,
    /// Deferred alert channel; send failures are swallowed
    alert_sender: Option<UnboundedSender<ScanResult>>,
}

impl ScanOverlayController {
    /// Create a controller with the configured initial toggles
    pub fn new(config: &Config) -> Self {
        Self {
            state: OverlayState::from_config(config),
            alert_sender: None,
        }
    }

    /// Route scan alerts into `sender`
    ///
    /// The consumer drains the channel at its next render cycle, which gives
    /// the alert its deferred, non-blocking delivery. Without a sender alerts
    /// are dropped.
    pub fn with_alert_sender(mut self, sender: UnboundedSender<ScanResult>) -> Self {
        self.alert_sender = Some(sender);
        self
    }

    /// Current state, for the render side
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Apply one update message through the reducer
    pub fn dispatch(&mut self, message: Message) {
        update::reduce(&mut self.state, message);
    }

    /// Detector callback
    ///
    /// Schedules one alert carrying the exact event if alerting is enabled,
    /// then unconditionally replaces the last scan. Every event is processed;
    /// if the detector outruns the render cycle only the most recent result
    /// is kept.
    pub fn on_scan_event(&mut self, event: ScanResult) {
        if self.state.alert_on_scan
            && let Some(sender) = &self.alert_sender
        {
            // Fire and forget; a gone receiver is not observable here.
            let _ = sender.send(event.clone());
        }
        self.dispatch(Message::SetScan(event));
    }

    /// Layout callback: record the measured surface size
    ///
    /// Idempotent; rotation reports again and the newest measurement wins.
    pub fn on_surface_layout(&mut self, size: CanvasSize) {
        self.dispatch(Message::SetCanvasSize(size));
    }

    /// Flip the camera facing direction
    pub fn toggle_facing(&mut self) {
        self.dispatch(Message::SetFacing(self.state.facing.toggled()));
    }

    /// Flip alert-on-scan
    pub fn toggle_alert(&mut self) {
        self.toggle(ToggleKind::Alert);
    }

    /// Flip the bounding polygon
    pub fn toggle_bounding_box(&mut self) {
        self.toggle(ToggleKind::BoundingBox);
    }

    /// Flip the payload text label
    pub fn toggle_text(&mut self) {
        self.toggle(ToggleKind::PayloadText);
    }

    /// Flip the orientation lock flag
    ///
    /// Only the flag lives here; the window collaborator applies the actual
    /// lock when it sees the new value.
    pub fn toggle_orientation_lock(&mut self) {
        self.dispatch(Message::SetOrientationLock(!self.state.orientation_locked));
    }

    fn toggle(&mut self, kind: ToggleKind) {
        let value = !self.state.toggle(kind);
        self.dispatch(Message::SetToggle(kind, value));
    }

    /// Derive the primitives for the current render cycle
    pub fn compute_overlay_geometry(&self) -> OverlayGeometry {
        geometry::compute_overlay_geometry(&self.state)
    }
}
