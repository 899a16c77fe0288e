// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! A single pure reducer applies every state transition. Deterministic, no
//! I/O: side effects (alert scheduling) happen in the controller before the
//! message is dispatched.

use super::state::{Message, OverlayState, ToggleKind};
use tracing::debug;

/// Apply one update message to the state
///
/// Each arm overwrites the fields its message names and nothing else. Scan
/// replacement is last-write-wins; there is no queue and no debouncing, so a
/// detector outrunning the render cycle simply leaves the most recent result.
pub fn reduce(state: &mut OverlayState, message: Message) {
    match message {
        Message::SetFacing(facing) => {
            debug!(facing = facing.display_name(), "Facing changed");
            state.facing = facing;
        }
        Message::SetCanvasSize(size) => {
            debug!(
                width = size.width,
                height = size.height,
                "Canvas size recorded"
            );
            state.canvas_size = Some(size);
        }
        Message::SetToggle(kind, value) => {
            debug!(?kind, value, "Overlay toggle changed");
            match kind {
                ToggleKind::Alert => state.alert_on_scan = value,
                ToggleKind::BoundingBox => state.show_bounding_box = value,
                ToggleKind::PayloadText => state.show_payload_text = value,
            }
        }
        Message::SetOrientationLock(locked) => {
            debug!(locked, "Orientation lock changed");
            state.orientation_locked = locked;
        }
        Message::SetScan(scan) => {
            debug!(
                payload = %scan.payload,
                corners = scan.corner_points.len(),
                "Scan result replaced"
            );
            state.last_scan = Some(scan);
        }
    }
}
