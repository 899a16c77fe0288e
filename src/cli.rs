// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for replaying scan event streams
//!
//! Headless harness: feeds a recorded detector stream through the controller
//! and prints the overlay geometry derived after each event as JSON lines.
//! Scheduled alerts are drained at each cycle boundary and printed the same
//! way.

use scan_overlay::ScanOverlayController;
use scan_overlay::config::Config;
use scan_overlay::detector::{CanvasSize, replay};
use scan_overlay::errors::AppResult;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for the replay command
pub struct ReplayOptions {
    /// JSON-lines scan event file
    pub input: PathBuf,
    /// Optional configuration file
    pub config: Option<PathBuf>,
    /// Reported surface width in pixels
    pub width: f32,
    /// Reported surface height in pixels
    pub height: f32,
    /// Enable the bounding polygon for the whole run
    pub bounding_box: bool,
    /// Enable the payload text label for the whole run
    pub text: bool,
    /// Alert on every scan event
    pub alert: bool,
}

/// Replay a scan event stream and print the derived geometry
pub fn replay_events(options: ReplayOptions) -> AppResult<()> {
    let mut config = Config::load_or_default(options.config.as_deref())?;
    if options.bounding_box {
        config.show_bounding_box = true;
    }
    if options.text {
        config.show_payload_text = true;
    }
    if options.alert {
        config.alert_on_scan = true;
    }

    // The allowlist is applied by the external detector; recorded streams
    // already reflect it.
    debug!(symbologies = ?config.symbologies, "Detector allowlist");

    let events = replay::load_events(&options.input)?;

    let (alert_tx, mut alert_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut controller = ScanOverlayController::new(&config).with_alert_sender(alert_tx);

    // The surface reports its layout before the first scan arrives.
    controller.on_surface_layout(CanvasSize {
        width: options.width,
        height: options.height,
    });
    println!(
        "{}",
        serde_json::to_string(&controller.compute_overlay_geometry())?
    );

    let count = events.len();
    for event in events {
        controller.on_scan_event(event);

        // Alerts are deferred to the cycle boundary; drain before rendering.
        while let Ok(alert) = alert_rx.try_recv() {
            println!("{}", serde_json::to_string(&serde_json::json!({ "alert": alert }))?);
        }

        println!(
            "{}",
            serde_json::to_string(&controller.compute_overlay_geometry())?
        );
    }

    info!(count, "Replay finished");
    Ok(())
}
