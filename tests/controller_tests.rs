// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the scan overlay controller

use scan_overlay::detector::{CanvasSize, ScanBounds, ScanPoint, ScanResult, ScanSize};
use scan_overlay::{Config, Primitive, ScanOverlayController};

fn sample_scan(payload: &str) -> ScanResult {
    ScanResult {
        payload: payload.to_string(),
        corner_points: vec![
            ScanPoint { x: 10.4, y: 20.6 },
            ScanPoint { x: 50.0, y: 20.0 },
            ScanPoint { x: 50.0, y: 60.0 },
            ScanPoint { x: 10.0, y: 60.0 },
        ],
        bounding_box: ScanBounds {
            origin: ScanPoint { x: 10.0, y: 20.0 },
            size: ScanSize {
                width: 40.0,
                height: 40.0,
            },
        },
    }
}

fn layout(controller: &mut ScanOverlayController) {
    controller.on_surface_layout(CanvasSize {
        width: 400.0,
        height: 300.0,
    });
}

#[test]
fn test_scan_sequence_keeps_final_event() {
    let mut controller = ScanOverlayController::new(&Config::default());
    for payload in ["one", "two", "three"] {
        controller.on_scan_event(sample_scan(payload));
    }

    let last = controller.state().last_scan.as_ref().expect("scan");
    assert_eq!(last.payload, "three", "last write should win");
}

#[test]
fn test_no_primitives_before_layout() {
    let mut controller = ScanOverlayController::new(&Config::default());
    controller.on_scan_event(sample_scan("ABC123"));
    controller.toggle_bounding_box();
    controller.toggle_text();

    assert!(
        controller.compute_overlay_geometry().is_empty(),
        "nothing should render before the surface reports a layout"
    );
}

#[test]
fn test_bounding_box_polygon_path() {
    let mut controller = ScanOverlayController::new(&Config::default());
    layout(&mut controller);
    controller.on_scan_event(sample_scan("ABC123"));
    controller.toggle_bounding_box();

    let geometry = controller.compute_overlay_geometry();
    let polygon = geometry
        .primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Polygon { points, .. } => Some(points.as_str()),
            _ => None,
        })
        .expect("polygon primitive");
    assert_eq!(polygon, "10,21 50,20 50,60 10,60");
}

#[test]
fn test_corner_points_path_tracks_last_scan() {
    let mut controller = ScanOverlayController::new(&Config::default());
    controller.on_scan_event(sample_scan("first"));

    let mut replacement = sample_scan("second");
    replacement.corner_points = vec![ScanPoint { x: 1.4, y: 1.6 }];
    controller.on_scan_event(replacement);

    assert_eq!(
        controller.state().corner_points_path().expect("path"),
        "1,2"
    );
}

#[test]
fn test_alert_scheduled_once_per_scan_while_enabled() {
    let (alert_tx, mut alert_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut controller =
        ScanOverlayController::new(&Config::default()).with_alert_sender(alert_tx);

    controller.toggle_alert();
    let event = sample_scan("ABC123");
    controller.on_scan_event(event.clone());

    let alert = alert_rx.try_recv().expect("one scheduled alert");
    assert_eq!(alert, event, "alert must carry the exact event");
    assert!(alert_rx.try_recv().is_err(), "exactly one alert per scan");

    // Disabled again: no further notifications
    controller.toggle_alert();
    controller.on_scan_event(sample_scan("DEF456"));
    assert!(alert_rx.try_recv().is_err());
}

#[test]
fn test_alert_send_failure_is_not_observable() {
    let (alert_tx, alert_rx) = tokio::sync::mpsc::unbounded_channel::<ScanResult>();
    drop(alert_rx);

    let mut controller =
        ScanOverlayController::new(&Config::default()).with_alert_sender(alert_tx);
    controller.toggle_alert();
    controller.on_scan_event(sample_scan("ABC123"));

    // The scan itself still lands
    assert_eq!(
        controller.state().last_scan.as_ref().expect("scan").payload,
        "ABC123"
    );
}

#[test]
fn test_geometry_after_rotation_uses_new_canvas() {
    let mut controller = ScanOverlayController::new(&Config::default());
    layout(&mut controller);
    controller.on_surface_layout(CanvasSize {
        width: 300.0,
        height: 400.0,
    });

    let geometry = controller.compute_overlay_geometry();
    match &geometry.primitives[0] {
        Primitive::Circle { cx, cy, .. } => {
            assert_eq!(*cx, 150.0);
            assert_eq!(*cy, 200.0);
        }
        other => panic!("expected center marker, got {:?}", other),
    }
}

#[test]
fn test_corner_markers_present_without_toggles() {
    let mut controller = ScanOverlayController::new(&Config::default());
    layout(&mut controller);
    controller.on_scan_event(sample_scan("ABC123"));

    let geometry = controller.compute_overlay_geometry();
    let circles = geometry
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Circle { .. }))
        .count();
    assert_eq!(circles, 5, "center marker plus four corner markers");
}
