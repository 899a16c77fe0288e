// SPDX-License-Identifier: GPL-3.0-only

//! Overlay geometry derivation
//!
//! Pure functions turning the current overlay state into an ordered list of
//! drawable primitives for the rendering surface. Recomputed on every state
//! change; no hidden state survives between calls.
//!
//! # Coordinate System
//!
//! Positions are in surface pixel coordinates as reported by the detector and
//! the layout collaborator. Nothing is drawn until the surface has reported
//! its first layout.

use super::state::OverlayState;
use crate::constants::overlay;
use crate::detector::ScanPoint;
use serde::Serialize;

/// An RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from 8-bit channels
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

/// A drawable overlay primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// A marker circle
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        stroke: Color,
        stroke_width: f32,
        fill: Color,
    },
    /// A closed polygon described by a corner-points path string
    Polygon {
        points: String,
        stroke: Color,
        stroke_width: f32,
    },
    /// A text label
    Text {
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        content: String,
    },
}

/// The primitives for one render cycle, in draw order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverlayGeometry {
    pub primitives: Vec<Primitive>,
}

impl OverlayGeometry {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Integer-rounded, space-joined `"x,y"` encoding of a corner point sequence
///
/// Pure function of the points alone.
pub fn corner_points_path(points: &[ScanPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x.round() as i64, p.y.round() as i64))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the overlay primitives from the current state
///
/// Empty until the surface has reported a layout. After that: the centerpoint
/// marker is always present, the bounding polygon and payload label follow
/// their toggles, and the per-corner markers follow the scan alone.
pub fn compute_overlay_geometry(state: &OverlayState) -> OverlayGeometry {
    let Some(canvas) = state.canvas_size else {
        return OverlayGeometry::default();
    };

    let mut primitives = vec![Primitive::Circle {
        cx: canvas.width / 2.0,
        cy: canvas.height / 2.0,
        radius: overlay::CENTER_MARKER_RADIUS,
        stroke: overlay::CENTER_MARKER_STROKE,
        stroke_width: overlay::CENTER_MARKER_STROKE_WIDTH,
        fill: overlay::CENTER_MARKER_FILL,
    }];

    if let Some(scan) = &state.last_scan {
        if state.show_bounding_box {
            primitives.push(Primitive::Polygon {
                points: corner_points_path(&scan.corner_points),
                stroke: overlay::POLYGON_STROKE,
                stroke_width: overlay::POLYGON_STROKE_WIDTH,
            });
        }

        if state.show_payload_text {
            primitives.push(Primitive::Text {
                x: scan.bounding_box.origin.x,
                y: scan.bounding_box.origin.y - overlay::TEXT_MARGIN,
                size: overlay::TEXT_SIZE,
                color: overlay::TEXT_COLOR,
                content: scan.payload.clone(),
            });
        }

        for point in &scan.corner_points {
            primitives.push(Primitive::Circle {
                cx: point.x,
                cy: point.y,
                radius: overlay::CORNER_MARKER_RADIUS,
                stroke: overlay::CORNER_MARKER_STROKE,
                stroke_width: overlay::CORNER_MARKER_STROKE_WIDTH,
                fill: overlay::CORNER_MARKER_FILL,
            });
        }
    }

    OverlayGeometry { primitives }
}
