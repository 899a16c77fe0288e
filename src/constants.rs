// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Overlay drawing constants
///
/// Style parameters for the primitives emitted by the geometry pass. The
/// rendering surface consumes these as-is.
pub mod overlay {
    use crate::app::geometry::Color;

    /// Centerpoint marker radius
    pub const CENTER_MARKER_RADIUS: f32 = 2.0;

    /// Centerpoint marker stroke width
    pub const CENTER_MARKER_STROKE_WIDTH: f32 = 2.5;

    /// Centerpoint marker stroke color
    pub const CENTER_MARKER_STROKE: Color = Color::from_rgb8(0xe7, 0x4c, 0x3c);

    /// Centerpoint marker fill color
    pub const CENTER_MARKER_FILL: Color = Color::from_rgb8(0xf1, 0xc4, 0x0f);

    /// Corner marker radius
    pub const CORNER_MARKER_RADIUS: f32 = 2.0;

    /// Corner marker stroke width
    pub const CORNER_MARKER_STROKE_WIDTH: f32 = 0.1;

    /// Corner marker stroke color
    pub const CORNER_MARKER_STROKE: Color = Color::from_rgb8(0x80, 0x80, 0x80);

    /// Corner marker fill color
    pub const CORNER_MARKER_FILL: Color = Color::from_rgb8(0x00, 0x80, 0x00);

    /// Bounding polygon stroke width
    pub const POLYGON_STROKE_WIDTH: f32 = 2.0;

    /// Bounding polygon stroke color
    pub const POLYGON_STROKE: Color = Color::from_rgb8(0x58, 0x2e, 0x6e);

    /// Payload label text size
    pub const TEXT_SIZE: f32 = 14.0;

    /// Payload label color
    pub const TEXT_COLOR: Color = Color::from_rgb8(0xcf, 0x40, 0x48);

    /// Upward offset of the payload label from the bounding-box origin
    pub const TEXT_MARGIN: f32 = 8.0;
}

/// Timing constants
pub mod timing {
    use std::time::Duration;

    /// Pacing between replayed scan events in terminal mode
    pub const REPLAY_EVENT_INTERVAL: Duration = Duration::from_millis(800);

    /// Terminal keyboard poll interval
    pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
}
