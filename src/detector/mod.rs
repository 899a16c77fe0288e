// SPDX-License-Identifier: GPL-3.0-only

//! Detector-facing types
//!
//! The barcode detector is an external collaborator: it owns frame decoding,
//! scan rate and symbology recognition, and delivers one [`ScanResult`] per
//! detected code via callback. These types describe that boundary. The
//! controller trusts the detector's geometry; malformed coordinates are a
//! contract violation on the detector side, not a recoverable error here.

pub mod replay;

use serde::{Deserialize, Serialize};

/// A point in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    pub x: f32,
    pub y: f32,
}

/// A width/height pair in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanSize {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned bounding box of a detected code
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanBounds {
    /// Top-left corner
    pub origin: ScanPoint,
    pub size: ScanSize,
}

/// Measured size of the drawing surface
///
/// Reported by the layout collaborator once the surface is measured, and again
/// after rotation. Overlay drawing that depends on the surface must wait for
/// the first report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

/// A detected barcode
///
/// Produced by the detector on each detected code. Corner points arrive in
/// detector-defined order and bound the code as a polygon. Each event
/// overwrites the previous one; no history is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Decoded payload
    pub payload: String,
    /// Polygon vertices bounding the code, in detector order
    pub corner_points: Vec<ScanPoint>,
    /// Axis-aligned bounding box of the code
    pub bounding_box: ScanBounds,
}

/// Barcode symbologies the detector is asked to recognize
///
/// The allowlist is static configuration handed to the detector at startup;
/// the controller never filters by symbology itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Qr,
    Pdf417,
    Code128,
    Code39,
}

impl Symbology {
    /// All supported symbologies, in default allowlist order
    pub const ALL: [Symbology; 4] = [
        Symbology::Qr,
        Symbology::Pdf417,
        Symbology::Code128,
        Symbology::Code39,
    ];

    /// Get display name for the symbology
    pub fn display_name(&self) -> &'static str {
        match self {
            Symbology::Qr => "QR",
            Symbology::Pdf417 => "PDF417",
            Symbology::Code128 => "Code 128",
            Symbology::Code39 => "Code 39",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_result_json_round_trip() {
        let scan = ScanResult {
            payload: "ABC123".to_string(),
            corner_points: vec![
                ScanPoint { x: 10.4, y: 20.6 },
                ScanPoint { x: 50.0, y: 20.0 },
            ],
            bounding_box: ScanBounds {
                origin: ScanPoint { x: 10.0, y: 20.0 },
                size: ScanSize {
                    width: 40.0,
                    height: 40.0,
                },
            },
        };

        let json = serde_json::to_string(&scan).expect("serialize");
        let back: ScanResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, scan);
    }

    #[test]
    fn test_symbology_names() {
        for symbology in Symbology::ALL {
            assert!(!symbology.display_name().is_empty());
        }
    }

    #[test]
    fn test_symbology_serde_lowercase() {
        let json = serde_json::to_string(&Symbology::Pdf417).expect("serialize");
        assert_eq!(json, "\"pdf417\"");
    }
}
