// SPDX-License-Identifier: GPL-3.0-only

//! Scan overlay controller
//!
//! Headless state and geometry handling for a barcode-scanning preview screen.
//! An external detector delivers [`ScanResult`] events, the drawing surface
//! reports its measured layout, and the controller derives the drawable
//! overlay primitives for each render cycle. Camera capture, barcode decoding
//! and the rendering technology itself are external collaborators.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: controller, state model, reducer and geometry derivation
//! - [`detector`]: detector-facing event types and the replay event source
//! - [`config`]: startup configuration handling
//! - [`terminal`]: interactive terminal preview of the overlay
//!
//! # Example
//!
//! ```
//! use scan_overlay::{Config, ScanOverlayController};
//! use scan_overlay::detector::CanvasSize;
//!
//! let mut controller = ScanOverlayController::new(&Config::default());
//! controller.on_surface_layout(CanvasSize {
//!     width: 400.0,
//!     height: 300.0,
//! });
//! let geometry = controller.compute_overlay_geometry();
//! assert!(!geometry.is_empty());
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod detector;
pub mod errors;
pub mod terminal;

// Re-export commonly used types
pub use app::ScanOverlayController;
pub use app::geometry::{Color, OverlayGeometry, Primitive};
pub use app::state::{Facing, Message, OverlayState, ToggleKind};
pub use config::Config;
pub use detector::{CanvasSize, ScanBounds, ScanPoint, ScanResult, ScanSize, Symbology};
