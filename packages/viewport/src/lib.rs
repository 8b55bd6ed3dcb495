#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map camera fitting for the dashboard.
//!
//! [`ViewportFitter::fit`] turns a geographic bounding box and a pixel-sized
//! container into camera parameters (center and fractional zoom) under the
//! Web Mercator projection. [`ViewportController`] keeps the last known
//! container size and bounding box and re-fits whenever either changes;
//! [`ResizeObserver`] coalesces bursts of resize signals so only the final
//! size is fitted.

pub mod controller;
pub mod fitter;
pub mod mercator;

pub use controller::{FitOutcome, ResizeObserver, ViewportController};
pub use fitter::ViewportFitter;

use serde::{Deserialize, Serialize};

/// Pixel size of the map container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ContainerSize {
    /// Creates a new container size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Camera parameters handed to the map renderer.
///
/// Only ever produced whole by the fitter (or defaulted); never patched
/// field by field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    /// Latitude of the camera center in degrees.
    pub center_latitude: f64,
    /// Longitude of the camera center in degrees.
    pub center_longitude: f64,
    /// Fractional zoom level.
    pub zoom: f64,
    /// Map rotation in degrees. Always north-up.
    pub bearing: f64,
    /// Camera tilt in degrees. Always top-down.
    pub pitch: f64,
}

impl ViewportState {
    /// Creates a north-up, top-down camera.
    #[must_use]
    pub const fn new(center_latitude: f64, center_longitude: f64, zoom: f64) -> Self {
        Self {
            center_latitude,
            center_longitude,
            zoom,
            bearing: 0.0,
            pitch: 0.0,
        }
    }
}

impl Default for ViewportState {
    /// Nation-wide view of metropolitan France.
    fn default() -> Self {
        Self::new(46.9, 1.7, 5.0)
    }
}
