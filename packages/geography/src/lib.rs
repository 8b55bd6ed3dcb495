#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reference geography for the dashboard map.
//!
//! The [`GeoIndex`] maps country and region codes to the bounding box the
//! map should frame when that area is shown. A [`RegionFeature`] is the
//! clicked region shape handed over by the map layer, reduced to its code,
//! name and enclosing box.

pub mod feature;
pub mod geo_index;

pub use feature::RegionFeature;
pub use geo_index::GeoIndex;

use thiserror::Error;

/// Errors that can occur while loading reference geography.
#[derive(Debug, Error)]
pub enum GeoError {
    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A geo table entry has an inverted or non-finite bounding box.
    #[error("Invalid bounding box for geo code {code}")]
    InvalidBoundingBox {
        /// The offending geo code.
        code: String,
    },
}
