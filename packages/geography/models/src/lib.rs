#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic primitives shared by the dashboard cores.
//!
//! A [`BoundingBox`] is the only geometry the viewport fitter and the
//! selection state machine exchange. The [`insee`] module resolves
//! administrative codes (regions, departements) to display names.

pub mod insee;

use serde::{Deserialize, Serialize};

/// Whole-country fallback box (metropolitan France) used whenever a geo
/// code cannot be resolved.
pub const FRANCE_BOUNDS: BoundingBox = BoundingBox::new(-5.14, 41.33, 9.56, 51.09);

/// A longitude/latitude pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LonLat {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl LonLat {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// An axis-aligned geographic bounding box in WGS84 coordinates.
///
/// Serialized as the four-element array `[minLon, minLat, maxLon, maxLat]`
/// used by `GeoJSON` `bbox` members.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub min_lon: f64,
    /// Southern latitude boundary.
    pub min_lat: f64,
    /// Eastern longitude boundary.
    pub max_lon: f64,
    /// Northern latitude boundary.
    pub max_lat: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Builds the smallest box containing both corners, regardless of the
    /// order they are given in.
    #[must_use]
    pub fn from_corners(a: LonLat, b: LonLat) -> Self {
        Self::new(
            a.longitude.min(b.longitude),
            a.latitude.min(b.latitude),
            a.longitude.max(b.longitude),
            a.latitude.max(b.latitude),
        )
    }

    /// Longitudinal extent in degrees.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitudinal extent in degrees.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// The arithmetic center of the box (not the projected midpoint).
    #[must_use]
    pub fn centroid(&self) -> LonLat {
        LonLat::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// South-west corner.
    #[must_use]
    pub const fn south_west(&self) -> LonLat {
        LonLat::new(self.min_lon, self.min_lat)
    }

    /// North-east corner.
    #[must_use]
    pub const fn north_east(&self) -> LonLat {
        LonLat::new(self.max_lon, self.max_lat)
    }

    /// Returns `true` if every coordinate is finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.min_lon.is_finite()
            && self.min_lat.is_finite()
            && self.max_lon.is_finite()
            && self.max_lat.is_finite()
    }

    /// Returns `true` if the box has zero (or negative) extent on either
    /// axis, e.g. a single-point feature.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Grows each axis that is narrower than `min_extent` degrees to exactly
    /// `min_extent`, keeping the box centered on the same point.
    #[must_use]
    pub fn with_min_extent(&self, min_extent: f64) -> Self {
        let center = self.centroid();
        let half_width = self.width().max(min_extent) / 2.0;
        let half_height = self.height().max(min_extent) / 2.0;

        Self::new(
            center.longitude - half_width,
            center.latitude - half_height,
            center.longitude + half_width,
            center.latitude + half_height,
        )
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([min_lon, min_lat, max_lon, max_lat]: [f64; 4]) -> Self {
        Self::new(min_lon, min_lat, max_lon, max_lat)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.min_lon, bbox.min_lat, bbox.max_lon, bbox.max_lat]
    }
}
