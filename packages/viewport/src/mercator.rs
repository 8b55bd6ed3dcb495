//! Web Mercator projection at zoom 0.
//!
//! World coordinates span `[0, TILE_SIZE]` on both axes at zoom 0 and
//! double with every zoom level. The y axis grows northwards.

use std::f64::consts::PI;

use covid_dashboard_geography_models::LonLat;

/// Pixel size of the whole world at zoom 0.
pub const TILE_SIZE: f64 = 512.0;

/// Latitude limit of the square Web Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_129;

/// A point in zoom-0 world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    /// Eastward coordinate.
    pub x: f64,
    /// Northward coordinate.
    pub y: f64,
}

/// Projects a coordinate into zoom-0 world pixels. Latitudes beyond
/// [`MAX_LATITUDE`] are clamped.
#[must_use]
pub fn project(point: LonLat) -> WorldPoint {
    let lambda = point.longitude.to_radians();
    let phi = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    WorldPoint {
        x: TILE_SIZE * (lambda + PI) / (2.0 * PI),
        y: TILE_SIZE * (PI + (PI / 4.0 + phi / 2.0).tan().ln()) / (2.0 * PI),
    }
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(point: WorldPoint) -> LonLat {
    let lambda = point.x / TILE_SIZE * 2.0 * PI - PI;
    let phi = 2.0 * (point.y / TILE_SIZE * 2.0 * PI - PI).exp().atan() - PI / 2.0;

    LonLat::new(lambda.to_degrees(), phi.to_degrees())
}

/// Scale factor between zoom-0 world pixels and screen pixels at `zoom`.
#[must_use]
pub fn zoom_scale(zoom: f64) -> f64 {
    zoom.exp2()
}
