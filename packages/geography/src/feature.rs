//! Region shapes picked on the map.
//!
//! The map layer reports the clicked region as a `GeoJSON` feature whose
//! properties carry the INSEE `code` and the display name `nom`. Only the
//! enclosing bounding box of the geometry is kept.

use covid_dashboard_geography_models::{BoundingBox, LonLat};
use geo::{BoundingRect, Geometry};
use serde::{Deserialize, Serialize};

/// A region picked on the map, reduced to what the drill-down needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionFeature {
    /// INSEE region code (e.g. `"84"`).
    pub code: String,
    /// Region display name as carried by the feature.
    pub name: String,
    /// Minimal enclosing box of the feature geometry.
    pub bounds: BoundingBox,
}

impl RegionFeature {
    /// Creates a feature from an already-known bounding box.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            bounds,
        }
    }

    /// Creates a feature from its geometry.
    ///
    /// Returns `None` for empty geometries, which have no bounding box.
    #[must_use]
    pub fn from_geometry(
        code: impl Into<String>,
        name: impl Into<String>,
        geometry: &Geometry<f64>,
    ) -> Option<Self> {
        let bounds = geometry_bounds(geometry)?;
        Some(Self::new(code, name, bounds))
    }

    /// Converts a picked `GeoJSON` feature.
    ///
    /// Returns `None` if the feature has no geometry, an empty geometry, or
    /// no `code` property. A missing `nom` falls back to the code.
    #[must_use]
    pub fn from_geojson(feature: &geojson::Feature) -> Option<Self> {
        let code = string_property(feature, "code")?;
        let name = string_property(feature, "nom").unwrap_or_else(|| code.clone());

        let geometry: Geometry<f64> = feature.geometry.clone()?.try_into().ok()?;

        Self::from_geometry(code, name, &geometry)
    }
}

/// Minimal enclosing box of a geometry.
#[must_use]
pub fn geometry_bounds(geometry: &Geometry<f64>) -> Option<BoundingBox> {
    geometry.bounding_rect().map(|rect| {
        BoundingBox::from_corners(
            LonLat::new(rect.min().x, rect.min().y),
            LonLat::new(rect.max().x, rect.max().y),
        )
    })
}

fn string_property(feature: &geojson::Feature, key: &str) -> Option<String> {
    feature
        .property(key)
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Point, polygon};

    fn bretagne_feature_json() -> &'static str {
        r#"{
            "type": "Feature",
            "properties": { "code": "53", "nom": "Bretagne" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [-5.1, 47.3], [-1.0, 47.3], [-1.0, 48.9], [-5.1, 48.9], [-5.1, 47.3]
                ]]
            }
        }"#
    }

    #[test]
    fn polygon_bounds() {
        let geometry: Geometry<f64> = polygon![
            (x: 1.0, y: 45.0),
            (x: 3.0, y: 44.0),
            (x: 2.0, y: 47.0),
        ]
        .into();

        let feature = RegionFeature::from_geometry("84", "ARA", &geometry).unwrap();
        assert_eq!(feature.bounds, BoundingBox::new(1.0, 44.0, 3.0, 47.0));
    }

    #[test]
    fn point_geometry_gives_degenerate_box() {
        let geometry: Geometry<f64> = Point::new(2.35, 48.85).into();
        let bounds = geometry_bounds(&geometry).unwrap();
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn from_geojson_feature() {
        let feature: geojson::Feature = bretagne_feature_json().parse().unwrap();
        let region = RegionFeature::from_geojson(&feature).unwrap();

        assert_eq!(region.code, "53");
        assert_eq!(region.name, "Bretagne");
        assert_eq!(region.bounds, BoundingBox::new(-5.1, 47.3, -1.0, 48.9));
    }

    #[test]
    fn from_geojson_requires_code() {
        let json = bretagne_feature_json().replace(r#""code": "53", "#, "");
        let feature: geojson::Feature = json.parse().unwrap();
        assert!(RegionFeature::from_geojson(&feature).is_none());
    }

    #[test]
    fn from_geojson_requires_geometry() {
        let feature: geojson::Feature = r#"{
            "type": "Feature",
            "properties": { "code": "53" },
            "geometry": null
        }"#
        .parse()
        .unwrap();
        assert!(RegionFeature::from_geojson(&feature).is_none());
    }
}
