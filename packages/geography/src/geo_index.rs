//! Static lookup from geo codes to reference bounding boxes.
//!
//! The table is a JSON object keyed by code, each entry carrying a `bbox`
//! array: `{ "FRA": { "bbox": [-5.14, 41.33, 9.56, 51.09] } }`. Region
//! entries use the `REG-<insee code>` key.

use std::collections::BTreeMap;

use covid_dashboard_geography_models::{BoundingBox, FRANCE_BOUNDS};
use serde::Deserialize;

use crate::GeoError;

/// Geo code of the whole-country entry.
pub const COUNTRY_CODE: &str = "FRA";

/// Embedded reference table shipped with the dashboard.
const BUILTIN_GEO_JSON: &str = include_str!("../data/geo.json");

#[derive(Debug, Deserialize)]
struct GeoEntry {
    bbox: BoundingBox,
}

/// Read-only code → bounding box table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoIndex {
    entries: BTreeMap<String, BoundingBox>,
}

impl GeoIndex {
    /// Parses a geo table from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Json`] if the document is malformed, or
    /// [`GeoError::InvalidBoundingBox`] if an entry is inverted or contains
    /// non-finite coordinates. Zero-area entries are accepted; the viewport
    /// fitter widens them.
    pub fn from_json(json: &str) -> Result<Self, GeoError> {
        let raw: BTreeMap<String, GeoEntry> = serde_json::from_str(json)?;

        let mut entries = BTreeMap::new();
        for (code, entry) in raw {
            let bbox = entry.bbox;
            if !bbox.is_finite() || bbox.width() < 0.0 || bbox.height() < 0.0 {
                return Err(GeoError::InvalidBoundingBox { code });
            }
            entries.insert(code, bbox);
        }

        log::debug!("Loaded {} geo index entries", entries.len());

        Ok(Self { entries })
    }

    /// Returns the table embedded in the crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `geo.json` fails to parse. Since it is a
    /// compile-time constant, a failure indicates a development error and
    /// is caught by the test suite.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_GEO_JSON)
            .unwrap_or_else(|e| panic!("Failed to parse embedded geo table: {e}"))
    }

    /// Builds an index from explicit entries.
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, BoundingBox)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, bbox)| (code.into(), bbox))
                .collect(),
        }
    }

    /// Looks up the reference box for `code`.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<BoundingBox> {
        self.entries.get(code).copied()
    }

    /// Looks up the reference box for `code`, falling back to the
    /// whole-country box when the code is unknown.
    #[must_use]
    pub fn bounds_or_default(&self, code: &str) -> BoundingBox {
        self.lookup(code).unwrap_or_else(|| {
            log::debug!("No bounding box for geo code {code}, using country bounds");
            self.country_bounds()
        })
    }

    /// The whole-country box: the table's `FRA` entry if present, the
    /// built-in constant otherwise.
    #[must_use]
    pub fn country_bounds(&self) -> BoundingBox {
        self.lookup(COUNTRY_CODE).unwrap_or(FRANCE_BOUNDS)
    }

    /// Reference box of an INSEE region, by its bare region code.
    #[must_use]
    pub fn region_bounds(&self, region_code: &str) -> Option<BoundingBox> {
        self.lookup(&region_geo_code(region_code))
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Geo table key of an INSEE region (`"84"` → `"REG-84"`).
#[must_use]
pub fn region_geo_code(region_code: &str) -> String {
    format!("REG-{region_code}")
}
