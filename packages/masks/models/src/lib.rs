#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Mask production dataset types.
//!
//! A [`CommuneRecord`] is the leaf of the drill-down hierarchy: one commune
//! and the companies producing masks there. [`ProductionGroup`] is the
//! derived, never-persisted aggregate the statistics panel displays.
//!
//! Records deserialize from the published dataset layout (`nom`,
//! `codeRegion`, `codeDepartement`, a `GeoJSON` point `centre`, and
//! `companies` entries of `{ company, masks }`).

use covid_dashboard_geography_models::LonLat;
use serde::{Deserialize, Serialize};

/// Name of the pseudo-commune grouping production outside French
/// territory. It has no region and is reachable from every region.
pub const INTERNATIONAL_COMMUNE: &str = "international";

/// Display label used when a region or departement name cannot be
/// resolved.
pub const INTERNATIONAL_LABEL: &str = "International";

/// Masks produced by a single company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyProduction {
    /// Company name. Not unique across communes.
    #[serde(rename = "company")]
    pub company_name: String,
    /// Estimated number of masks produced.
    #[serde(rename = "masks")]
    pub mask_count: u64,
}

impl CompanyProduction {
    /// Creates a new production entry.
    #[must_use]
    pub fn new(company_name: impl Into<String>, mask_count: u64) -> Self {
        Self {
            company_name: company_name.into(),
            mask_count,
        }
    }
}

/// A commune with its producing companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuneRecord {
    /// Commune name, unique within the dataset.
    #[serde(rename = "nom")]
    pub name: String,
    /// INSEE region code. Absent for the international pseudo-commune.
    #[serde(rename = "codeRegion", default)]
    pub region_code: Option<String>,
    /// INSEE departement code. Absent for the international pseudo-commune.
    #[serde(rename = "codeDepartement", default)]
    pub departement_code: Option<String>,
    /// Commune center, used to place its map marker.
    #[serde(rename = "centre", default, with = "point_geometry")]
    pub centroid: Option<LonLat>,
    /// Producing companies. May be empty.
    #[serde(default)]
    pub companies: Vec<CompanyProduction>,
}

impl CommuneRecord {
    /// Creates a commune without a centroid or companies.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region_code: Option<&str>,
        departement_code: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            region_code: region_code.map(ToString::to_string),
            departement_code: departement_code.map(ToString::to_string),
            centroid: None,
            companies: Vec::new(),
        }
    }

    /// Sets the commune centroid.
    #[must_use]
    pub fn with_centroid(mut self, centroid: LonLat) -> Self {
        self.centroid = Some(centroid);
        self
    }

    /// Appends a producing company.
    #[must_use]
    pub fn with_company(mut self, company_name: impl Into<String>, mask_count: u64) -> Self {
        self.companies.push(CompanyProduction::new(company_name, mask_count));
        self
    }

    /// Returns `true` for the international pseudo-commune.
    #[must_use]
    pub fn is_international(&self) -> bool {
        self.name == INTERNATIONAL_COMMUNE
    }

    /// Returns `true` if the commune lies in region `code`.
    #[must_use]
    pub fn in_region(&self, code: &str) -> bool {
        self.region_code.as_deref() == Some(code)
    }

    /// Total masks produced in this commune.
    #[must_use]
    pub fn total_masks(&self) -> u64 {
        self.companies.iter().map(|c| c.mask_count).sum()
    }
}

/// Production aggregated over one grouping key (region, departement or a
/// single commune).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionGroup {
    /// Grouping key: region code, departement code, or commune name.
    /// `None` when the member communes carry no code.
    pub code: Option<String>,
    /// Resolved display name.
    pub display_name: String,
    /// Concatenated company entries of every member commune, in dataset
    /// order. Duplicated company names are kept as separate entries.
    pub companies: Vec<CompanyProduction>,
}

impl ProductionGroup {
    /// Total masks produced by the group.
    #[must_use]
    pub fn total_masks(&self) -> u64 {
        self.companies.iter().map(|c| c.mask_count).sum()
    }
}

/// Nationwide production counters, always computed over the full dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalSummary {
    /// Total estimated masks.
    pub total_masks: u64,
    /// Number of producing company entries.
    pub producing_companies: usize,
}

/// (De)serializes an optional [`LonLat`] as a `GeoJSON` point geometry
/// (`{ "type": "Point", "coordinates": [lon, lat] }`).
mod point_geometry {
    use covid_dashboard_geography_models::LonLat;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Point {
        #[serde(rename = "type", default = "point_type")]
        kind: String,
        coordinates: [f64; 2],
    }

    fn point_type() -> String {
        "Point".to_string()
    }

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<LonLat>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value
            .map(|p| Point {
                kind: point_type(),
                coordinates: [p.longitude, p.latitude],
            })
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<LonLat>, D::Error> {
        let point = Option::<Point>::deserialize(deserializer)?;
        Ok(point.map(|p| LonLat::new(p.coordinates[0], p.coordinates[1])))
    }
}
