//! What the map draws and which parts of it respond to the pointer.

use covid_dashboard_geography_models::LonLat;
use covid_dashboard_masks_models::CommuneRecord;
use covid_dashboard_selection_models::SelectionLevel;
use serde::{Deserialize, Serialize};

/// A commune marker as the map renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerView {
    /// Commune name.
    pub name: String,
    /// Marker anchor. `None` only for the international pseudo-commune
    /// when the dataset gives it no centre.
    pub position: Option<LonLat>,
    /// Whether clicking the marker selects the commune.
    pub clickable: bool,
    /// Whether this is the international pseudo-commune.
    pub international: bool,
}

/// Markers to draw at `level`.
///
/// Every commune with a centroid is drawn, plus the international
/// pseudo-commune. Markers only become clickable once a region is
/// selected, and then only those the selection machine would accept.
#[must_use]
pub fn visible_markers(communes: &[CommuneRecord], level: &SelectionLevel) -> Vec<MarkerView> {
    let selected = level.region();

    communes
        .iter()
        .filter(|commune| commune.centroid.is_some() || commune.is_international())
        .map(|commune| {
            let international = commune.is_international();
            MarkerView {
                name: commune.name.clone(),
                position: commune.centroid,
                clickable: selected
                    .is_some_and(|region| international || commune.in_region(&region.code)),
                international,
            }
        })
        .collect()
}

/// Region codes that have at least one commune in the dataset, in
/// first-seen order. Only these regions are outlined and pickable.
#[must_use]
pub fn enabled_regions(communes: &[CommuneRecord]) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();

    for code in communes
        .iter()
        .filter_map(|commune| commune.region_code.as_deref())
        .filter(|code| !code.is_empty())
    {
        if !codes.iter().any(|c| c == code) {
            codes.push(code.to_string());
        }
    }

    codes
}

/// Region shapes only respond to clicks at the `National` level.
#[must_use]
pub const fn regions_interactive(level: &SelectionLevel) -> bool {
    level.is_national()
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_dashboard_geography_models::BoundingBox;
    use covid_dashboard_selection_models::RegionSelection;

    fn dataset() -> Vec<CommuneRecord> {
        vec![
            CommuneRecord::new("Lyon", Some("84"), Some("69"))
                .with_centroid(LonLat::new(4.83, 45.76))
                .with_company("Tissages", 40),
            CommuneRecord::new("Lille", Some("32"), Some("59"))
                .with_centroid(LonLat::new(3.06, 50.63)),
            CommuneRecord::new("Nulle Part", Some("84"), Some("01")),
            CommuneRecord::new("international", None, None).with_company("Abroad", 3),
            CommuneRecord::new("Roanne", Some("84"), Some("42"))
                .with_centroid(LonLat::new(4.07, 46.03)),
        ]
    }

    fn auvergne() -> SelectionLevel {
        SelectionLevel::RegionSelected {
            region: RegionSelection {
                code: "84".to_string(),
                name: "Auvergne-Rhône-Alpes".to_string(),
                bounds: BoundingBox::new(2.06, 44.11, 7.19, 46.8),
            },
        }
    }

    #[test]
    fn communes_without_centroid_are_hidden() {
        let markers = visible_markers(&dataset(), &SelectionLevel::National);
        let names: Vec<_> = markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Lyon", "Lille", "international", "Roanne"]);
        assert!(markers[2].international);
        assert_eq!(markers[2].position, None);
    }

    #[test]
    fn nothing_is_clickable_nation_wide() {
        let markers = visible_markers(&dataset(), &SelectionLevel::National);
        assert!(markers.iter().all(|m| !m.clickable));
    }

    #[test]
    fn region_communes_are_clickable_once_selected() {
        let markers = visible_markers(&dataset(), &auvergne());
        let clickable: Vec<_> = markers
            .iter()
            .filter(|m| m.clickable)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(clickable, vec!["Lyon", "international", "Roanne"]);
    }

    #[test]
    fn enabled_regions_are_unique_in_first_seen_order() {
        assert_eq!(enabled_regions(&dataset()), vec!["84", "32"]);
        assert!(enabled_regions(&[]).is_empty());
    }

    #[test]
    fn regions_only_pickable_nation_wide() {
        assert!(regions_interactive(&SelectionLevel::National));
        assert!(!regions_interactive(&auvergne()));
    }
}
