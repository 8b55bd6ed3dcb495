//! Transient hover annotations.
//!
//! Hovering never changes the selection level and has no effect on
//! aggregation; it only tells the renderer what to highlight.

use covid_dashboard_geography_models::LonLat;
use covid_dashboard_masks_models::CommuneRecord;
use covid_dashboard_selection_models::SelectionLevel;
use serde::{Deserialize, Serialize};

/// A commune marker under the pointer, with the data its popup shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoveredMarker {
    /// Popup anchor. `None` when the commune has no centroid.
    pub position: Option<LonLat>,
    /// The hovered commune.
    pub commune: CommuneRecord,
}

/// Current hover annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverState {
    region: Option<String>,
    marker: Option<HoveredMarker>,
}

impl HoverState {
    /// Code of the highlighted region, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Marker whose popup is open, if any.
    #[must_use]
    pub const fn marker(&self) -> Option<&HoveredMarker> {
        self.marker.as_ref()
    }

    /// Highlights a region, or clears the highlight with `None`.
    pub fn hover_region(&mut self, code: Option<&str>) {
        self.region = code.map(ToString::to_string);
    }

    /// Opens (or with `None`, closes) a marker popup.
    ///
    /// Popups only open once a region is selected, except for the
    /// international pseudo-commune which is hoverable at every level.
    /// Returns `true` if the annotation changed to the given commune.
    pub fn hover_marker(
        &mut self,
        level: &SelectionLevel,
        commune: Option<&CommuneRecord>,
    ) -> bool {
        let Some(commune) = commune else {
            self.marker = None;
            return false;
        };

        if level.region().is_none() && !commune.is_international() {
            return false;
        }

        self.marker = Some(HoveredMarker {
            position: commune.centroid,
            commune: commune.clone(),
        });
        true
    }

    /// Clears the region highlight.
    pub fn clear_region(&mut self) {
        self.region = None;
    }

    /// Closes the marker popup.
    pub fn clear_marker(&mut self) {
        self.marker = None;
    }

    /// Clears every annotation.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_dashboard_geography_models::BoundingBox;
    use covid_dashboard_selection_models::RegionSelection;

    fn region_level() -> SelectionLevel {
        SelectionLevel::RegionSelected {
            region: RegionSelection {
                code: "84".to_string(),
                name: "Auvergne-Rhône-Alpes".to_string(),
                bounds: BoundingBox::new(2.0, 44.0, 7.0, 46.8),
            },
        }
    }

    fn lyon() -> CommuneRecord {
        CommuneRecord::new("Lyon", Some("84"), Some("69")).with_centroid(LonLat::new(4.83, 45.76))
    }

    #[test]
    fn marker_hover_needs_a_region() {
        let mut hover = HoverState::default();
        assert!(!hover.hover_marker(&SelectionLevel::National, Some(&lyon())));
        assert!(hover.marker().is_none());

        assert!(hover.hover_marker(&region_level(), Some(&lyon())));
        let marker = hover.marker().unwrap();
        assert_eq!(marker.position, Some(LonLat::new(4.83, 45.76)));
        assert_eq!(marker.commune.name, "Lyon");
    }

    #[test]
    fn international_marker_hover_at_national_level() {
        let mut hover = HoverState::default();
        let international = CommuneRecord::new("international", None, None);
        assert!(hover.hover_marker(&SelectionLevel::National, Some(&international)));
        assert_eq!(hover.marker().and_then(|m| m.position), None);
    }

    #[test]
    fn leaving_a_marker_closes_the_popup() {
        let mut hover = HoverState::default();
        hover.hover_marker(&region_level(), Some(&lyon()));
        hover.hover_marker(&region_level(), None);
        assert!(hover.marker().is_none());
    }

    #[test]
    fn region_highlight() {
        let mut hover = HoverState::default();
        hover.hover_region(Some("84"));
        assert_eq!(hover.region(), Some("84"));
        hover.hover_region(None);
        assert_eq!(hover.region(), None);
    }

    #[test]
    fn clear_removes_everything() {
        let mut hover = HoverState::default();
        hover.hover_region(Some("84"));
        hover.hover_marker(&region_level(), Some(&lyon()));
        hover.clear();
        assert_eq!(hover, HoverState::default());
    }
}
