//! The drill-down state machine.
//!
//! ```text
//! National ──select_region──▶ RegionSelected ──select_commune──▶ CommuneSelected
//!    ▲                            │    ▲                              │
//!    └──────────── reset ─────────┘    └──── select_region ──────────┘
//! ```
//!
//! `reset` is accepted from every level; there is no terminal state.

use covid_dashboard_geography::RegionFeature;
use covid_dashboard_geography_models::BoundingBox;
use covid_dashboard_masks_models::CommuneRecord;
use covid_dashboard_selection_models::{RegionSelection, SelectionLevel, Transition};

use crate::SelectionError;

/// Owns the drill-down level for a dashboard session.
#[derive(Debug, Clone)]
pub struct SelectionStateMachine {
    level: SelectionLevel,
    country_bounds: BoundingBox,
}

impl SelectionStateMachine {
    /// Creates a machine at the `National` level. `country_bounds` is the
    /// box emitted on every reset.
    #[must_use]
    pub const fn new(country_bounds: BoundingBox) -> Self {
        Self {
            level: SelectionLevel::National,
            country_bounds,
        }
    }

    /// Current level (read-only).
    #[must_use]
    pub const fn level(&self) -> &SelectionLevel {
        &self.level
    }

    /// Box the camera should currently frame.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.level
            .region()
            .map_or(self.country_bounds, |region| region.bounds)
    }

    /// Drills into the picked region.
    ///
    /// A click that missed every region arrives as `None` and resets to
    /// `National`. Picking a region while a commune is selected moves back
    /// up to `RegionSelected` for the new region.
    pub fn select_region(&mut self, feature: Option<&RegionFeature>) -> Transition {
        let Some(feature) = feature else {
            log::debug!("Region click missed every region, resetting");
            return self.reset();
        };

        let region = RegionSelection {
            code: feature.code.clone(),
            name: feature.name.clone(),
            bounds: feature.bounds,
        };
        let next = SelectionLevel::RegionSelected { region };

        log::debug!("Selecting region {} ({})", feature.code, feature.name);
        self.apply(next)
    }

    /// Selects a commune of the currently selected region.
    ///
    /// The international pseudo-commune is accepted whatever the selected
    /// region. The camera keeps framing the region.
    ///
    /// # Errors
    ///
    /// * [`SelectionError::NoRegionSelected`] at the `National` level
    /// * [`SelectionError::RegionMismatch`] if the commune belongs to
    ///   another region
    pub fn select_commune(
        &mut self,
        commune: &CommuneRecord,
    ) -> Result<Transition, SelectionError> {
        let Some(region) = self.level.region() else {
            log::warn!("Rejected commune {}: no region selected", commune.name);
            return Err(SelectionError::NoRegionSelected {
                commune: commune.name.clone(),
            });
        };

        if !commune.is_international() && !commune.in_region(&region.code) {
            log::warn!(
                "Rejected commune {}: not in selected region {}",
                commune.name,
                region.code
            );
            return Err(SelectionError::RegionMismatch {
                commune: commune.name.clone(),
                commune_region: commune.region_code.clone(),
                selected_region: region.code.clone(),
            });
        }

        let next = SelectionLevel::CommuneSelected {
            region: region.clone(),
            commune: commune.clone(),
        };

        log::debug!("Selecting commune {}", commune.name);
        Ok(self.apply(next))
    }

    /// Returns to the `National` level.
    pub fn reset(&mut self) -> Transition {
        self.apply(SelectionLevel::National)
    }

    fn apply(&mut self, next: SelectionLevel) -> Transition {
        let changed = self.level != next;
        self.level = next;

        Transition {
            level: self.level.clone(),
            bounds: self.bounds(),
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_dashboard_geography_models::FRANCE_BOUNDS;

    const R1_BOUNDS: BoundingBox = BoundingBox::new(2.0, 44.0, 7.0, 46.8);
    const R2_BOUNDS: BoundingBox = BoundingBox::new(-5.1, 47.3, -1.0, 48.9);

    fn r1() -> RegionFeature {
        RegionFeature::new("R1", "Region One", R1_BOUNDS)
    }

    fn r2() -> RegionFeature {
        RegionFeature::new("R2", "Region Two", R2_BOUNDS)
    }

    fn commune(name: &str, region: &str) -> CommuneRecord {
        CommuneRecord::new(name, Some(region), Some("D1")).with_company("Acme", 10)
    }

    fn international() -> CommuneRecord {
        CommuneRecord::new("international", None, None).with_company("Overseas", 5)
    }

    #[test]
    fn starts_national() {
        let machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        assert!(machine.level().is_national());
        assert_eq!(machine.bounds(), FRANCE_BOUNDS);
    }

    #[test]
    fn select_region_emits_feature_bounds() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        let transition = machine.select_region(Some(&r1()));

        assert!(transition.changed);
        assert_eq!(transition.bounds, R1_BOUNDS);
        assert_eq!(machine.level().region().map(|r| r.code.as_str()), Some("R1"));
    }

    #[test]
    fn select_region_from_region_retargets() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        machine.select_region(Some(&r1()));
        let transition = machine.select_region(Some(&r2()));

        assert_eq!(transition.bounds, R2_BOUNDS);
        assert_eq!(machine.level().region().map(|r| r.code.as_str()), Some("R2"));
    }

    #[test]
    fn missed_region_click_resets() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        machine.select_region(Some(&r1()));
        let transition = machine.select_region(None);

        assert_eq!(transition.level, SelectionLevel::National);
        assert_eq!(transition.bounds, FRANCE_BOUNDS);
    }

    #[test]
    fn select_commune_from_national_is_rejected() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        let result = machine.select_commune(&commune("C1", "R1"));

        assert_eq!(
            result,
            Err(SelectionError::NoRegionSelected {
                commune: "C1".to_string()
            })
        );
        assert!(machine.level().is_national());
    }

    #[test]
    fn select_commune_outside_region_is_rejected() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        machine.select_region(Some(&r1()));
        let before = machine.level().clone();

        let result = machine.select_commune(&commune("C3", "R2"));
        assert!(
            matches!(
                result,
                Err(SelectionError::RegionMismatch { ref selected_region, .. })
                    if selected_region == "R1"
            ),
            "got {result:?}"
        );
        assert_eq!(machine.level(), &before);
    }

    #[test]
    fn select_matching_commune() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        machine.select_region(Some(&r1()));
        let transition = machine.select_commune(&commune("C1", "R1")).unwrap();

        assert!(transition.changed);
        assert_eq!(transition.bounds, R1_BOUNDS);
        assert_eq!(machine.level().commune().map(|c| c.name.as_str()), Some("C1"));
        assert_eq!(machine.level().region().map(|r| r.code.as_str()), Some("R1"));
    }

    #[test]
    fn international_commune_is_reachable_from_any_region() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        machine.select_region(Some(&r2()));

        assert!(machine.select_commune(&international()).is_ok());
        assert_eq!(
            machine.level().commune().map(|c| c.name.as_str()),
            Some("international")
        );
    }

    #[test]
    fn international_commune_still_needs_a_region() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        assert!(machine.select_commune(&international()).is_err());
    }

    #[test]
    fn commune_to_commune_within_region() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        machine.select_region(Some(&r1()));
        machine.select_commune(&commune("C1", "R1")).unwrap();
        machine.select_commune(&commune("C2", "R1")).unwrap();

        assert_eq!(machine.level().commune().map(|c| c.name.as_str()), Some("C2"));
        assert!(machine.select_commune(&commune("C3", "R2")).is_err());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut machine = SelectionStateMachine::new(FRANCE_BOUNDS);
        machine.select_region(Some(&r1()));
        machine.select_commune(&commune("C1", "R1")).unwrap();

        let first = machine.reset();
        assert!(first.changed);
        assert_eq!(first.level, SelectionLevel::National);
        assert_eq!(first.bounds, FRANCE_BOUNDS);

        let second = machine.reset();
        assert!(!second.changed);
        assert_eq!(second.level, first.level);
        assert_eq!(second.bounds, first.bounds);
    }
}
