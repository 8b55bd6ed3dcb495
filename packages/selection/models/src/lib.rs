#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Drill-down selection types.
//!
//! [`SelectionLevel`] is a tagged variant rather than a pair of nullable
//! "selected region" / "selected commune" fields, so a commune can never be
//! selected without the region it belongs to.

use covid_dashboard_geography_models::BoundingBox;
use covid_dashboard_masks_models::CommuneRecord;
use serde::{Deserialize, Serialize};

/// The region currently drilled into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSelection {
    /// INSEE region code.
    pub code: String,
    /// Display name carried by the picked feature.
    pub name: String,
    /// Enclosing box of the region geometry.
    pub bounds: BoundingBox,
}

/// Current drill-down level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "camelCase")]
pub enum SelectionLevel {
    /// Nation-wide view. Initial state.
    #[default]
    National,
    /// A region is selected.
    RegionSelected {
        /// The selected region.
        region: RegionSelection,
    },
    /// A commune is selected inside a selected region.
    CommuneSelected {
        /// The region the commune was selected from.
        region: RegionSelection,
        /// The selected commune.
        commune: CommuneRecord,
    },
}

impl SelectionLevel {
    /// The selected region, if any level below `National` is active.
    #[must_use]
    pub const fn region(&self) -> Option<&RegionSelection> {
        match self {
            Self::National => None,
            Self::RegionSelected { region } | Self::CommuneSelected { region, .. } => Some(region),
        }
    }

    /// The selected commune, if any.
    #[must_use]
    pub const fn commune(&self) -> Option<&CommuneRecord> {
        match self {
            Self::CommuneSelected { commune, .. } => Some(commune),
            Self::National | Self::RegionSelected { .. } => None,
        }
    }

    /// Returns `true` at the nation-wide level.
    #[must_use]
    pub const fn is_national(&self) -> bool {
        matches!(self, Self::National)
    }
}

/// What a state transition produced: the new level and the bounding box
/// the map camera must now frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// Level after the transition.
    pub level: SelectionLevel,
    /// Box to feed to the viewport fitter.
    pub bounds: BoundingBox,
    /// `false` when the transition left the level as it was (e.g. a second
    /// reset).
    pub changed: bool,
}
