#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Drill-down navigation for the mask production map.
//!
//! The [`SelectionStateMachine`] exclusively owns the current
//! [`SelectionLevel`](covid_dashboard_selection_models::SelectionLevel).
//! Every transition returns the bounding box the camera must frame next.
//! Hover annotations live beside the machine in [`hover`] and never change
//! the level.

pub mod hover;
pub mod machine;

pub use hover::{HoverState, HoveredMarker};
pub use machine::SelectionStateMachine;

use thiserror::Error;

/// Rejected transitions.
///
/// The map only offers communes of the selected region, so these signal a
/// caller bug rather than a runtime condition to recover from. The machine
/// state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A commune was selected while no region is selected.
    #[error("Cannot select commune {commune}: no region is selected")]
    NoRegionSelected {
        /// Name of the commune that was requested.
        commune: String,
    },

    /// A commune outside the selected region was selected.
    #[error(
        "Cannot select commune {commune} (region {}) while region {selected_region} is selected",
        .commune_region.as_deref().unwrap_or("none")
    )]
    RegionMismatch {
        /// Name of the commune that was requested.
        commune: String,
        /// Region code carried by the commune.
        commune_region: Option<String>,
        /// Code of the currently selected region.
        selected_region: String,
    },
}
