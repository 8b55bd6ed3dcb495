//! Read-only view handed to the renderer.

use covid_dashboard_analytics::MarkerView;
use covid_dashboard_counters::CounterSection;
use covid_dashboard_masks_models::{NationalSummary, ProductionGroup};
use covid_dashboard_selection::HoverState;
use covid_dashboard_selection_models::SelectionLevel;
use covid_dashboard_viewport::ViewportState;
use serde::{Deserialize, Serialize};

/// Everything the renderer draws after an event.
///
/// Derived fields (`groups`, `summary`, `markers`, ...) are recomputed for
/// every snapshot from the dataset and the current level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// `false` until the mask dataset is loaded.
    pub dataset_ready: bool,
    /// Current drill-down level.
    pub level: SelectionLevel,
    /// Current camera.
    pub viewport: ViewportState,
    /// Heading of the statistics panel.
    pub heading: Option<String>,
    /// Production grouped at the current level.
    pub groups: Vec<ProductionGroup>,
    /// Nationwide production, whatever the level.
    pub summary: NationalSummary,
    /// Commune markers to draw.
    pub markers: Vec<MarkerView>,
    /// Region codes that are outlined and can be picked.
    pub enabled_regions: Vec<String>,
    /// Whether region shapes currently respond to clicks.
    pub regions_interactive: bool,
    /// Region highlight and marker popup.
    pub hover: HoverState,
    /// Case counters. Empty until reports are loaded.
    pub counters: Vec<CounterSection>,
}
