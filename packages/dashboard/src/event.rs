//! Inputs to the dashboard event loop.

use covid_dashboard_counters::Report;
use covid_dashboard_geography::RegionFeature;
use covid_dashboard_masks_models::CommuneRecord;
use covid_dashboard_viewport::ContainerSize;

/// Something that happened to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The mask production dataset finished loading.
    DatasetReady(Vec<CommuneRecord>),
    /// Case reports for today and, when available, the day before.
    ReportsReady {
        /// Latest report.
        current: Report,
        /// Report of the previous day, used for deltas.
        previous: Option<Report>,
    },
    /// The map container changed size.
    Resize(ContainerSize),
    /// The map was clicked. Carries the region under the pointer, if any.
    ClickRegion(Option<RegionFeature>),
    /// A commune marker was clicked.
    ClickCommune(String),
    /// The pointer moved over a region (by code) or off every region.
    HoverRegion(Option<String>),
    /// The pointer entered a commune marker (by name) or left it.
    HoverMarker(Option<String>),
    /// The "back" control was used.
    Reset,
}
