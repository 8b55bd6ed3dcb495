//! The dashboard event loop.
//!
//! On each event: call the pure transition, store the result, re-fit the
//! camera to the emitted box. Derived statistics are only computed when a
//! [`snapshot`](Dashboard::snapshot) is taken.

use covid_dashboard_analytics::{
    InseeNames, aggregate, enabled_regions, heading, national_summary, regions_interactive,
    visible_markers,
};
use covid_dashboard_counters::{Report, counter_board};
use covid_dashboard_geography::{GeoIndex, RegionFeature};
use covid_dashboard_geography_models::BoundingBox;
use covid_dashboard_masks_models::CommuneRecord;
use covid_dashboard_selection::{HoverState, SelectionStateMachine};
use covid_dashboard_selection_models::{SelectionLevel, Transition};
use covid_dashboard_viewport::{ResizeObserver, ViewportController, ViewportState};

use crate::{DashboardConfig, DashboardError, DashboardEvent, DashboardSnapshot};

/// One dashboard session.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    geo: GeoIndex,
    communes: Option<Vec<CommuneRecord>>,
    reports: Option<(Report, Option<Report>)>,
    selection: SelectionStateMachine,
    viewport: ViewportController,
    resizes: ResizeObserver,
    hover: HoverState,
}

impl Dashboard {
    /// Creates a session at the `National` level, showing the configured
    /// default camera until the first container size arrives.
    #[must_use]
    pub fn new(config: DashboardConfig, geo: GeoIndex) -> Self {
        let country_bounds = geo.bounds_or_default(&config.map.country_code);
        let viewport = ViewportController::new(
            config.fitter(),
            config.map.padding,
            country_bounds,
            config.initial_viewport(),
        );

        Self {
            selection: SelectionStateMachine::new(country_bounds),
            viewport,
            resizes: ResizeObserver::new(),
            hover: HoverState::default(),
            communes: None,
            reports: None,
            config,
            geo,
        }
    }

    /// Configuration the session was created with.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Reference bounding boxes.
    #[must_use]
    pub const fn geo(&self) -> &GeoIndex {
        &self.geo
    }

    /// Current drill-down level.
    #[must_use]
    pub const fn level(&self) -> &SelectionLevel {
        self.selection.level()
    }

    /// Current camera.
    #[must_use]
    pub const fn viewport(&self) -> ViewportState {
        self.viewport.viewport()
    }

    /// Box the camera is fitted to.
    #[must_use]
    pub const fn bounds(&self) -> BoundingBox {
        self.viewport.bounds()
    }

    /// Current hover annotations.
    #[must_use]
    pub const fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Returns `true` once the mask dataset is loaded.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.communes.is_some()
    }

    /// Loaded communes; empty until the dataset is ready.
    #[must_use]
    pub fn communes(&self) -> &[CommuneRecord] {
        self.communes.as_deref().unwrap_or_default()
    }

    /// Handles one event.
    ///
    /// # Errors
    ///
    /// * [`DashboardError::UnknownCommune`] if the event names a commune
    ///   missing from the dataset
    /// * [`DashboardError::Selection`] if the selection machine rejects the
    ///   commune
    pub fn dispatch(&mut self, event: DashboardEvent) -> Result<(), DashboardError> {
        match event {
            DashboardEvent::DatasetReady(communes) => {
                self.load_dataset(communes);
                Ok(())
            }
            DashboardEvent::ReportsReady { current, previous } => {
                log::info!("Reports ready for {:?}", current.date);
                self.reports = Some((current, previous));
                Ok(())
            }
            DashboardEvent::Resize(size) => {
                self.resizes.observe(size);
                self.flush_resizes();
                Ok(())
            }
            DashboardEvent::ClickRegion(feature) => {
                self.click_region(feature);
                Ok(())
            }
            DashboardEvent::ClickCommune(name) => self.click_commune(&name),
            DashboardEvent::HoverRegion(code) => {
                self.hover_region(code);
                Ok(())
            }
            DashboardEvent::HoverMarker(name) => self.hover_marker(name.as_deref()),
            DashboardEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Handles a batch of events in order.
    ///
    /// Consecutive resizes are coalesced: only the last size of a run is
    /// fitted, right before the next other event (or at the end). A failed
    /// event does not stop the batch; its error is returned in order.
    pub fn dispatch_all(
        &mut self,
        events: impl IntoIterator<Item = DashboardEvent>,
    ) -> Vec<DashboardError> {
        let mut errors = Vec::new();

        for event in events {
            if let DashboardEvent::Resize(size) = event {
                self.resizes.observe(size);
                continue;
            }
            self.flush_resizes();
            if let Err(e) = self.dispatch(event) {
                errors.push(e);
            }
        }
        self.flush_resizes();

        errors
    }

    /// Read-only view of the current state with freshly computed
    /// statistics.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let communes = self.communes();
        let level = self.selection.level();

        DashboardSnapshot {
            dataset_ready: self.is_ready(),
            level: level.clone(),
            viewport: self.viewport.viewport(),
            heading: heading(level),
            groups: aggregate(communes, level, &InseeNames),
            summary: national_summary(communes),
            markers: visible_markers(communes, level),
            enabled_regions: enabled_regions(communes),
            regions_interactive: regions_interactive(level),
            hover: self.hover.clone(),
            counters: self
                .reports
                .as_ref()
                .map(|(current, previous)| counter_board(current, previous.as_ref()))
                .unwrap_or_default(),
        }
    }

    fn load_dataset(&mut self, communes: Vec<CommuneRecord>) {
        log::info!("Mask production dataset ready: {} communes", communes.len());
        self.communes = Some(communes);
        self.hover.clear();
        let transition = self.selection.reset();
        self.frame(&transition);
    }

    /// Region shapes are only drawn (and so only picked) for regions with
    /// production, and only at the `National` level. Any other click lands
    /// on the bare map, which resets.
    fn click_region(&mut self, feature: Option<RegionFeature>) {
        self.hover.clear_region();

        let picked = feature.filter(|feature| {
            regions_interactive(self.selection.level())
                && enabled_regions(self.communes()).contains(&feature.code)
        });

        let transition = self.selection.select_region(picked.as_ref());
        if picked.is_none() {
            self.hover.clear_marker();
        }
        self.frame(&transition);
    }

    fn click_commune(&mut self, name: &str) -> Result<(), DashboardError> {
        let commune = self.find_commune(name)?.clone();
        let transition = self.selection.select_commune(&commune)?;
        self.hover.clear_marker();
        self.frame(&transition);
        Ok(())
    }

    fn hover_region(&mut self, code: Option<String>) {
        let code = code.filter(|code| {
            regions_interactive(self.selection.level())
                && enabled_regions(self.communes()).contains(code)
        });
        self.hover.hover_region(code.as_deref());
    }

    fn hover_marker(&mut self, name: Option<&str>) -> Result<(), DashboardError> {
        let Some(name) = name else {
            self.hover.clear_marker();
            return Ok(());
        };

        let commune = self.find_commune(name)?.clone();
        if !self.hover.hover_marker(self.selection.level(), Some(&commune)) {
            log::trace!("Ignoring hover on {name}: no region selected");
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.hover.clear();
        let transition = self.selection.reset();
        self.frame(&transition);
    }

    fn find_commune(&self, name: &str) -> Result<&CommuneRecord, DashboardError> {
        self.communes()
            .iter()
            .find(|commune| commune.name == name)
            .ok_or_else(|| {
                log::warn!("Unknown commune {name}");
                DashboardError::UnknownCommune {
                    name: name.to_string(),
                }
            })
    }

    fn frame(&mut self, transition: &Transition) {
        if transition.changed || transition.bounds != self.viewport.bounds() {
            self.viewport.set_bounds(transition.bounds);
        }
    }

    fn flush_resizes(&mut self) {
        self.resizes.flush(&mut self.viewport);
    }
}
