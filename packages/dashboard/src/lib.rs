#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard core: mask production drill-down and case counters.
//!
//! A [`Dashboard`] runs an explicit event loop. Each
//! [`DashboardEvent`] triggers at most one selection transition, the
//! camera is re-fitted to the box that transition emits, and a
//! [`DashboardSnapshot`] recomputes the statistics for the new level on
//! demand. Nothing is shared across threads; every event is handled
//! synchronously.
//!
//! ```rust,ignore
//! let mut dashboard = Dashboard::new(DashboardConfig::from_env()?, GeoIndex::builtin());
//! dashboard.dispatch(DashboardEvent::DatasetReady(communes))?;
//! dashboard.dispatch(DashboardEvent::Resize(ContainerSize::new(800.0, 600.0)))?;
//! let snapshot = dashboard.snapshot();
//! ```

pub mod config;
pub mod dashboard;
pub mod event;
pub mod snapshot;

pub use config::{ConfigError, DashboardConfig};
pub use dashboard::Dashboard;
pub use event::DashboardEvent;
pub use snapshot::DashboardSnapshot;

use covid_dashboard_selection::SelectionError;
use thiserror::Error;

/// Errors handling a dashboard event. The dashboard state is unchanged
/// when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The selection machine rejected the transition.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The event named a commune that is not in the dataset.
    #[error("Unknown commune: {name}")]
    UnknownCommune {
        /// The name that was looked up.
        name: String,
    },
}
