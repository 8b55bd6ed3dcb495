#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Cumulative case counters.
//!
//! A [`Report`] holds the named indicators published for one day. The
//! counter board compares it with the previous day's report: each counter
//! shows its current value and a [`CounterDelta`].

pub mod board;
pub mod delta;

pub use board::{Counter, CounterSection, counter_board};
pub use delta::{CounterDelta, Trend, delta};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// Errors reading a report.
#[derive(Debug, Error)]
pub enum CounterError {
    /// The report is not valid JSON or has mistyped fields.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A published indicator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Indicator {
    /// Cumulative confirmed cases.
    CasConfirmes,
    /// Patients currently in hospital.
    Hospitalises,
    /// Patients currently in intensive care.
    Reanimation,
    /// Cumulative hospital deaths.
    Deces,
    /// Cumulative deaths in care homes (EHPAD and EMS).
    DecesEhpad,
    /// Cumulative returns home after hospitalisation.
    Gueris,
    /// Probable cases in care homes.
    CasPossiblesEhpad,
    /// Confirmed cases in care homes.
    CasConfirmesEhpad,
}

/// Indicator values for one publication date. Any indicator may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    /// Publication date, as published (`YYYY-MM-DD`).
    pub date: Option<String>,
    /// Cumulative confirmed cases.
    pub cas_confirmes: Option<i64>,
    /// Patients currently in hospital.
    pub hospitalises: Option<i64>,
    /// Patients currently in intensive care.
    pub reanimation: Option<i64>,
    /// Cumulative hospital deaths.
    pub deces: Option<i64>,
    /// Cumulative care-home deaths.
    pub deces_ehpad: Option<i64>,
    /// Cumulative returns home.
    pub gueris: Option<i64>,
    /// Probable care-home cases.
    pub cas_possibles_ehpad: Option<i64>,
    /// Confirmed care-home cases.
    pub cas_confirmes_ehpad: Option<i64>,
}

impl Report {
    /// Parses a report from its published JSON form.
    ///
    /// # Errors
    ///
    /// * If the JSON is malformed or an indicator is not an integer
    pub fn from_json(json: &str) -> Result<Self, CounterError> {
        let report: Self = serde_json::from_str(json)?;
        log::debug!("Loaded report for {:?}", report.date);
        Ok(report)
    }

    /// Value of `indicator`, if published.
    #[must_use]
    pub const fn get(&self, indicator: Indicator) -> Option<i64> {
        match indicator {
            Indicator::CasConfirmes => self.cas_confirmes,
            Indicator::Hospitalises => self.hospitalises,
            Indicator::Reanimation => self.reanimation,
            Indicator::Deces => self.deces,
            Indicator::DecesEhpad => self.deces_ehpad,
            Indicator::Gueris => self.gueris,
            Indicator::CasPossiblesEhpad => self.cas_possibles_ehpad,
            Indicator::CasConfirmesEhpad => self.cas_confirmes_ehpad,
        }
    }
}

/// A displayed quantity: a single indicator or a composite of several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// One published indicator.
    Single(Indicator),
    /// Hospital deaths plus care-home deaths.
    TotalDeaths,
}

impl Metric {
    /// Value of the metric in `report`.
    ///
    /// Composites are summed from their components and are missing as soon
    /// as one component is missing.
    #[must_use]
    pub fn value(self, report: &Report) -> Option<i64> {
        match self {
            Self::Single(indicator) => report.get(indicator),
            Self::TotalDeaths => report.deces?.checked_add(report.deces_ehpad?),
        }
    }
}
