//! Layout of the counter board.

use serde::{Deserialize, Serialize};

use crate::{CounterDelta, Indicator, Metric, Report, delta};

/// Title of the hospital section.
pub const HOSPITAL_SECTION: &str = "Données hospitalières";
/// Title of the care-home section.
pub const CARE_HOME_SECTION: &str = "Données EHPAD et EMS";

/// One displayed counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    /// Quantity shown.
    pub metric: Metric,
    /// Caption under the value.
    pub label: String,
    /// Value in the current report.
    pub value: Option<i64>,
    /// Change since the previous report.
    pub delta: CounterDelta,
    /// Headline counters are shown larger.
    pub headline: bool,
}

impl Counter {
    fn new(metric: Metric, label: &str, current: &Report, previous: &Report) -> Self {
        let value = metric.value(current);
        Self {
            metric,
            label: label.to_string(),
            value,
            delta: delta(value, metric.value(previous)),
            headline: false,
        }
    }

    fn headline(mut self) -> Self {
        self.headline = true;
        self
    }
}

/// A titled group of counters. The headline section has no title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSection {
    /// Section title, `None` for the headline.
    pub title: Option<String>,
    /// Counters in display order. Empty when none can be shown yet.
    pub counters: Vec<Counter>,
}

/// Builds the board for `current`, comparing against `previous`.
///
/// Without a previous report every delta is unknown. The care-home section
/// is always titled, but it and the total-deaths headline only hold counters
/// once care-home deaths are published.
#[must_use]
pub fn counter_board(current: &Report, previous: Option<&Report>) -> Vec<CounterSection> {
    let empty = Report::default();
    let previous = previous.unwrap_or(&empty);
    let care_homes = current.deces_ehpad.is_some();

    let mut headline = Vec::new();
    if current.cas_confirmes.is_some() {
        headline.push(
            Counter::new(
                Metric::Single(Indicator::CasConfirmes),
                "cas confirmés",
                current,
                previous,
            )
            .headline(),
        );
    }
    if care_homes {
        headline.push(
            Counter::new(Metric::TotalDeaths, "cumul des décès", current, previous).headline(),
        );
    }

    let single = |indicator: Indicator, label: &str| {
        Counter::new(Metric::Single(indicator), label, current, previous)
    };

    let mut sections = vec![
        CounterSection {
            title: None,
            counters: headline,
        },
        CounterSection {
            title: Some(HOSPITAL_SECTION.to_string()),
            counters: vec![
                single(Indicator::Hospitalises, "hospitalisations"),
                single(Indicator::Gueris, "retours à domicile"),
                single(Indicator::Reanimation, "en réanimation"),
                single(Indicator::Deces, "décès à l’hôpital"),
            ],
        },
    ];

    let care_home_counters = if care_homes {
        vec![
            single(Indicator::CasConfirmesEhpad, "cas confirmés en EHPAD et EMS"),
            single(Indicator::CasPossiblesEhpad, "cas probables en EHPAD et EMS"),
            single(Indicator::DecesEhpad, "décès en EHPAD et EMS"),
        ]
    } else {
        log::debug!("No care-home deaths published, leaving {CARE_HOME_SECTION} empty");
        Vec::new()
    };

    sections.push(CounterSection {
        title: Some(CARE_HOME_SECTION.to_string()),
        counters: care_home_counters,
    });

    sections
}
