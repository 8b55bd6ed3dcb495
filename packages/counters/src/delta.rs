//! Day-over-day change of a counter.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction of change between two reports.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    /// The value increased.
    Up,
    /// The value decreased.
    Down,
    /// The value did not change.
    Flat,
    /// One of the two values is missing.
    Unknown,
}

/// Change of a counter since the previous report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterDelta {
    /// `current - previous`, missing when the trend is unknown.
    pub value: Option<i64>,
    /// Direction of change.
    pub trend: Trend,
}

impl CounterDelta {
    /// Delta of a counter that cannot be compared.
    pub const UNKNOWN: Self = Self {
        value: None,
        trend: Trend::Unknown,
    };
}

/// Computes the change from `previous` to `current`.
#[must_use]
pub fn delta(current: Option<i64>, previous: Option<i64>) -> CounterDelta {
    let (Some(current), Some(previous)) = (current, previous) else {
        return CounterDelta::UNKNOWN;
    };
    let Some(value) = current.checked_sub(previous) else {
        log::debug!("Delta {current} - {previous} overflows");
        return CounterDelta::UNKNOWN;
    };

    let trend = match value.signum() {
        1 => Trend::Up,
        -1 => Trend::Down,
        _ => Trend::Flat,
    };

    CounterDelta {
        value: Some(value),
        trend,
    }
}
