#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Mask production aggregation.
//!
//! Every function here is a pure computation over the in-memory commune
//! dataset and the current selection level. Results are recomputed on
//! every query and never cached across selection changes.

pub mod aggregate;
pub mod map_layers;
pub mod names;

pub use aggregate::{aggregate, heading, national_summary};
pub use map_layers::{MarkerView, enabled_regions, regions_interactive, visible_markers};
pub use names::{InseeNames, NameLookup};
