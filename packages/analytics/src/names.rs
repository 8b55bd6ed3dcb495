//! Display-name resolution for grouping keys.

use covid_dashboard_geography_models::insee;

/// Resolves region and departement codes to display names.
///
/// Lookups are read-only; `None` means the code is unknown and the caller
/// substitutes its fallback label.
pub trait NameLookup {
    /// Display name of a region code.
    fn region_name(&self, code: &str) -> Option<String>;

    /// Display name of a departement code.
    fn departement_name(&self, code: &str) -> Option<String>;
}

/// Lookup backed by the built-in INSEE tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct InseeNames;

impl NameLookup for InseeNames {
    fn region_name(&self, code: &str) -> Option<String> {
        insee::region_name(code).map(ToString::to_string)
    }

    fn departement_name(&self, code: &str) -> Option<String> {
        insee::departement_name(code).map(ToString::to_string)
    }
}
