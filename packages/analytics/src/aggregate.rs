//! Grouping and summing production at the current drill-down level.
//!
//! | Level             | Communes considered         | Grouped by        |
//! |-------------------|-----------------------------|-------------------|
//! | `National`        | all                         | region code       |
//! | `RegionSelected`  | those of the region         | departement code  |
//! | `CommuneSelected` | the commune                 | (single group)    |
//!
//! Company entries are concatenated, never de-duplicated, so the group
//! totals always add up to the total of the communes considered.

use std::collections::BTreeMap;

use covid_dashboard_masks_models::{
    CommuneRecord, CompanyProduction, INTERNATIONAL_LABEL, NationalSummary, ProductionGroup,
};
use covid_dashboard_selection_models::SelectionLevel;

use crate::NameLookup;

/// Heading shown above the national-level groups.
pub const NATIONAL_HEADING: &str = "Par régions";

/// Groups production for `selection`.
///
/// Groups come out in first-seen order of their key, which is
/// deterministic for a given dataset.
#[must_use]
pub fn aggregate(
    communes: &[CommuneRecord],
    selection: &SelectionLevel,
    names: &dyn NameLookup,
) -> Vec<ProductionGroup> {
    match selection {
        SelectionLevel::National => group_by(
            communes.iter(),
            |c| c.region_code.as_deref(),
            |code| names.region_name(code),
        ),
        SelectionLevel::RegionSelected { region } => group_by(
            communes.iter().filter(|c| c.in_region(&region.code)),
            |c| c.departement_code.as_deref(),
            |code| names.departement_name(code),
        ),
        SelectionLevel::CommuneSelected { commune, .. } => vec![ProductionGroup {
            code: Some(commune.name.clone()),
            display_name: commune.name.clone(),
            companies: commune.companies.clone(),
        }],
    }
}

/// Nationwide totals over the whole dataset, whatever the selection.
#[must_use]
pub fn national_summary(communes: &[CommuneRecord]) -> NationalSummary {
    communes
        .iter()
        .fold(NationalSummary::default(), |summary, commune| NationalSummary {
            total_masks: summary.total_masks + commune.total_masks(),
            producing_companies: summary.producing_companies + commune.companies.len(),
        })
}

/// Heading above the group list: `"Par régions"` nation-wide, the region
/// name once drilled in, nothing for a single commune.
#[must_use]
pub fn heading(selection: &SelectionLevel) -> Option<String> {
    match selection {
        SelectionLevel::National => Some(NATIONAL_HEADING.to_string()),
        SelectionLevel::RegionSelected { region } => Some(region.name.clone()),
        SelectionLevel::CommuneSelected { .. } => None,
    }
}

fn group_by<'a>(
    communes: impl Iterator<Item = &'a CommuneRecord>,
    key: impl Fn(&CommuneRecord) -> Option<&str>,
    resolve: impl Fn(&str) -> Option<String>,
) -> Vec<ProductionGroup> {
    let mut index: BTreeMap<Option<String>, usize> = BTreeMap::new();
    let mut groups: Vec<(Option<String>, Vec<CompanyProduction>)> = Vec::new();

    for commune in communes {
        let code = key(commune).filter(|c| !c.is_empty()).map(ToString::to_string);
        let slot = *index.entry(code.clone()).or_insert_with(|| {
            groups.push((code, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.extend(commune.companies.iter().cloned());
    }

    groups
        .into_iter()
        .map(|(code, companies)| {
            let display_name = code.as_deref().and_then(&resolve).unwrap_or_else(|| {
                log::debug!("No display name for group {code:?}, using fallback label");
                INTERNATIONAL_LABEL.to_string()
            });
            ProductionGroup {
                code,
                display_name,
                companies,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InseeNames;
    use covid_dashboard_geography_models::BoundingBox;
    use covid_dashboard_selection_models::RegionSelection;

    struct StaticNames;

    impl NameLookup for StaticNames {
        fn region_name(&self, code: &str) -> Option<String> {
            match code {
                "R1" => Some("Region One".to_string()),
                "R2" => Some("Region Two".to_string()),
                _ => None,
            }
        }

        fn departement_name(&self, code: &str) -> Option<String> {
            match code {
                "D1" => Some("Departement One".to_string()),
                "D2" => Some("Departement Two".to_string()),
                _ => None,
            }
        }
    }

    fn dataset() -> Vec<CommuneRecord> {
        vec![
            CommuneRecord::new("C1", Some("R1"), Some("D1")).with_company("Alpha", 50),
            CommuneRecord::new("C2", Some("R1"), Some("D2")).with_company("Beta", 30),
            CommuneRecord::new("C3", Some("R2"), Some("D3")).with_company("Gamma", 20),
        ]
    }

    fn region(code: &str) -> RegionSelection {
        RegionSelection {
            code: code.to_string(),
            name: format!("Region {code}"),
            bounds: BoundingBox::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    fn total(groups: &[ProductionGroup]) -> u64 {
        groups.iter().map(ProductionGroup::total_masks).sum()
    }

    #[test]
    fn national_groups_by_region() {
        let communes = dataset();
        let groups = aggregate(&communes, &SelectionLevel::National, &StaticNames);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].code.as_deref(), Some("R1"));
        assert_eq!(groups[0].display_name, "Region One");
        assert_eq!(groups[0].total_masks(), 80);
        assert_eq!(groups[1].code.as_deref(), Some("R2"));
        assert_eq!(groups[1].total_masks(), 20);
    }

    #[test]
    fn national_summary_covers_everything() {
        let summary = national_summary(&dataset());
        assert_eq!(
            summary,
            NationalSummary {
                total_masks: 100,
                producing_companies: 3,
            }
        );
    }

    #[test]
    fn region_groups_by_departement() {
        let communes = dataset();
        let selection = SelectionLevel::RegionSelected { region: region("R1") };
        let groups = aggregate(&communes, &selection, &StaticNames);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].display_name, "Departement One");
        assert_eq!(groups[1].display_name, "Departement Two");
        assert_eq!(total(&groups), 80);
    }

    #[test]
    fn commune_is_its_own_group() {
        let communes = dataset();
        let selection = SelectionLevel::CommuneSelected {
            region: region("R1"),
            commune: communes[1].clone(),
        };
        let groups = aggregate(&communes, &selection, &StaticNames);

        assert_eq!(
            groups,
            vec![ProductionGroup {
                code: Some("C2".to_string()),
                display_name: "C2".to_string(),
                companies: vec![CompanyProduction::new("Beta", 30)],
            }]
        );
    }

    #[test]
    fn missing_region_code_is_international() {
        let mut communes = dataset();
        communes.push(CommuneRecord::new("international", None, None).with_company("Abroad", 7));

        let groups = aggregate(&communes, &SelectionLevel::National, &StaticNames);
        let last = groups.last().unwrap();
        assert_eq!(last.code, None);
        assert_eq!(last.display_name, INTERNATIONAL_LABEL);
        assert_eq!(total(&groups), 107);
    }

    #[test]
    fn unknown_departement_uses_fallback_label() {
        let communes = dataset();
        let selection = SelectionLevel::RegionSelected { region: region("R2") };
        let groups = aggregate(&communes, &selection, &StaticNames);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].code.as_deref(), Some("D3"));
        assert_eq!(groups[0].display_name, INTERNATIONAL_LABEL);
    }

    #[test]
    fn duplicate_companies_are_both_counted() {
        let communes = vec![
            CommuneRecord::new("Roanne", Some("84"), Some("42")).with_company("Tissages", 100),
            CommuneRecord::new("Lyon", Some("84"), Some("69")).with_company("Tissages", 40),
        ];
        let groups = aggregate(&communes, &SelectionLevel::National, &InseeNames);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].display_name, "Auvergne-Rhône-Alpes");
        assert_eq!(groups[0].companies.len(), 2);
        assert_eq!(groups[0].total_masks(), 140);
    }

    #[test]
    fn empty_company_lists_contribute_nothing() {
        let mut communes = dataset();
        communes.push(CommuneRecord::new("Vide", Some("R2"), Some("D4")));

        let groups = aggregate(&communes, &SelectionLevel::National, &StaticNames);
        assert_eq!(total(&groups), 100);
        assert_eq!(national_summary(&communes).producing_companies, 3);
    }

    #[test]
    fn group_totals_match_visible_communes() {
        let mut communes = dataset();
        communes.push(CommuneRecord::new("C4", Some("R1"), Some("D1")).with_company("Alpha", 5));
        communes.push(CommuneRecord::new("international", None, None).with_company("Abroad", 9));
        communes.push(CommuneRecord::new("C5", Some("R2"), None).with_company("Delta", 11));

        let all: u64 = communes.iter().map(CommuneRecord::total_masks).sum();
        assert_eq!(total(&aggregate(&communes, &SelectionLevel::National, &StaticNames)), all);

        for code in ["R1", "R2", "R9"] {
            let expected: u64 = communes
                .iter()
                .filter(|c| c.in_region(code))
                .map(CommuneRecord::total_masks)
                .sum();
            let selection = SelectionLevel::RegionSelected { region: region(code) };
            assert_eq!(
                total(&aggregate(&communes, &selection, &StaticNames)),
                expected,
                "sum mismatch for region {code}"
            );
        }

        for commune in &communes {
            let selection = SelectionLevel::CommuneSelected {
                region: region("R1"),
                commune: commune.clone(),
            };
            assert_eq!(
                total(&aggregate(&communes, &selection, &StaticNames)),
                commune.total_masks()
            );
        }
    }

    #[test]
    fn grouping_order_is_first_seen() {
        let communes = vec![
            CommuneRecord::new("A", Some("R2"), None).with_company("x", 1),
            CommuneRecord::new("B", Some("R1"), None).with_company("y", 1),
            CommuneRecord::new("C", Some("R2"), None).with_company("z", 1),
        ];
        let groups = aggregate(&communes, &SelectionLevel::National, &StaticNames);
        let codes: Vec<_> = groups.iter().map(|g| g.code.as_deref()).collect();
        assert_eq!(codes, vec![Some("R2"), Some("R1")]);
        assert_eq!(groups, aggregate(&communes, &SelectionLevel::National, &StaticNames));
    }

    #[test]
    fn headings() {
        assert_eq!(heading(&SelectionLevel::National).as_deref(), Some(NATIONAL_HEADING));
        let selection = SelectionLevel::RegionSelected { region: region("R1") };
        assert_eq!(heading(&selection).as_deref(), Some("Region R1"));
        let selection = SelectionLevel::CommuneSelected {
            region: region("R1"),
            commune: dataset()[0].clone(),
        };
        assert_eq!(heading(&selection), None);
    }
}
