//! INSEE administrative code utilities.
//!
//! Provides mappings from INSEE region codes and departement codes to
//! their display names, for the 18 regions and 101 departements.

/// INSEE region codes (5 overseas + 13 metropolitan).
pub const REGION_CODES: &[&str] = &[
    "01", "02", "03", "04", "06", "11", "24", "27", "28", "32", "44", "52", "53", "75", "76", "84",
    "93", "94",
];

/// INSEE departement codes, Corsica split into `2A`/`2B`.
pub const DEPARTEMENT_CODES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "21", "22", "23", "24", "25", "26", "27", "28", "29", "2A", "2B", "30", "31",
    "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47",
    "48", "49", "50", "51", "52", "53", "54", "55", "56", "57", "58", "59", "60", "61", "62", "63",
    "64", "65", "66", "67", "68", "69", "70", "71", "72", "73", "74", "75", "76", "77", "78", "79",
    "80", "81", "82", "83", "84", "85", "86", "87", "88", "89", "90", "91", "92", "93", "94", "95",
    "971", "972", "973", "974", "976",
];

/// Strips an ISO 3166-2 style `FR-` prefix, so both `"84"` and `"FR-84"`
/// resolve to the same region.
fn strip_country_prefix(code: &str) -> &str {
    code.strip_prefix("FR-").unwrap_or(code)
}

/// Maps an INSEE region code to the region name.
///
/// Accepts bare codes (`"84"`) and ISO-style codes (`"FR-84"`). Returns
/// `None` for unrecognized codes.
#[must_use]
pub fn region_name(code: &str) -> Option<&'static str> {
    let name = match strip_country_prefix(code) {
        "01" => "Guadeloupe",
        "02" => "Martinique",
        "03" => "Guyane",
        "04" => "La Réunion",
        "06" => "Mayotte",
        "11" => "Île-de-France",
        "24" => "Centre-Val de Loire",
        "27" => "Bourgogne-Franche-Comté",
        "28" => "Normandie",
        "32" => "Hauts-de-France",
        "44" => "Grand Est",
        "52" => "Pays de la Loire",
        "53" => "Bretagne",
        "75" => "Nouvelle-Aquitaine",
        "76" => "Occitanie",
        "84" => "Auvergne-Rhône-Alpes",
        "93" => "Provence-Alpes-Côte d’Azur",
        "94" => "Corse",
        _ => return None,
    };
    Some(name)
}

/// Maps an INSEE departement code to the departement name.
///
/// Single-digit codes are accepted without their leading zero. Returns
/// `None` for unrecognized codes.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn departement_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    let padded;
    let code = if code.len() == 1 {
        padded = format!("0{code}");
        padded.as_str()
    } else {
        code
    };

    let name = match code {
        "01" => "Ain",
        "02" => "Aisne",
        "03" => "Allier",
        "04" => "Alpes-de-Haute-Provence",
        "05" => "Hautes-Alpes",
        "06" => "Alpes-Maritimes",
        "07" => "Ardèche",
        "08" => "Ardennes",
        "09" => "Ariège",
        "10" => "Aube",
        "11" => "Aude",
        "12" => "Aveyron",
        "13" => "Bouches-du-Rhône",
        "14" => "Calvados",
        "15" => "Cantal",
        "16" => "Charente",
        "17" => "Charente-Maritime",
        "18" => "Cher",
        "19" => "Corrèze",
        "21" => "Côte-d’Or",
        "22" => "Côtes-d’Armor",
        "23" => "Creuse",
        "24" => "Dordogne",
        "25" => "Doubs",
        "26" => "Drôme",
        "27" => "Eure",
        "28" => "Eure-et-Loir",
        "29" => "Finistère",
        "2A" => "Corse-du-Sud",
        "2B" => "Haute-Corse",
        "30" => "Gard",
        "31" => "Haute-Garonne",
        "32" => "Gers",
        "33" => "Gironde",
        "34" => "Hérault",
        "35" => "Ille-et-Vilaine",
        "36" => "Indre",
        "37" => "Indre-et-Loire",
        "38" => "Isère",
        "39" => "Jura",
        "40" => "Landes",
        "41" => "Loir-et-Cher",
        "42" => "Loire",
        "43" => "Haute-Loire",
        "44" => "Loire-Atlantique",
        "45" => "Loiret",
        "46" => "Lot",
        "47" => "Lot-et-Garonne",
        "48" => "Lozère",
        "49" => "Maine-et-Loire",
        "50" => "Manche",
        "51" => "Marne",
        "52" => "Haute-Marne",
        "53" => "Mayenne",
        "54" => "Meurthe-et-Moselle",
        "55" => "Meuse",
        "56" => "Morbihan",
        "57" => "Moselle",
        "58" => "Nièvre",
        "59" => "Nord",
        "60" => "Oise",
        "61" => "Orne",
        "62" => "Pas-de-Calais",
        "63" => "Puy-de-Dôme",
        "64" => "Pyrénées-Atlantiques",
        "65" => "Hautes-Pyrénées",
        "66" => "Pyrénées-Orientales",
        "67" => "Bas-Rhin",
        "68" => "Haut-Rhin",
        "69" => "Rhône",
        "70" => "Haute-Saône",
        "71" => "Saône-et-Loire",
        "72" => "Sarthe",
        "73" => "Savoie",
        "74" => "Haute-Savoie",
        "75" => "Paris",
        "76" => "Seine-Maritime",
        "77" => "Seine-et-Marne",
        "78" => "Yvelines",
        "79" => "Deux-Sèvres",
        "80" => "Somme",
        "81" => "Tarn",
        "82" => "Tarn-et-Garonne",
        "83" => "Var",
        "84" => "Vaucluse",
        "85" => "Vendée",
        "86" => "Vienne",
        "87" => "Haute-Vienne",
        "88" => "Vosges",
        "89" => "Yonne",
        "90" => "Territoire de Belfort",
        "91" => "Essonne",
        "92" => "Hauts-de-Seine",
        "93" => "Seine-Saint-Denis",
        "94" => "Val-de-Marne",
        "95" => "Val-d’Oise",
        "971" => "Guadeloupe",
        "972" => "Martinique",
        "973" => "Guyane",
        "974" => "La Réunion",
        "976" => "Mayotte",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_counts() {
        assert_eq!(REGION_CODES.len(), 18);
        assert_eq!(DEPARTEMENT_CODES.len(), 101);
    }

    #[test]
    fn region_name_coverage() {
        for code in REGION_CODES {
            assert!(region_name(code).is_some(), "no name for region: {code}");
        }
    }

    #[test]
    fn departement_name_coverage() {
        for code in DEPARTEMENT_CODES {
            assert!(
                departement_name(code).is_some(),
                "no name for departement: {code}"
            );
        }
    }

    #[test]
    fn iso_style_region_codes() {
        assert_eq!(region_name("FR-84"), Some("Auvergne-Rhône-Alpes"));
        assert_eq!(region_name("84"), Some("Auvergne-Rhône-Alpes"));
    }

    #[test]
    fn unpadded_departement_codes() {
        assert_eq!(departement_name("1"), Some("Ain"));
        assert_eq!(departement_name("01"), Some("Ain"));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(region_name("99"), None);
        assert_eq!(region_name(""), None);
        assert_eq!(departement_name("20"), None);
        assert_eq!(departement_name("XX"), None);
    }
}
