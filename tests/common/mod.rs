//! Feature table fixtures shared by the integration tests.

#![allow(dead_code)]

use annocheck::table::FeatureTable;

pub const CAFFEINE_INCHI: &str =
    "InChI=1S/C8H10N4O2/c1-10-4-9-6-5(10)7(13)12(3)8(14)11(6)2/h4H,1-3H3";

pub const CANOPUS_ALL: &str =
    "Organic compounds; Organoheterocyclic compounds; Imidazopyrimidines; Purines and purine derivatives";

/// A feature that passes every filter of both modes and agrees on everything
pub const BASE_FEATURE: [(&str, &str); 24] = [
    ("row ID", "0"),
    ("GNPS_LIB_IonMode", "Positive"),
    ("GNPS_LIB_SpecCharge", "1"),
    ("GNPS_LIB_MQScore", "0.85"),
    ("GNPS_LIB_SharedPeaks", "10"),
    ("GNPS_LIB_MZErrorPPM", "2.5"),
    ("GNPS_LIB_INCHI", CAFFEINE_INCHI),
    ("GNPS_LIB_Adduct", "M+H"),
    ("GNPS_LIB_superclass", "Organoheterocyclic compounds"),
    ("GNPS_LIB_class", "Imidazopyrimidines"),
    ("GNPS_LIB_subclass", "Purines and purine derivatives"),
    ("GNPS_LIBA_IonMode", "Positive"),
    ("GNPS_LIBA_SpecCharge", "1"),
    ("GNPS_LIBA_MQScore", "0.8"),
    ("GNPS_LIBA_SharedPeaks", "9"),
    ("GNPS_LIBA_superclass", "Organoheterocyclic compounds"),
    ("GNPS_LIBA_class", "Imidazopyrimidines"),
    ("GNPS_LIBA_subclass", "Purines and purine derivatives"),
    ("SIR_MF_Zod_molecularFormula", "C8H10N4O2"),
    ("SIR_MF_Zod_ZodiacScore", "0.95"),
    ("CAN_superclass", "Organoheterocyclic compounds"),
    ("CAN_class", "Imidazopyrimidines"),
    ("CAN_subclass", "Purines and purine derivatives"),
    ("CAN_all classifications", CANOPUS_ALL),
];

pub fn headers() -> Vec<&'static str> {
    BASE_FEATURE.iter().map(|(h, _)| *h).collect()
}

/// The base feature with some cells replaced (`None` empties the cell)
pub fn feature(id: usize, overrides: &[(&str, Option<&str>)]) -> Vec<Option<String>> {
    BASE_FEATURE
        .iter()
        .map(|&(header, value)| {
            if header == "row ID" {
                return Some(id.to_string());
            }
            match overrides.iter().find(|(h, _)| *h == header) {
                Some((_, replacement)) => replacement.map(str::to_string),
                None => Some(value.to_string()),
            }
        })
        .collect()
}

pub fn table(rows: Vec<Vec<Option<String>>>) -> FeatureTable {
    let mut table = FeatureTable::new(&headers()).unwrap();
    for row in rows {
        table.push_row(row);
    }
    table
}

/// Thirteen features exercising every regular mode filter once.
///
/// Survivors (regular mode): rows 0, 9, 10, 11 and 12.
pub fn regular_fixture() -> FeatureTable {
    table(vec![
        feature(0, &[]),
        feature(1, &[("GNPS_LIB_IonMode", Some("Negative"))]),
        feature(2, &[("GNPS_LIB_SpecCharge", Some("2"))]),
        feature(3, &[("GNPS_LIB_SharedPeaks", Some("6"))]),
        feature(4, &[("GNPS_LIB_MQScore", Some("0.7"))]),
        feature(5, &[("GNPS_LIB_MZErrorPPM", Some("10"))]),
        feature(
            6,
            &[("GNPS_LIB_INCHI", Some("InChI=1S/C5H11NO2/c1-6(2,3)4-5(7)8/h4H2,1-3H3/p+1"))],
        ),
        feature(7, &[("GNPS_LIB_Adduct", Some("M-C2H4+H"))]),
        feature(8, &[("GNPS_LIB_INCHI", None)]),
        feature(9, &[("SIR_MF_Zod_molecularFormula", Some("C9H12N2"))]),
        feature(10, &[("SIR_MF_Zod_ZodiacScore", Some("0.5"))]),
        feature(
            11,
            &[
                (
                    "CAN_all classifications",
                    Some("Organic compounds; Benzenoids; Benzene and substituted derivatives"),
                ),
                ("SIR_MF_Zod_ZodiacScore", Some("0.9")),
            ],
        ),
        feature(
            12,
            &[
                ("GNPS_LIB_subclass", None),
                ("SIR_MF_Zod_ZodiacScore", Some("0.9")),
            ],
        ),
    ])
}
