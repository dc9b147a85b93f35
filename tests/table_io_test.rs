//! Integration tests for loading, checking and re-exporting feature table files

mod common;

use annocheck::check::{check_matching_annotations, CheckParams};
use annocheck::table::{columns, Delimiter, FeatureTable};
use std::fs;
use tempfile::tempdir;

/// Test the complete load-check-save-reload cycle
#[test]
fn test_check_file_cycle() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("feature_table.tsv");
    let output_path = dir.path().join("annotated.csv");

    common::regular_fixture().write_path(&input_path).unwrap();
    let text = fs::read_to_string(&input_path).unwrap();
    assert!(text.starts_with("row ID\tGNPS_LIB_IonMode\t"));

    let input = FeatureTable::from_path(&input_path).unwrap();
    assert_eq!(input.len(), 13);
    assert_eq!(input.headers().len(), 24);

    let report = check_matching_annotations(&input, &CheckParams::default()).unwrap();
    report.annotations.write_path(&output_path).unwrap();

    let reloaded = FeatureTable::from_path(&output_path).unwrap();
    assert_eq!(reloaded.len(), 5);
    assert_eq!(reloaded.headers(), report.annotations.headers());
    // Unknown verdicts are written as empty cells and read back as missing
    assert_eq!(
        reloaded.column_text(columns::MATCH_SUBCLASS).unwrap(),
        vec![Some("yes"), Some("yes"), Some("yes"), Some("no"), None]
    );

    let rerun = check_matching_annotations(&reloaded, &CheckParams::default()).unwrap();
    assert_eq!(rerun.usable_pairs(), 5);
    assert_eq!(rerun.class_table, report.class_table);
    assert_eq!(rerun.matching_table, report.matching_table);
}

#[test]
fn test_pandas_style_missing_values() {
    let csv = "\
GNPS_LIB_INCHI,SIR_MF_Zod_molecularFormula,SIR_MF_Zod_ZodiacScore
InChI=1S/C6H6/c1-2-4-6-5-3-1/h1-6H,C6H6,0.9
NaN,C6H6,nan
InChI=1S/C6H6/c1-2-4-6-5-3-1/h1-6H,,
";
    let table = FeatureTable::from_reader(csv.as_bytes(), Delimiter::Comma).unwrap();

    assert_eq!(
        table.column_text("GNPS_LIB_INCHI").unwrap()[1],
        None
    );
    assert_eq!(
        table.column_text("SIR_MF_Zod_molecularFormula").unwrap(),
        vec![Some("C6H6"), Some("C6H6"), None]
    );
    assert_eq!(
        table.column_text("SIR_MF_Zod_ZodiacScore").unwrap(),
        vec![Some("0.9"), None, None]
    );
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = FeatureTable::from_path(dir.path().join("missing.tsv"));
    assert!(result.is_err());
}
