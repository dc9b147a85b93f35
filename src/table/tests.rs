use super::*;

const SAMPLE_TABLE: &str = "row ID\tGNPS_LIB_INCHI\tSIR_MF_Zod_molecularFormula\tSIR_MF_Zod_ZodiacScore
1\tInChI=1S/C10H15N2O/c1-2\tC10H14N2\t0.95
2\t\tC6H12O6\tNaN
3\tInChI=1S/C5H9NO2/c7-5\t\tnot-a-number";

fn sample() -> FeatureTable {
    FeatureTable::from_reader(SAMPLE_TABLE.as_bytes(), Delimiter::Tab).unwrap()
}

#[test]
fn test_tsv_parsing() {
    let table = sample();

    assert_eq!(table.len(), 3);
    assert_eq!(table.headers().len(), 4);
    assert_eq!(table.keys(), vec![0, 1, 2]);

    let inchi = table.column_index("GNPS_LIB_INCHI").unwrap();
    assert_eq!(table.rows()[0].text(inchi), Some("InChI=1S/C10H15N2O/c1-2"));
    assert_eq!(table.rows()[1].text(inchi), None);
}

#[test]
fn test_missing_markers_and_numbers() {
    let table = sample();
    let score = table.column_index("SIR_MF_Zod_ZodiacScore").unwrap();

    assert_eq!(table.rows()[0].number(score), Some(0.95));
    // "NaN" is normalised away on load
    assert!(!table.rows()[1].is_present(score));
    // unparsable text is present but not numeric
    assert!(table.rows()[2].is_present(score));
    assert_eq!(table.rows()[2].number(score), None);
}

#[test]
fn test_pandas_missing_spellings() {
    let markers = ["NULL", "n/a", "#N/A", "<NA>", "-nan", "-NaN", "1.#QNAN", " null "];
    let rows = markers.iter().map(|m| vec![Some(*m), Some("C6H6")]).collect();
    let table = FeatureTable::from_rows(&["SIR_MF_Zod_molecularFormula", "control"], rows).unwrap();

    for row in table.rows() {
        assert!(!row.is_present(0), "{:?} should be missing", row.cells());
        assert_eq!(row.text(1), Some("C6H6"));
    }
}

#[test]
fn test_missing_column() {
    let table = sample();
    match table.column_index("CAN_superclass") {
        Err(TableError::MissingColumn(name)) => assert_eq!(name, "CAN_superclass"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_duplicate_headers_rejected() {
    let result = FeatureTable::new(&["a", "b", "a"]);
    assert!(matches!(result, Err(TableError::InvalidFormat(_))));
}

#[test]
fn test_retain_keeps_order_and_keys() {
    let mut table = sample();
    let formula = table.column_index("SIR_MF_Zod_molecularFormula").unwrap();

    let removed = table.retain(|row| row.is_present(formula));

    assert_eq!(removed, 1);
    assert_eq!(table.keys(), vec![0, 1]);
}

#[test]
fn test_append_column_replaces_existing() {
    let mut table = FeatureTable::from_rows(&["id"], vec![vec![Some("a")], vec![Some("b")]]).unwrap();

    table
        .append_column("flag", vec![Some("yes".to_string()), None])
        .unwrap();
    assert_eq!(table.headers(), &["id".to_string(), "flag".to_string()]);

    table
        .append_column("flag", vec![Some("no".to_string()), Some("no".to_string())])
        .unwrap();
    assert_eq!(table.headers().len(), 2);
    assert_eq!(table.column_text("flag").unwrap(), vec![Some("no"), Some("no")]);
}

#[test]
fn test_append_column_length_mismatch() {
    let mut table = FeatureTable::from_rows(&["id"], vec![vec![Some("a")]]).unwrap();
    let result = table.append_column("flag", vec![]);
    assert!(matches!(result, Err(TableError::InvalidFormat(_))));
}

#[test]
fn test_short_rows_are_padded() {
    let table = FeatureTable::from_reader("a,b,c\n1\n".as_bytes(), Delimiter::Comma).unwrap();
    assert_eq!(table.rows()[0].cells(), &[Some("1".to_string()), None, None]);
}

#[test]
fn test_select() {
    let table = sample();
    let subset = table.select(&[2, 0]);
    assert_eq!(subset.keys(), vec![2, 0]);
    assert_eq!(subset.headers(), table.headers());
}

#[test]
fn test_write_roundtrip() {
    let table = sample();
    let mut buffer = Vec::new();
    table.write_to(&mut buffer, Delimiter::Comma).unwrap();

    let restored = FeatureTable::from_reader(buffer.as_slice(), Delimiter::Comma).unwrap();
    assert_eq!(restored.headers(), table.headers());
    assert_eq!(restored.len(), 3);
    assert_eq!(
        restored.column_text("SIR_MF_Zod_molecularFormula").unwrap(),
        vec![Some("C10H14N2"), Some("C6H12O6"), None]
    );
}

#[test]
fn test_delimiter_from_path() {
    assert_eq!(Delimiter::from_path("features.tsv"), Delimiter::Tab);
    assert_eq!(Delimiter::from_path("features.TXT"), Delimiter::Tab);
    assert_eq!(Delimiter::from_path("features.csv"), Delimiter::Comma);
    assert_eq!(Delimiter::from_path("features"), Delimiter::Comma);
}
