//! Integration tests for loading the combined indicator CSV

use abode_data::{DataError, Dataset};
use approx::assert_relative_eq;
use rstest::rstest;
use std::path::PathBuf;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("abode-data-{}-{}.csv", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_combined_csv() {
    let path = write_fixture(
        "combined",
        "DATE,CSUSHPISA,POPTHM,UNRATE,MORTGAGE30US\n\
         2000-01-01,100.5,281000,4.0,8.21\n\
         2000-04-01,102.3,281600,3.8,8.32\n\
         2000-07-01,104.1,282200,4.0,8.15\n\
         2000-10-01,105.9,282800,,7.8\n",
    );

    let dataset = Dataset::from_csv(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(
        dataset.column_names(),
        ["CSUSHPISA", "POPTHM", "UNRATE", "MORTGAGE30US"]
    );
    assert_eq!(dataset.skipped_columns(), ["DATE"]);
    assert_eq!(dataset.height(), 4);

    let index = dataset.column("CSUSHPISA").unwrap();
    assert_relative_eq!(index[3], 105.9);

    let unrate = dataset.column("UNRATE").unwrap();
    assert!(unrate[3].is_nan());

    let (y, x) = dataset
        .complete_rows("CSUSHPISA", &["POPTHM", "UNRATE"])
        .unwrap();
    assert_eq!(y.len(), 3);
    assert_eq!(x.nrows(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("abode-data-does-not-exist.csv");
    assert!(matches!(Dataset::from_csv(path), Err(DataError::Io(_))));
}

#[test]
fn test_header_only_is_rejected() {
    let path = write_fixture("header-only", "CSUSHPISA,UNRATE\n");
    let result = Dataset::from_csv(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(
        result,
        Err(DataError::EmptyDataset(_) | DataError::Polars(_))
    ));
}

#[rstest]
#[case::unknown("HOUST")]
#[case::date_column("DATE")]
fn test_unknown_columns_are_rejected(#[case] column: &str) {
    let path = write_fixture(
        &format!("unknown-{column}"),
        "DATE,CSUSHPISA\n2000-01-01,100.0\n2000-04-01,101.0\n",
    );
    let dataset = Dataset::from_csv(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(matches!(
        dataset.column(column),
        Err(DataError::MissingColumn(name)) if name == column
    ));
}
