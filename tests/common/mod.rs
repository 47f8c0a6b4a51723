//! Shared test utilities and fixture generators

#![allow(dead_code)]

use fitcorr::pipeline::{CleanedTable, NumericColumn};
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a fitness DataFrame with known cleaning outcomes
///
/// 15 rows, of which:
/// - row 13 has no body-fat value (dropped first)
/// - rows 12 and 14 have body fat 0.0 and 55.0 (outside (0, 50), dropped last)
///
/// Columns:
/// - `measurement_round`: constant code column (1 distinct value, dropped)
/// - `name`: string column (non-numeric, dropped)
/// - `sex_code`: 2 distinct values (dropped)
/// - `age`: 3 distinct values (kept, allow-listed)
/// - `weight`: rises with body fat, not exactly linear
/// - `grip`: weakly related noise
/// - `waist`: exactly 1.5 * body_fat + 50 on the 12 surviving rows
/// - `body_fat_pct`: the target
pub fn create_fitness_dataframe() -> DataFrame {
    df! {
        "measurement_round" => [1i64; 15],
        "name" => ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o"],
        "sex_code" => [1i64, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1],
        "age" => [20i64, 20, 30, 30, 40, 40, 20, 30, 40, 20, 30, 40, 20, 30, 40],
        "weight" => [55.0f64, 60.0, 62.5, 70.0, 72.0, 80.0, 85.0, 90.0, 95.0, 100.0, 58.0, 66.0, 64.0, 75.0, 110.0],
        "grip" => [30.0f64, 32.0, 28.0, 35.0, 27.0, 33.0, 29.0, 36.0, 26.0, 31.0, 34.0, 25.0, 30.5, 31.5, 37.0],
        "waist" => [68.0f64, 71.0, 73.25, 77.0, 80.0, 86.0, 89.0, 93.5, 96.5, 101.0, 69.5, 74.75, 74.0, 82.0, 105.0],
        "body_fat_pct" => [Some(12.0f64), Some(14.0), Some(15.5), Some(18.0), Some(20.0), Some(24.0), Some(26.0),
                           Some(29.0), Some(31.0), Some(34.0), Some(13.0), Some(16.5), Some(0.0), None, Some(55.0)],
    }
    .unwrap()
}

/// Body-fat values that survive cleaning of [`create_fitness_dataframe`], in order
pub const SURVIVING_BODY_FAT: [f64; 12] = [
    12.0, 14.0, 15.5, 18.0, 20.0, 24.0, 26.0, 29.0, 31.0, 34.0, 13.0, 16.5,
];

/// A cleaned table with known correlation patterns against `target`
pub fn create_correlation_table() -> CleanedTable {
    CleanedTable::new(
        "target",
        vec![
            NumericColumn::from_values("a", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]),
            // Perfectly inverse to target
            NumericColumn::from_values("c", &[10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]),
            // Weak, unrelated
            NumericColumn::from_values("d", &[5.0, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0]),
            NumericColumn::from_values(
                "target",
                &[1.5, 2.5, 3.5, 4.0, 5.5, 6.0, 7.5, 8.0, 9.5, 10.0],
            ),
        ],
    )
}

/// Write a DataFrame to a CSV file in a fresh temporary directory
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Write raw CSV text to a file in a fresh temporary directory
pub fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("raw.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Values of a cleaned column, asserting none are missing
pub fn complete_values(table: &CleanedTable, name: &str) -> Vec<f64> {
    table
        .column(name)
        .unwrap_or_else(|| panic!("Missing expected column: '{}'", name))
        .values
        .iter()
        .map(|v| v.expect("unexpected missing cell"))
        .collect()
}

/// Assert that a table has exactly these columns, in order
pub fn assert_columns(table: &CleanedTable, expected: &[&str]) {
    let actual = table.column_names();
    assert_eq!(
        actual, expected,
        "Column mismatch: expected {:?}, got {:?}",
        expected, actual
    );
}
