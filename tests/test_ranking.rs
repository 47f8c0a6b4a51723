//! Unit tests for target ranking and the full analysis

use fitcorr::pipeline::{
    analyze, clean, rank_against_target, AnalysisError, CleanedTable, CleaningConfig,
    CorrelationMatrix, NumericColumn,
};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_ranking_excludes_target() {
    let table = create_correlation_table();
    let matrix = CorrelationMatrix::compute(&table);

    let ranking = rank_against_target(&matrix, "target").unwrap();

    assert_eq!(ranking.len(), table.width() - 1);
    assert!(ranking.entries.iter().all(|e| e.name != "target"));
}

#[test]
fn test_ranking_sorted_by_absolute_coefficient() {
    let df = create_fitness_dataframe();
    let table = clean(&df, &CleaningConfig::default()).unwrap();
    let matrix = CorrelationMatrix::compute(&table);

    let ranking = rank_against_target(&matrix, "body_fat_pct").unwrap();

    for pair in ranking.entries.windows(2) {
        assert!(
            pair[0].abs_coefficient >= pair[1].abs_coefficient,
            "Ranking out of order: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_inverse_correlate_keeps_sign() {
    let table = CleanedTable::new(
        "target",
        vec![
            NumericColumn::from_values("weak", &[1.0, 3.0, 2.0, 5.0, 4.0]),
            NumericColumn::from_values("inverse", &[10.0, 8.0, 6.0, 4.0, 2.0]),
            NumericColumn::from_values("target", &[1.0, 2.0, 3.0, 4.0, 5.0]),
        ],
    );
    let matrix = CorrelationMatrix::compute(&table);

    let ranking = rank_against_target(&matrix, "target").unwrap();

    let top = ranking.strongest().unwrap();
    assert_eq!(top.name, "inverse");
    assert!(top.coefficient < -0.99);
    assert!((top.abs_coefficient - top.coefficient.abs()).abs() < 1e-15);
}

#[test]
fn test_ties_keep_table_order() {
    let table = CleanedTable::new(
        "target",
        vec![
            NumericColumn::from_values("second_copy", &[2.0, 4.0, 6.0, 8.0]),
            NumericColumn::from_values("first_copy", &[2.0, 4.0, 6.0, 8.0]),
            NumericColumn::from_values("target", &[1.0, 3.0, 2.0, 4.0]),
        ],
    );
    let matrix = CorrelationMatrix::compute(&table);

    let ranking = rank_against_target(&matrix, "target").unwrap();

    let names: Vec<&str> = ranking.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["second_copy", "first_copy"]);
}

#[test]
fn test_undefined_coefficients_sort_last() {
    let table = CleanedTable::new(
        "target",
        vec![
            NumericColumn::from_values("constant", &[7.0, 7.0, 7.0, 7.0]),
            NumericColumn::from_values("weak", &[1.0, 3.0, 2.0, 1.5]),
            NumericColumn::from_values("target", &[1.0, 2.0, 3.0, 4.0]),
        ],
    );
    let matrix = CorrelationMatrix::compute(&table);

    let ranking = rank_against_target(&matrix, "target").unwrap();

    assert_eq!(ranking.entries[0].name, "weak");
    assert_eq!(ranking.entries[1].name, "constant");
    assert!(ranking.entries[1].coefficient.is_nan());
}

#[test]
fn test_target_missing_lists_available_columns() {
    let table = create_correlation_table();
    let matrix = CorrelationMatrix::compute(&table);

    let err = rank_against_target(&matrix, "body_fat_pct").unwrap_err();

    match err {
        AnalysisError::TargetColumnMissing { target, available } => {
            assert_eq!(target, "body_fat_pct");
            assert_eq!(available, vec!["a", "c", "d", "target"]);
        }
        other => panic!("Expected TargetColumnMissing, got {:?}", other),
    }
}

#[test]
fn test_only_target_is_insufficient() {
    let table = CleanedTable::new(
        "target",
        vec![NumericColumn::from_values("target", &[1.0, 2.0, 3.0])],
    );
    let matrix = CorrelationMatrix::compute(&table);

    let err = rank_against_target(&matrix, "target").unwrap_err();

    assert!(matches!(err, AnalysisError::InsufficientFeatures { .. }));
}

#[test]
fn test_top_truncates() {
    let table = create_correlation_table();
    let matrix = CorrelationMatrix::compute(&table);
    let ranking = rank_against_target(&matrix, "target").unwrap();

    assert_eq!(ranking.top(2).len(), 2);
    assert_eq!(ranking.top(10).len(), 3);
}

#[test]
fn test_ranking_is_idempotent() {
    let table = create_correlation_table();

    let first = rank_against_target(&CorrelationMatrix::compute(&table), "target").unwrap();
    let second = rank_against_target(&CorrelationMatrix::compute(&table), "target").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_analyze_fitness_fixture() {
    let df = create_fitness_dataframe();
    let table = clean(&df, &CleaningConfig::default()).unwrap();

    let analysis = analyze(&table).unwrap();

    let (name, coefficient) = analysis.strongest().unwrap();
    assert_eq!(name, "waist");
    assert!(coefficient > 0.999);
    assert_eq!(analysis.rows, 12);
    assert_eq!(analysis.ranking.len(), 4);
    assert_eq!(analysis.scatter.x_column, "waist");
    assert_eq!(analysis.scatter.y_column, "body_fat_pct");
    assert_eq!(analysis.scatter.points.len(), 12);
}

#[test]
fn test_analyze_five_row_fixture_strongly_positive() {
    let df = df! {
        "body_fat_pct" => [15.0f64, 22.0, f64::NAN, 8.0, 60.0],
        "weight" => [60.0f64, 70.0, 65.0, 50.0, 90.0],
    }
    .unwrap();
    let table = clean(&df, &CleaningConfig::default()).unwrap();

    let analysis = analyze(&table).unwrap();

    let (name, coefficient) = analysis.strongest().unwrap();
    assert_eq!(name, "weight");
    assert!(coefficient > 0.9, "Expected strong positive, got {}", coefficient);
    assert_eq!(
        analysis.scatter.points,
        vec![(60.0, 15.0), (70.0, 22.0), (50.0, 8.0)]
    );
}

#[test]
fn test_analyze_without_target_column() {
    let df = df! {
        "weight" => [60.0f64, 70.0, 80.0],
        "height" => [160.0f64, 170.0, 180.0],
    }
    .unwrap();
    let table = clean(&df, &CleaningConfig::default()).unwrap();

    let err = analyze(&table).unwrap_err();

    assert!(matches!(err, AnalysisError::TargetColumnMissing { .. }));
}
