//! Data cleaning: target-missing rows, non-numeric columns, low-cardinality
//! code columns and out-of-range target values.

use std::collections::HashSet;

use polars::prelude::*;
use serde::Serialize;

use super::schema::infer_schema;

/// Default name of the body-fat-percentage column
pub const DEFAULT_TARGET: &str = "body_fat_pct";

/// Columns with fewer distinct values than this are treated as codes
pub const DEFAULT_MIN_DISTINCT_VALUES: usize = 10;

/// Continuous measurements kept even when a small sample has few distinct values
pub const DEFAULT_KEEP_COLUMNS: [&str; 3] = ["age", "height", "weight"];

/// Exclusive lower bound for plausible target values
pub const DEFAULT_TARGET_MIN: f64 = 0.0;

/// Exclusive upper bound for plausible target values
pub const DEFAULT_TARGET_MAX: f64 = 50.0;

/// Parameters for the cleaning pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningConfig {
    /// Column every correlation is measured against
    pub target: String,
    /// Distinct-value threshold; columns strictly below it are dropped
    pub min_distinct_values: usize,
    /// Allow-list exempt from the distinct-value filter
    pub keep_columns: Vec<String>,
    pub target_min: f64,
    pub target_max: f64,
    /// Rows used for CSV dtype inference (0 = full scan)
    pub infer_schema_length: usize,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            min_distinct_values: DEFAULT_MIN_DISTINCT_VALUES,
            keep_columns: DEFAULT_KEEP_COLUMNS.iter().map(|s| s.to_string()).collect(),
            target_min: DEFAULT_TARGET_MIN,
            target_max: DEFAULT_TARGET_MAX,
            infer_schema_length: 0,
        }
    }
}

impl CleaningConfig {
    /// Default configuration with a different target column
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    fn is_allow_listed(&self, name: &str) -> bool {
        self.keep_columns.iter().any(|k| k == name)
    }

    fn target_in_range(&self, value: f64) -> bool {
        value > self.target_min && value < self.target_max
    }
}

/// One surviving numeric attribute. Missing cells (null or NaN in the file) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a column without missing cells
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().map(|v| Some(*v)).collect())
    }

    /// Number of distinct values, counting "missing" as one value
    pub fn distinct_count(&self) -> usize {
        self.values
            .iter()
            .map(|v| v.map(canonical_bits))
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn has_missing(&self) -> bool {
        self.values.iter().any(Option::is_none)
    }
}

// 0.0 and -0.0 are the same value
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

/// A column dropped by the distinct-value filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedColumn {
    pub name: String,
    pub distinct_values: usize,
}

/// What the cleaning pass removed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleaningReport {
    pub raw_rows: usize,
    pub raw_columns: usize,
    pub rows_missing_target: usize,
    pub rows_out_of_range: usize,
    pub non_numeric_columns: Vec<String>,
    pub low_cardinality_columns: Vec<DroppedColumn>,
}

/// The cleaned, all-numeric table used for analysis.
///
/// Immutable once built; every column has `height()` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedTable {
    target: String,
    columns: Vec<NumericColumn>,
    height: usize,
    report: CleaningReport,
}

impl CleanedTable {
    /// Assemble a table directly from columns of equal length.
    pub fn new(target: impl Into<String>, columns: Vec<NumericColumn>) -> Self {
        let height = columns.first().map(|c| c.values.len()).unwrap_or(0);
        debug_assert!(
            columns.iter().all(|c| c.values.len() == height),
            "all columns must have the same length"
        );
        Self {
            target: target.into(),
            columns,
            height,
            report: CleaningReport::default(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn has_target(&self) -> bool {
        self.column(&self.target).is_some()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn columns(&self) -> &[NumericColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn report(&self) -> &CleaningReport {
        &self.report
    }

    /// True if any cell of any column is missing
    pub fn has_missing(&self) -> bool {
        self.columns.iter().any(NumericColumn::has_missing)
    }

    /// `(x, y)` pairs for rows where both columns have a value
    pub fn paired_values(&self, x: &str, y: &str) -> Option<Vec<(f64, f64)>> {
        let xs = self.column(x)?;
        let ys = self.column(y)?;
        Some(
            xs.values
                .iter()
                .zip(ys.values.iter())
                .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
                .collect(),
        )
    }

    /// First `n` rows, in column order
    pub fn head(&self, n: usize) -> Vec<Vec<Option<f64>>> {
        (0..self.height.min(n))
            .map(|row| self.columns.iter().map(|c| c.values[row]).collect())
            .collect()
    }
}

/// Clean a raw DataFrame into a [`CleanedTable`].
///
/// Steps, in order:
/// 1. drop rows whose target value is missing
/// 2. keep numeric columns only
/// 3. drop columns with fewer than `min_distinct_values` distinct values,
///    except allow-listed columns and the target itself
/// 4. keep rows whose target lies strictly inside `(target_min, target_max)`
///
/// If the target is absent or non-numeric, steps 1 and 4 are skipped and the
/// table is returned without it; ranking reports the missing target.
pub fn clean(df: &DataFrame, config: &CleaningConfig) -> PolarsResult<CleanedTable> {
    let schema = infer_schema(df);

    let mut report = CleaningReport {
        raw_rows: df.height(),
        raw_columns: schema.len(),
        non_numeric_columns: schema
            .iter()
            .filter(|c| !c.is_numeric())
            .map(|c| c.name.clone())
            .collect(),
        ..Default::default()
    };

    let mut columns = Vec::with_capacity(schema.len());
    for entry in schema.iter().filter(|c| c.is_numeric()) {
        let values = numeric_values(df.column(&entry.name)?)?;
        columns.push(NumericColumn::new(entry.name.clone(), values));
    }

    let mut height = df.height();

    match columns.iter().find(|c| c.name == config.target) {
        Some(target) => {
            let keep: Vec<bool> = target.values.iter().map(Option::is_some).collect();
            report.rows_missing_target = retain_rows(&mut columns, &keep);
            height -= report.rows_missing_target;
        }
        None if schema.iter().any(|c| c.name == config.target) => {
            log::warn!("Target column '{}' is not numeric", config.target);
        }
        None => {
            log::warn!("Target column '{}' not found in header", config.target);
        }
    }

    let mut kept = Vec::with_capacity(columns.len());
    for column in columns {
        let distinct_values = column.distinct_count();
        let exempt = column.name == config.target || config.is_allow_listed(&column.name);
        if distinct_values < config.min_distinct_values && !exempt {
            log::debug!(
                "Dropping '{}': {} distinct value(s)",
                column.name,
                distinct_values
            );
            report.low_cardinality_columns.push(DroppedColumn {
                name: column.name,
                distinct_values,
            });
        } else {
            kept.push(column);
        }
    }

    if let Some(target) = kept.iter().find(|c| c.name == config.target) {
        let keep: Vec<bool> = target
            .values
            .iter()
            .map(|v| v.is_some_and(|x| config.target_in_range(x)))
            .collect();
        report.rows_out_of_range = retain_rows(&mut kept, &keep);
        height -= report.rows_out_of_range;
    }

    log::info!(
        "Cleaned table: {} of {} rows, {} numeric column(s)",
        height,
        report.raw_rows,
        kept.len()
    );

    Ok(CleanedTable {
        target: config.target.clone(),
        columns: kept,
        height,
        report,
    })
}

/// Cast a numeric column to f64, mapping NaN to missing.
fn numeric_values(col: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let cast = col.cast(&DataType::Float64)?;
    let values = cast
        .f64()?
        .iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect();
    Ok(values)
}

/// Keep rows where `keep` is true in every column. Returns the number of rows removed.
fn retain_rows(columns: &mut [NumericColumn], keep: &[bool]) -> usize {
    for column in columns.iter_mut() {
        let mut mask = keep.iter();
        column.values.retain(|_| mask.next().copied().unwrap_or(false));
    }
    keep.iter().filter(|k| !**k).count()
}
