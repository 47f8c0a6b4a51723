//! Column kind inference
//!
//! Runs before any filtering so that the numeric/non-numeric decision for
//! every raw column can be inspected on its own.

use polars::prelude::*;
use serde::Serialize;

/// Whether a column can take part in a correlation computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Numeric,
    NonNumeric,
}

/// Inferred schema entry for one raw column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSchema {
    pub name: String,
    /// Polars dtype as displayed, e.g. "i64" or "str"
    pub dtype: String,
    pub kind: ColumnKind,
}

impl ColumnSchema {
    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}

/// Classify a polars dtype. Booleans are not numeric.
pub fn classify_dtype(dtype: &DataType) -> ColumnKind {
    if dtype.is_primitive_numeric() {
        ColumnKind::Numeric
    } else {
        ColumnKind::NonNumeric
    }
}

/// Infer the kind of every column, in header order.
pub fn infer_schema(df: &DataFrame) -> Vec<ColumnSchema> {
    df.get_columns()
        .iter()
        .map(|col| ColumnSchema {
            name: col.name().to_string(),
            dtype: col.dtype().to_string(),
            kind: classify_dtype(col.dtype()),
        })
        .collect()
}
