//! Dataset loader for CSV files

use std::path::Path;

use polars::prelude::*;

use super::error::AnalysisError;

/// Load a CSV file into a DataFrame.
///
/// `infer_schema_length` is the number of rows used for dtype inference;
/// 0 means a full table scan. A bounded read that hits a value the
/// inferred dtype cannot hold is retried with a full scan, so a late
/// decimal widens the column to float and a late text cell makes it a
/// string column.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame, AnalysisError> {
    if !path.is_file() {
        return Err(AnalysisError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = if infer_schema_length == 0 {
        read_csv(path, None)
    } else {
        read_csv(path, Some(infer_schema_length)).or_else(|e| {
            log::warn!(
                "Schema inferred from the first {} rows of {} did not fit ({}); rescanning the whole file",
                infer_schema_length,
                path.display(),
                e
            );
            read_csv(path, None)
        })
    }
    .map_err(|e| parse_error(path, e))?;

    log::debug!(
        "Parsed {}: {} rows x {} columns",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(df)
}

fn read_csv(path: &Path, infer_schema_length: Option<usize>) -> PolarsResult<DataFrame> {
    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(infer_schema_length)
        .finish()
        .and_then(|lf| lf.collect())
}

/// Read only the header of a CSV file.
pub fn get_column_names(path: &Path) -> Result<Vec<String>, AnalysisError> {
    if !path.is_file() {
        return Err(AnalysisError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let schema = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .and_then(|mut lf| lf.collect_schema())
        .map_err(|e| parse_error(path, e))?;

    Ok(schema.iter_names().map(|s| s.to_string()).collect())
}

fn parse_error(path: &Path, err: PolarsError) -> AnalysisError {
    AnalysisError::Parse {
        path: path.to_path_buf(),
        detail: err.to_string(),
    }
}
