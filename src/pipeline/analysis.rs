//! Correlation analysis of a cleaned table against its target column

use serde::Serialize;

use super::cleaner::CleanedTable;
use super::correlation::CorrelationMatrix;
use super::error::AnalysisError;
use super::ranking::{rank_against_target, Ranking};

/// Scatter-plot data: the strongest correlate on x, the target on y
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub x_column: String,
    pub y_column: String,
    pub points: Vec<(f64, f64)>,
}

/// Everything the presentation layer consumes for one load
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationAnalysis {
    pub rows: usize,
    pub matrix: CorrelationMatrix,
    pub ranking: Ranking,
    pub scatter: ScatterSeries,
}

impl CorrelationAnalysis {
    /// Name and signed coefficient of the strongest correlate
    pub fn strongest(&self) -> Option<(&str, f64)> {
        self.ranking
            .strongest()
            .map(|top| (top.name.as_str(), top.coefficient))
    }
}

/// Compute the matrix, rank against `table.target()` and collect scatter points.
pub fn analyze(table: &CleanedTable) -> Result<CorrelationAnalysis, AnalysisError> {
    let target = table.target();
    let matrix = CorrelationMatrix::compute(table);
    let ranking = rank_against_target(&matrix, target)?;

    let (x_column, coefficient) = ranking
        .strongest()
        .map(|top| (top.name.clone(), top.coefficient))
        .ok_or_else(|| AnalysisError::InsufficientFeatures {
            target: target.to_string(),
        })?;
    let points = table.paired_values(&x_column, target).unwrap_or_default();

    log::info!(
        "Strongest correlate of '{}': '{}' (r = {:.3})",
        target,
        x_column,
        coefficient
    );

    Ok(CorrelationAnalysis {
        rows: table.height(),
        matrix,
        ranking,
        scatter: ScatterSeries {
            x_column,
            y_column: target.to_string(),
            points,
        },
    })
}
