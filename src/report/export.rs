//! JSON export of a correlation analysis

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{
    CleanedTable, CleaningConfig, CleaningReport, CorrelationAnalysis, RankedFeature,
    ScatterSeries,
};

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct AnalysisMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    pub fitcorr_version: String,
    pub input_file: String,
    pub target_column: String,
    pub min_distinct_values: usize,
    pub keep_columns: Vec<String>,
    /// Exclusive (min, max) bounds applied to the target
    pub target_range: (f64, f64),
}

/// Headline result
#[derive(Serialize)]
pub struct StrongestCorrelate {
    pub name: String,
    pub coefficient: f64,
}

/// Correlation matrix with undefined entries as `null`
#[derive(Serialize)]
pub struct MatrixExport {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// Complete analysis export
#[derive(Serialize)]
pub struct AnalysisExport<'a> {
    pub metadata: AnalysisMetadata,
    pub cleaning: &'a CleaningReport,
    pub rows: usize,
    pub strongest: Option<StrongestCorrelate>,
    pub ranking: &'a [RankedFeature],
    pub matrix: MatrixExport,
    pub scatter: &'a ScatterSeries,
}

/// Assemble the export structure
pub fn build_export<'a>(
    input_file: &Path,
    config: &CleaningConfig,
    table: &'a CleanedTable,
    analysis: &'a CorrelationAnalysis,
) -> AnalysisExport<'a> {
    AnalysisExport {
        metadata: AnalysisMetadata {
            timestamp: Utc::now().to_rfc3339(),
            fitcorr_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            target_column: config.target.clone(),
            min_distinct_values: config.min_distinct_values,
            keep_columns: config.keep_columns.clone(),
            target_range: (config.target_min, config.target_max),
        },
        cleaning: table.report(),
        rows: analysis.rows,
        strongest: analysis
            .strongest()
            .map(|(name, coefficient)| StrongestCorrelate {
                name: name.to_string(),
                coefficient,
            }),
        ranking: &analysis.ranking.entries,
        matrix: MatrixExport {
            columns: analysis.matrix.columns().to_vec(),
            values: analysis
                .matrix
                .rows()
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|v| if v.is_nan() { None } else { Some(v) })
                        .collect()
                })
                .collect(),
        },
        scatter: &analysis.scatter,
    }
}

/// Export the analysis to a pretty-printed JSON file
pub fn export_analysis(
    output_path: &Path,
    input_file: &Path,
    config: &CleaningConfig,
    table: &CleanedTable,
    analysis: &CorrelationAnalysis,
) -> Result<()> {
    let export = build_export(input_file, config, table, analysis);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize correlation analysis to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write correlation analysis to {}",
            output_path.display()
        )
    })?;

    log::info!("Exported analysis to {}", output_path.display());

    Ok(())
}
