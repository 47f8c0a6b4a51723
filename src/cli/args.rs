//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::CleaningConfig;

/// fitcorr - Rank fitness measurements by correlation with body-fat percentage
#[derive(Parser, Debug)]
#[command(name = "fitcorr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path (header row required)
    #[arg(short, long, default_value = "fitness_data.csv")]
    pub input: PathBuf,

    /// Target column name (body-fat percentage)
    #[arg(short, long, default_value = "body_fat_pct")]
    pub target: String,

    /// Drop numeric columns with fewer distinct values than this
    /// (identifier and code columns such as sex or measurement round)
    #[arg(long, default_value = "10")]
    pub min_distinct: usize,

    /// Columns kept regardless of distinct-value count (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "age,height,weight")]
    pub keep_columns: Vec<String>,

    /// Exclusive lower bound for plausible target values
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub target_min: f64,

    /// Exclusive upper bound for plausible target values
    #[arg(long, default_value = "50", allow_negative_numbers = true)]
    pub target_max: f64,

    /// Number of ranked attributes to display
    #[arg(long, default_value = "10", value_parser = validate_top)]
    pub top: usize,

    /// Write the full analysis (ranking, matrix, scatter points) to this JSON file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Skip the terminal heatmap
    #[arg(long, default_value = "false")]
    pub no_heatmap: bool,

    /// Number of rows to use for schema inference.
    /// Use 0 for full table scan.
    #[arg(long, default_value = "0")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Cleaning parameters from the parsed flags.
    pub fn cleaning_config(&self) -> Result<CleaningConfig, String> {
        validate_bounds(self.target_min, self.target_max)?;
        Ok(CleaningConfig {
            target: self.target.clone(),
            min_distinct_values: self.min_distinct,
            keep_columns: self
                .keep_columns
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            target_min: self.target_min,
            target_max: self.target_max,
            infer_schema_length: self.infer_schema_length,
        })
    }
}

/// Validator for the top-N parameter
fn validate_top(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid count", s))?;

    if value == 0 {
        Err("top must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

fn validate_bounds(min: f64, max: f64) -> Result<(), String> {
    if !min.is_finite() || !max.is_finite() {
        return Err(format!(
            "target bounds must be finite numbers, got ({}, {})",
            min, max
        ));
    }
    if min >= max {
        return Err(format!(
            "target-min must be less than target-max, got ({}, {})",
            min, max
        ));
    }
    Ok(())
}
