//! Error types for loading, cleaning and ranking.
//!
//! `FileNotFound` and `Parse` are fatal to a load. `TargetColumnMissing` and
//! `InsufficientFeatures` are recoverable conditions that the caller reports
//! to the user instead of rendering a ranking.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input path does not resolve to a file.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but its tabular content could not be parsed.
    #[error("failed to parse {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },

    /// The target column is absent from the cleaned table.
    #[error("target column '{target}' not found. Available columns: {available:?}")]
    TargetColumnMissing {
        target: String,
        available: Vec<String>,
    },

    /// Only the target column survived cleaning.
    #[error("not enough numeric attributes to analyze against '{target}'")]
    InsufficientFeatures { target: String },
}
