//! Ranking of attributes by correlation with the target

use std::cmp::Ordering;

use serde::Serialize;

use super::correlation::CorrelationMatrix;
use super::error::AnalysisError;

/// One attribute's correlation with the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFeature {
    pub name: String,
    /// Signed Pearson coefficient (NaN if undefined)
    pub coefficient: f64,
    pub abs_coefficient: f64,
}

/// Attributes ordered by descending |coefficient| against the target.
///
/// Ties keep the column order of the cleaned table; undefined coefficients
/// sort last. Never empty when built by [`rank_against_target`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub target: String,
    pub entries: Vec<RankedFeature>,
}

impl Ranking {
    /// The attribute with the largest-magnitude coefficient
    pub fn strongest(&self) -> Option<&RankedFeature> {
        self.entries.first()
    }

    pub fn top(&self, n: usize) -> &[RankedFeature] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank every other column by its correlation with `target`.
///
/// Returns `TargetColumnMissing` if the target is not in the matrix and
/// `InsufficientFeatures` if it is the only column.
pub fn rank_against_target(
    matrix: &CorrelationMatrix,
    target: &str,
) -> Result<Ranking, AnalysisError> {
    let row = matrix
        .row(target)
        .ok_or_else(|| AnalysisError::TargetColumnMissing {
            target: target.to_string(),
            available: matrix.columns().to_vec(),
        })?;

    let mut entries: Vec<RankedFeature> = row
        .into_iter()
        .filter(|(name, _)| *name != target)
        .map(|(name, coefficient)| RankedFeature {
            name: name.to_string(),
            coefficient,
            abs_coefficient: coefficient.abs(),
        })
        .collect();

    if entries.is_empty() {
        return Err(AnalysisError::InsufficientFeatures {
            target: target.to_string(),
        });
    }

    // sort_by is stable, so equal magnitudes keep table order
    entries.sort_by(|a, b| compare_magnitude_desc(a.abs_coefficient, b.abs_coefficient));

    Ok(Ranking {
        target: target.to_string(),
        entries,
    })
}

fn compare_magnitude_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
