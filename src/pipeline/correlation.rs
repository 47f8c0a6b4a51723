//! Pearson correlation matrix over the cleaned numeric columns

use faer::Mat;
use rayon::prelude::*;

use super::cleaner::{CleanedTable, NumericColumn};

/// Symmetric matrix of Pearson coefficients.
///
/// `get(i, j) == get(j, i)` exactly. The diagonal is 1.0 for columns with
/// nonzero variance. Undefined coefficients (constant column, fewer than two
/// complete observations) are NaN.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    /// Row-major, `columns.len()` squared entries
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Compute the matrix, choosing the dense path when no cell is missing.
    pub fn compute(table: &CleanedTable) -> Self {
        if table.has_missing() {
            log::debug!(
                "Computing pairwise-complete correlations for {} columns",
                table.width()
            );
            Self::compute_pairwise(table)
        } else {
            log::debug!(
                "Computing dense correlation matrix for {} columns",
                table.width()
            );
            Self::compute_dense(table)
        }
    }

    /// Matrix-based computation.
    ///
    /// 1. Standardise each column: z = (x - mean) / (std * sqrt(n))
    /// 2. R = Z^T * Z
    ///
    /// Columns with missing cells get NaN coefficients; use
    /// [`compute_pairwise`](Self::compute_pairwise) for those tables.
    pub fn compute_dense(table: &CleanedTable) -> Self {
        let columns = table.column_names();
        let n_cols = columns.len();
        let n_rows = table.height();

        let standardized: Vec<Option<Vec<f64>>> = table
            .columns()
            .par_iter()
            .map(|col| standardize(&col.values))
            .collect();

        let mut values = vec![f64::NAN; n_cols * n_cols];
        if n_cols == 0 {
            return Self { columns, values };
        }

        let mut z = Mat::<f64>::zeros(n_rows, n_cols);
        for (col_idx, col_data) in standardized.iter().enumerate() {
            if let Some(col_data) = col_data {
                for (row_idx, &val) in col_data.iter().enumerate() {
                    z[(row_idx, col_idx)] = val;
                }
            }
        }

        let corr = z.transpose() * &z;

        for i in 0..n_cols {
            if standardized[i].is_none() {
                continue;
            }
            values[i * n_cols + i] = 1.0;
            for j in (i + 1)..n_cols {
                if standardized[j].is_some() {
                    let c = corr[(i, j)].clamp(-1.0, 1.0);
                    values[i * n_cols + j] = c;
                    values[j * n_cols + i] = c;
                }
            }
        }

        Self { columns, values }
    }

    /// Pairwise computation using only rows where both columns are present.
    pub fn compute_pairwise(table: &CleanedTable) -> Self {
        let cols: &[NumericColumn] = table.columns();
        let n_cols = cols.len();

        // Upper triangle including the diagonal
        let pairs: Vec<(usize, usize)> = (0..n_cols)
            .flat_map(|i| (i..n_cols).map(move |j| (i, j)))
            .collect();

        let coefficients: Vec<(usize, usize, f64)> = pairs
            .par_iter()
            .map(|&(i, j)| (i, j, pearson_pairwise(&cols[i].values, &cols[j].values)))
            .collect();

        let mut values = vec![f64::NAN; n_cols * n_cols];
        for (i, j, c) in coefficients {
            let c = if i == j && !c.is_nan() { 1.0 } else { c };
            values[i * n_cols + j] = c;
            values[j * n_cols + i] = c;
        }

        Self {
            columns: table.column_names(),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Coefficient by position. Panics if out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.len() + j]
    }

    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.get(self.index_of(a)?, self.index_of(b)?))
    }

    /// One row of the matrix, paired with column names
    pub fn row(&self, name: &str) -> Option<Vec<(&str, f64)>> {
        let i = self.index_of(name)?;
        Some(
            self.columns
                .iter()
                .enumerate()
                .map(|(j, col)| (col.as_str(), self.get(i, j)))
                .collect(),
        )
    }

    /// The full matrix as nested rows
    pub fn rows(&self) -> Vec<Vec<f64>> {
        let n = self.len();
        (0..n)
            .map(|i| self.values[i * n..(i + 1) * n].to_vec())
            .collect()
    }
}

impl PartialEq for CorrelationMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}

/// Standardise a complete, non-constant column so that dot products of two
/// standardised columns are their Pearson coefficient.
fn standardize(values: &[Option<f64>]) -> Option<Vec<f64>> {
    let xs: Vec<f64> = values.iter().copied().collect::<Option<Vec<f64>>>()?;
    let n = xs.len();
    if n < 2 {
        return None;
    }

    let first = xs[0];
    if xs.iter().all(|&x| x == first) {
        return None;
    }

    let mean = xs.iter().sum::<f64>() / n as f64;
    let sum_sq_dev: f64 = xs.iter().map(|x| (x - mean) * (x - mean)).sum();
    let norm = sum_sq_dev.sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }

    Some(xs.iter().map(|x| (x - mean) / norm).collect())
}

/// Pearson correlation over pairwise-complete observations using Welford's
/// single-pass update. NaN when fewer than two observations or either side
/// has zero variance.
pub fn pearson_pairwise(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(x), Some(y)) = (*x, *y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 || var_x <= 0.0 || var_y <= 0.0 {
        return f64::NAN;
    }

    (cov_xy / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}
