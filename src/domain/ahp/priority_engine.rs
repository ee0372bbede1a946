//! Priority Engine - weights and principal eigenvalue of one judgment matrix.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{JudgmentMatrix, WeightVector};

/// Priorities derived from one judgment matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priorities {
    pub weights: WeightVector,
    /// Estimate of the principal eigenvalue of the matrix.
    pub lambda_max: f64,
    /// Rows left out of the eigenvalue estimate because their weight is zero.
    pub excluded_rows: Vec<usize>,
}

impl Priorities {
    /// Priorities of the 0×0 matrix.
    pub fn empty() -> Self {
        Self {
            weights: WeightVector::default(),
            lambda_max: 0.0,
            excluded_rows: Vec::new(),
        }
    }

    /// Returns true when some row was excluded from the eigenvalue estimate.
    pub fn is_degenerate(&self) -> bool {
        !self.excluded_rows.is_empty()
    }
}

/// Normalized geometric-mean approximation of the principal eigenvector.
pub struct PriorityEngine;

impl PriorityEngine {
    /// Computes priority weights and the principal eigenvalue estimate.
    ///
    /// # Algorithm
    /// 1. `ln gm[i] = (1/n) Σ_j ln M[i][j]`
    /// 2. `w[i] = gm[i] / Σ gm`, evaluated as `exp(ln gm[i] - max ln gm)`
    ///    before normalizing so extreme judgments neither overflow nor underflow
    /// 3. `λmax = (1/n) Σ_i (M·w)[i] / w[i]`, skipping rows where `w[i] == 0`
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns empty weights and `λmax = 0`
    /// - A zero entry makes its row's weight exactly 0
    /// - All geometric means zero: Every weight is 0 and every row is excluded
    pub fn compute_weights(matrix: &JudgmentMatrix) -> Priorities {
        let n = matrix.order();
        if n == 0 {
            return Priorities::empty();
        }

        let weights = Self::normalized_weights(&Self::log_geometric_means(matrix));

        let (lambda_max, excluded_rows) = Self::estimate_eigenvalue(matrix, &weights);

        if !excluded_rows.is_empty() {
            warn!(
                order = n,
                excluded = ?excluded_rows,
                "Zero weight rows skipped in lambda_max estimate"
            );
        }

        Priorities {
            weights: WeightVector::new(weights),
            lambda_max,
            excluded_rows,
        }
    }

    /// Natural log of each row's geometric mean; `-inf` for rows holding a zero.
    pub fn log_geometric_means(matrix: &JudgmentMatrix) -> Vec<f64> {
        let n = matrix.order() as f64;
        matrix
            .rows()
            .map(|row| row.iter().map(|m| m.ln()).sum::<f64>() / n)
            .collect()
    }

    /// Geometric mean of each row. May overflow for extreme judgments; the
    /// weights themselves are computed from [`Self::log_geometric_means`].
    pub fn geometric_means(matrix: &JudgmentMatrix) -> Vec<f64> {
        Self::log_geometric_means(matrix)
            .into_iter()
            .map(f64::exp)
            .collect()
    }

    fn normalized_weights(log_means: &[f64]) -> Vec<f64> {
        let peak = log_means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if peak == f64::NEG_INFINITY {
            return vec![0.0; log_means.len()];
        }

        let scaled: Vec<f64> = log_means.iter().map(|l| (l - peak).exp()).collect();
        let total: f64 = scaled.iter().sum();
        scaled.iter().map(|v| v / total).collect()
    }

    /// Principal eigenvalue estimate for `matrix` given a weight vector.
    ///
    /// The estimate only depends on weight ratios, so any positive rescaling
    /// of `weights` yields the same value.
    pub fn principal_eigenvalue(matrix: &JudgmentMatrix, weights: &[f64]) -> f64 {
        Self::estimate_eigenvalue(matrix, weights).0
    }

    fn estimate_eigenvalue(matrix: &JudgmentMatrix, weights: &[f64]) -> (f64, Vec<usize>) {
        let n = matrix.order();
        if n == 0 {
            return (0.0, Vec::new());
        }

        let mut excluded = Vec::new();
        let mut ratio_sum = 0.0;

        for (i, row) in matrix.rows().enumerate() {
            let weight = weights.get(i).copied().unwrap_or(0.0);
            if weight == 0.0 {
                excluded.push(i);
                continue;
            }

            let weighted_row: f64 = row.iter().zip(weights).map(|(m, w)| m * w).sum();
            ratio_sum += weighted_row / weight;
        }

        (ratio_sum / n as f64, excluded)
    }
}
