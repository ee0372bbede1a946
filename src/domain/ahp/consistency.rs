//! Consistency Checker - Consistency Index and Ratio against the Random Index table.

use serde::{Deserialize, Serialize};

use super::Priorities;

/// Saaty's Random Index for matrix orders 1 through 11.
///
/// Orders above 11 have no entry; their consistency ratio is undecidable.
pub const RANDOM_INDEX: [f64; 11] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51,
];

/// Judgment matrices with a consistency ratio below this are accepted.
pub const CONSISTENCY_RATIO_THRESHOLD: f64 = 0.10;

/// How a consistency ratio should be read by whoever presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyVerdict {
    /// CR below the threshold.
    Consistent,
    /// CR at or above the threshold; the judgments should be revised.
    Inconsistent,
    /// No Random Index for this order, or no matrix to check.
    Undecidable,
    /// Some rows had zero weight, so λmax and CR are low-confidence.
    Degenerate,
}

impl ConsistencyVerdict {
    /// Returns the display label for this verdict.
    pub fn label(&self) -> &'static str {
        match self {
            ConsistencyVerdict::Consistent => "consistent",
            ConsistencyVerdict::Inconsistent => "inconsistent, revise judgments",
            ConsistencyVerdict::Undecidable => "undecidable",
            ConsistencyVerdict::Degenerate => "degenerate, low confidence",
        }
    }
}

/// Consistency figures for one judgment matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyResult {
    pub lambda_max: f64,
    pub ci: f64,
    /// NaN when undecidable.
    pub cr: f64,
    pub verdict: ConsistencyVerdict,
}

impl ConsistencyResult {
    /// Result recorded for a criterion whose alternative matrix is missing
    /// or malformed.
    pub fn undecidable() -> Self {
        Self {
            lambda_max: f64::NAN,
            ci: f64::NAN,
            cr: f64::NAN,
            verdict: ConsistencyVerdict::Undecidable,
        }
    }

    /// Returns true only for a clean, below-threshold CR.
    pub fn is_acceptable(&self) -> bool {
        self.verdict == ConsistencyVerdict::Consistent
    }
}

/// Consistency calculations.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Random Index for a matrix of order `n`, if tabulated.
    pub fn random_index(n: usize) -> Option<f64> {
        n.checked_sub(1).and_then(|idx| RANDOM_INDEX.get(idx).copied())
    }

    /// Consistency Index: `(λmax - n) / (n - 1)`, or 0 for `n <= 1`.
    pub fn consistency_index(lambda_max: f64, n: usize) -> f64 {
        if n <= 1 {
            return 0.0;
        }
        (lambda_max - n as f64) / (n as f64 - 1.0)
    }

    /// Consistency Ratio: `CI / RI[n]`.
    ///
    /// # Edge Cases
    /// - `n <= 1`: Returns 0
    /// - RI undefined (n > 11) or zero (n = 2): Returns NaN
    pub fn consistency_ratio(ci: f64, n: usize) -> f64 {
        if n <= 1 {
            return 0.0;
        }
        match Self::random_index(n) {
            Some(ri) if ri != 0.0 => ci / ri,
            _ => f64::NAN,
        }
    }

    /// Reads a consistency ratio. A NaN ratio is undecidable even when the
    /// priorities are degenerate.
    pub fn verdict(cr: f64, degenerate: bool) -> ConsistencyVerdict {
        if cr.is_nan() {
            ConsistencyVerdict::Undecidable
        } else if degenerate {
            ConsistencyVerdict::Degenerate
        } else if cr < CONSISTENCY_RATIO_THRESHOLD {
            ConsistencyVerdict::Consistent
        } else {
            ConsistencyVerdict::Inconsistent
        }
    }

    /// Computes CI, CR and the verdict for priorities of an order-`n` matrix.
    pub fn check(priorities: &Priorities, n: usize) -> ConsistencyResult {
        let ci = Self::consistency_index(priorities.lambda_max, n);
        let cr = Self::consistency_ratio(ci, n);

        ConsistencyResult {
            lambda_max: priorities.lambda_max,
            ci,
            cr,
            verdict: Self::verdict(cr, priorities.is_degenerate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{JudgmentMatrix, PriorityEngine, WeightVector};

    #[test]
    fn random_index_table_lookup() {
        assert_eq!(ConsistencyChecker::random_index(0), None);
        assert_eq!(ConsistencyChecker::random_index(1), Some(0.0));
        assert_eq!(ConsistencyChecker::random_index(3), Some(0.58));
        assert_eq!(ConsistencyChecker::random_index(11), Some(1.51));
        assert_eq!(ConsistencyChecker::random_index(12), None);
    }

    #[test]
    fn ci_is_zero_for_trivial_orders() {
        assert_eq!(ConsistencyChecker::consistency_index(7.0, 0), 0.0);
        assert_eq!(ConsistencyChecker::consistency_index(7.0, 1), 0.0);
    }

    #[test]
    fn ci_formula() {
        let ci = ConsistencyChecker::consistency_index(5.2, 5);
        assert!((ci - 0.05).abs() < 1e-12);
    }

    #[test]
    fn cr_formula() {
        let cr = ConsistencyChecker::consistency_ratio(0.058, 3);
        assert!((cr - 0.1).abs() < 1e-12);
    }

    #[test]
    fn cr_is_zero_for_trivial_orders() {
        assert_eq!(ConsistencyChecker::consistency_ratio(0.3, 1), 0.0);
    }

    #[test]
    fn cr_is_nan_when_random_index_is_zero_or_missing() {
        assert!(ConsistencyChecker::consistency_ratio(0.0, 2).is_nan());
        assert!(ConsistencyChecker::consistency_ratio(0.1, 12).is_nan());
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(
            ConsistencyChecker::verdict(0.099, false),
            ConsistencyVerdict::Consistent
        );
        assert_eq!(
            ConsistencyChecker::verdict(0.10, false),
            ConsistencyVerdict::Inconsistent
        );
        assert_eq!(
            ConsistencyChecker::verdict(f64::NAN, false),
            ConsistencyVerdict::Undecidable
        );
    }

    #[test]
    fn degenerate_priorities_are_never_consistent() {
        assert_eq!(
            ConsistencyChecker::verdict(-0.5, true),
            ConsistencyVerdict::Degenerate
        );
    }

    #[test]
    fn perfectly_consistent_matrix_has_zero_cr() {
        let matrix = JudgmentMatrix::from_weights(&[0.5, 0.25, 0.15, 0.1]);
        let priorities = PriorityEngine::compute_weights(&matrix);

        let result = ConsistencyChecker::check(&priorities, 4);

        assert!((result.lambda_max - 4.0).abs() < 1e-9);
        assert!(result.ci.abs() < 1e-9);
        assert!(result.cr.abs() < 1e-9);
        assert!(result.is_acceptable());
    }

    #[test]
    fn cr_does_not_depend_on_weight_scale() {
        let matrix = JudgmentMatrix::from_rows(&[
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 4.0],
            vec![1.0 / 5.0, 1.0 / 4.0, 1.0],
        ])
        .unwrap();
        let priorities = PriorityEngine::compute_weights(&matrix);

        let rescaled = Priorities {
            weights: WeightVector::new(priorities.weights.iter().map(|w| w * 37.0).collect()),
            ..priorities.clone()
        };
        let lambda = PriorityEngine::principal_eigenvalue(&matrix, priorities.weights.as_slice());
        let lambda_rescaled =
            PriorityEngine::principal_eigenvalue(&matrix, rescaled.weights.as_slice());

        let cr = ConsistencyChecker::consistency_ratio(
            ConsistencyChecker::consistency_index(lambda, 3),
            3,
        );
        let cr_rescaled = ConsistencyChecker::consistency_ratio(
            ConsistencyChecker::consistency_index(lambda_rescaled, 3),
            3,
        );
        assert!((cr - cr_rescaled).abs() < 1e-12);
    }

    #[test]
    fn undecidable_result_serializes_nan_as_null() {
        let json = serde_json::to_value(ConsistencyResult::undecidable()).unwrap();
        assert!(json["cr"].is_null());
        assert_eq!(json["verdict"], "undecidable");
    }
}
