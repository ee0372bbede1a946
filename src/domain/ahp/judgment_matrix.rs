//! Judgment Matrix - square matrix of pairwise comparison ratios.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::AhpError;

/// A square matrix of pairwise relative-importance judgments, stored row-major.
///
/// Entries are conventionally drawn from the 1-9 Saaty scale and its
/// reciprocals, with a unit diagonal. The reciprocal property
/// `M[i][j] == 1 / M[j][i]` is expected but only checked on request via
/// [`JudgmentMatrix::reciprocal_violations`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgmentMatrix {
    order: usize,
    entries: Vec<f64>,
}

/// A position where the matrix breaks the reciprocal convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReciprocalViolation {
    pub row: usize,
    pub col: usize,
    /// `M[row][col]`.
    pub value: f64,
    /// `M[col][row]`; equal to `value` for diagonal violations.
    pub mirror: f64,
}

impl JudgmentMatrix {
    /// Reshapes a flat, row-major judgment array into an `order`×`order` matrix.
    ///
    /// # Errors
    /// Returns [`AhpError::Shape`] when `flat.len() != order * order`.
    pub fn reshape(flat: &[f64], order: usize) -> Result<Self, AhpError> {
        let expected = order.checked_mul(order).unwrap_or(usize::MAX);
        if flat.len() != expected {
            return Err(AhpError::Shape {
                order,
                expected,
                actual: flat.len(),
            });
        }

        Ok(Self {
            order,
            entries: flat.to_vec(),
        })
    }

    /// Builds a matrix from explicit rows. Every row must be as long as the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, AhpError> {
        let order = rows.len();
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();

        if rows.iter().any(|row| row.len() != order) {
            return Err(AhpError::Shape {
                order,
                expected: order * order,
                actual: flat.len(),
            });
        }

        Self::reshape(&flat, order)
    }

    /// The indifferent judgment: every entity equally important.
    pub fn uniform(order: usize) -> Self {
        Self {
            order,
            entries: vec![1.0; order * order],
        }
    }

    /// Builds the perfectly consistent matrix `M[i][j] = w[i] / w[j]`.
    ///
    /// Weights must be strictly positive.
    pub fn from_weights(weights: &[f64]) -> Self {
        let order = weights.len();
        let entries = weights
            .iter()
            .flat_map(|wi| weights.iter().map(move |wj| wi / wj))
            .collect();
        Self { order, entries }
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns true for the 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns the entry at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.order || col >= self.order {
            return None;
        }
        self.entries.get(row * self.order + col).copied()
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= order`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.entries[i * self.order..(i + 1) * self.order]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.order).map(move |i| self.row(i))
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    /// Flattens back to a row-major array; inverse of [`JudgmentMatrix::reshape`].
    pub fn flatten(&self) -> Vec<f64> {
        self.entries.clone()
    }

    /// Checks that every entry is finite and non-negative.
    ///
    /// Zero entries are allowed: they produce zero weights, which the
    /// priority engine reports as degenerate rather than rejecting.
    pub fn check_entries(&self) -> Result<(), AhpError> {
        for (idx, &value) in self.entries.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(AhpError::InvalidEntry {
                    row: idx / self.order,
                    col: idx % self.order,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Lists positions where the reciprocal convention does not hold.
    ///
    /// A diagonal entry violates when it differs from 1 by more than
    /// `tolerance`; an off-diagonal pair `(i, j)`, `i < j`, violates when
    /// `M[i][j] * M[j][i]` differs from 1 by more than `tolerance`.
    pub fn reciprocal_violations(&self, tolerance: f64) -> Vec<ReciprocalViolation> {
        let mut violations = Vec::new();

        for i in 0..self.order {
            let diagonal = self.entries[i * self.order + i];
            if (diagonal - 1.0).abs() > tolerance {
                violations.push(ReciprocalViolation {
                    row: i,
                    col: i,
                    value: diagonal,
                    mirror: diagonal,
                });
            }

            for j in (i + 1)..self.order {
                let value = self.entries[i * self.order + j];
                let mirror = self.entries[j * self.order + i];
                if (value * mirror - 1.0).abs() > tolerance {
                    violations.push(ReciprocalViolation {
                        row: i,
                        col: j,
                        value,
                        mirror,
                    });
                }
            }
        }

        violations
    }

    /// Fails with [`AhpError::NonReciprocal`] when any violation is found.
    pub fn ensure_reciprocal(&self, tolerance: f64) -> Result<(), AhpError> {
        let violations = self.reciprocal_violations(tolerance);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AhpError::NonReciprocal { violations })
        }
    }
}

impl Index<(usize, usize)> for JudgmentMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.order && col < self.order, "index out of bounds");
        &self.entries[row * self.order + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three_by_three() -> Vec<f64> {
        vec![1.0, 2.0, 3.0, 0.5, 1.0, 2.0, 1.0 / 3.0, 0.5, 1.0]
    }

    #[test]
    fn reshape_builds_rows_in_order() {
        let matrix = JudgmentMatrix::reshape(&three_by_three(), 3).unwrap();

        assert_eq!(matrix.order(), 3);
        assert_eq!(matrix.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(matrix.row(1), &[0.5, 1.0, 2.0]);
        assert_eq!(matrix[(2, 1)], 0.5);
    }

    #[test]
    fn reshape_rejects_wrong_length() {
        let err = JudgmentMatrix::reshape(&[1.0, 2.0, 3.0], 2).unwrap_err();
        assert_eq!(
            err,
            AhpError::Shape {
                order: 2,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn reshape_empty_is_zero_order() {
        let matrix = JudgmentMatrix::reshape(&[], 0).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 0);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![0.5]];
        assert!(matches!(
            JudgmentMatrix::from_rows(&rows),
            Err(AhpError::Shape { order: 2, .. })
        ));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let matrix = JudgmentMatrix::uniform(2);
        assert_eq!(matrix.get(1, 1), Some(1.0));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 2), None);
    }

    #[test]
    fn from_weights_has_unit_diagonal() {
        let matrix = JudgmentMatrix::from_weights(&[0.5, 0.3, 0.2]);
        for i in 0..3 {
            assert!((matrix[(i, i)] - 1.0).abs() < 1e-12);
        }
        assert!((matrix[(0, 2)] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn check_entries_rejects_negative_and_non_finite() {
        let negative = JudgmentMatrix::reshape(&[1.0, -2.0, 0.5, 1.0], 2).unwrap();
        assert!(matches!(
            negative.check_entries(),
            Err(AhpError::InvalidEntry { row: 0, col: 1, .. })
        ));

        let nan = JudgmentMatrix::reshape(&[1.0, 2.0, f64::NAN, 1.0], 2).unwrap();
        assert!(matches!(
            nan.check_entries(),
            Err(AhpError::InvalidEntry { row: 1, col: 0, .. })
        ));
    }

    #[test]
    fn check_entries_allows_zero() {
        let matrix = JudgmentMatrix::reshape(&[1.0, 0.0, 0.0, 1.0], 2).unwrap();
        assert!(matrix.check_entries().is_ok());
    }

    #[test]
    fn reciprocal_matrix_has_no_violations() {
        let matrix = JudgmentMatrix::reshape(&three_by_three(), 3).unwrap();
        assert!(matrix.reciprocal_violations(1e-9).is_empty());
        assert!(matrix.ensure_reciprocal(1e-9).is_ok());
    }

    #[test]
    fn rounded_reciprocals_pass_with_tolerance() {
        // 0.33 written for 1/3
        let matrix = JudgmentMatrix::reshape(&[1.0, 3.0, 0.33, 1.0], 2).unwrap();
        assert_eq!(matrix.reciprocal_violations(1e-9).len(), 1);
        assert!(matrix.reciprocal_violations(0.05).is_empty());
    }

    #[test]
    fn non_reciprocal_pair_and_diagonal_are_reported() {
        let matrix = JudgmentMatrix::reshape(&[2.0, 3.0, 3.0, 1.0], 2).unwrap();
        let violations = matrix.reciprocal_violations(0.01);

        assert_eq!(violations.len(), 2);
        assert_eq!((violations[0].row, violations[0].col), (0, 0));
        assert_eq!((violations[1].row, violations[1].col), (0, 1));
        assert_eq!(violations[1].mirror, 3.0);
        assert!(matches!(
            matrix.ensure_reciprocal(0.01),
            Err(AhpError::NonReciprocal { .. })
        ));
    }

    proptest! {
        #[test]
        fn reshape_flatten_round_trip(
            (order, flat) in (0usize..8).prop_flat_map(|n| {
                (Just(n), proptest::collection::vec(0.1f64..9.0, n * n))
            })
        ) {
            let matrix = JudgmentMatrix::reshape(&flat, order).unwrap();
            let again = JudgmentMatrix::reshape(&matrix.flatten(), order).unwrap();
            prop_assert_eq!(again, matrix);
        }
    }
}
