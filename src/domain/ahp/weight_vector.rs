//! Weight Vector - priorities index-aligned with the entities they rank.

use serde::{Deserialize, Serialize};

/// Ordered, non-negative priorities. Index `i` belongs to the `i`-th
/// criterion or alternative of the list the vector was derived from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wraps raw weights.
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// A vector of `len` zero weights.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns true when every weight is exactly zero.
    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0.0)
    }

    /// Multiplies every weight by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|w| w * factor).collect())
    }

    /// Rescales so the weights sum to 1. A zero-sum vector is returned as is.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if total == 0.0 {
            return self.clone();
        }
        self.scaled(1.0 / total)
    }

    /// Index of the largest weight. Ties go to the first occurrence.
    ///
    /// # Edge Cases
    /// - Empty vector: Returns None
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &weight) in self.0.iter().enumerate() {
            match best {
                Some((_, top)) if weight <= top => {}
                _ if weight.is_nan() => {}
                _ => best = Some((idx, weight)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// `(index, weight)` pairs sorted by descending weight, stable on ties.
    pub fn ranked(&self) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.0.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_sums_to_zero() {
        let weights = WeightVector::zeros(3);
        assert_eq!(weights.len(), 3);
        assert_eq!(weights.sum(), 0.0);
        assert!(weights.is_all_zero());
    }

    #[test]
    fn normalized_sums_to_one() {
        let weights = WeightVector::new(vec![2.0, 1.0, 1.0]).normalized();
        assert!((weights.sum() - 1.0).abs() < 1e-12);
        assert_eq!(weights.get(0), Some(0.5));
    }

    #[test]
    fn normalized_zero_vector_stays_zero() {
        let weights = WeightVector::zeros(2).normalized();
        assert!(weights.is_all_zero());
    }

    #[test]
    fn argmax_picks_largest() {
        let weights = WeightVector::new(vec![0.2, 0.5, 0.3]);
        assert_eq!(weights.argmax(), Some(1));
    }

    #[test]
    fn argmax_ties_go_to_first() {
        let weights = WeightVector::new(vec![0.1, 0.45, 0.45]);
        assert_eq!(weights.argmax(), Some(1));

        let zeros = WeightVector::zeros(3);
        assert_eq!(zeros.argmax(), Some(0));
    }

    #[test]
    fn argmax_empty_is_none() {
        assert_eq!(WeightVector::default().argmax(), None);
    }

    #[test]
    fn ranked_is_descending_and_stable() {
        let weights = WeightVector::new(vec![0.25, 0.5, 0.25]);
        let ranked = weights.ranked();

        assert_eq!(ranked[0], (1, 0.5));
        assert_eq!(ranked[1], (0, 0.25));
        assert_eq!(ranked[2], (2, 0.25));
    }

    #[test]
    fn serializes_as_plain_array() {
        let weights = WeightVector::new(vec![0.5, 0.5]);
        assert_eq!(serde_json::to_string(&weights).unwrap(), "[0.5,0.5]");
    }
}
