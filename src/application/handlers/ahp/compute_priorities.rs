//! ComputePrioritiesHandler - Query handler for a single judgment matrix.
//!
//! Returns the priority weights and consistency figures of one flat
//! judgment array without building a full hierarchy.

use serde::Serialize;
use tracing::debug;

use super::ReciprocityCheck;
use crate::domain::ahp::{
    AhpError, ConsistencyChecker, ConsistencyResult, JudgmentMatrix, PriorityEngine,
    ReciprocalViolation, WeightVector,
};

/// Query for the priorities of one matrix.
#[derive(Debug, Clone)]
pub struct ComputePrioritiesQuery {
    /// Row-major judgments.
    pub judgments: Vec<f64>,
    pub order: usize,
}

/// Priorities of one matrix.
#[derive(Debug, Clone, Serialize)]
pub struct PrioritiesView {
    pub weights: WeightVector,
    pub consistency: ConsistencyResult,
    /// Rows excluded from λmax because their weight was zero.
    pub excluded_rows: Vec<usize>,
    /// Empty in strict mode, since violations fail the query there.
    pub reciprocal_violations: Vec<ReciprocalViolation>,
}

/// Handler for single-matrix priority queries.
pub struct ComputePrioritiesHandler {
    max_order: usize,
    reciprocity: ReciprocityCheck,
}

impl ComputePrioritiesHandler {
    pub fn new(max_order: usize, reciprocity: ReciprocityCheck) -> Self {
        Self {
            max_order,
            reciprocity,
        }
    }

    pub fn handle(&self, query: ComputePrioritiesQuery) -> Result<PrioritiesView, AhpError> {
        if query.order > self.max_order {
            return Err(AhpError::OrderTooLarge {
                order: query.order,
                max: self.max_order,
            });
        }

        let matrix = JudgmentMatrix::reshape(&query.judgments, query.order)?;
        matrix.check_entries()?;

        let violations = self.reciprocity.inspect("priorities", &matrix);
        if self.reciprocity.strict && !violations.is_empty() {
            return Err(AhpError::NonReciprocal { violations });
        }

        let priorities = PriorityEngine::compute_weights(&matrix);
        let consistency = ConsistencyChecker::check(&priorities, matrix.order());

        debug!(
            order = matrix.order(),
            lambda_max = consistency.lambda_max,
            verdict = consistency.verdict.label(),
            "Priorities computed"
        );

        Ok(PrioritiesView {
            weights: priorities.weights,
            consistency,
            excluded_rows: priorities.excluded_rows,
            reciprocal_violations: violations,
        })
    }
}
