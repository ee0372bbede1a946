//! Hierarchy Aggregator - synthesizes criteria and alternative priorities
//! into an overall ranking.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    AhpError, ConsistencyChecker, ConsistencyResult, DecisionModel, JudgmentMatrix,
    PriorityEngine, WeightVector,
};

/// Largest matrix order accepted by default. Bounds product overflow in the
/// geometric mean.
pub const DEFAULT_MAX_ORDER: usize = 50;

/// How the alternatives priorities for one criterion were obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CriterionStatus {
    Computed,
    /// No judgments supplied; zero weights substituted.
    Missing,
    /// Judgments could not be used; zero weights substituted.
    Malformed { reason: String },
}

impl CriterionStatus {
    pub fn is_computed(&self) -> bool {
        matches!(self, CriterionStatus::Computed)
    }
}

/// Alternatives priorities under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalPriorities {
    pub criterion_index: usize,
    pub weights: WeightVector,
    pub consistency: ConsistencyResult,
    #[serde(flatten)]
    pub status: CriterionStatus,
}

impl LocalPriorities {
    fn substituted(criterion_index: usize, alternative_count: usize, status: CriterionStatus) -> Self {
        Self {
            criterion_index,
            weights: WeightVector::zeros(alternative_count),
            consistency: ConsistencyResult::undecidable(),
            status,
        }
    }
}

/// Full output of one hierarchy evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyResult {
    pub criteria_weights: WeightVector,
    pub criteria_consistency: ConsistencyResult,
    /// One entry per criterion, in criterion order.
    pub local_priorities: Vec<LocalPriorities>,
    /// Overall weight per alternative.
    pub overall: WeightVector,
    /// Index of the highest overall weight; ties go to the first alternative.
    pub best_alternative: Option<usize>,
}

impl HierarchyResult {
    /// `(alternative index, overall weight)` sorted descending, stable on ties.
    pub fn ranking(&self) -> Vec<(usize, f64)> {
        self.overall.ranked()
    }

    /// Indices of criteria whose alternatives priorities were substituted.
    pub fn degraded_criteria(&self) -> Vec<usize> {
        self.local_priorities
            .iter()
            .filter(|local| !local.status.is_computed())
            .map(|local| local.criterion_index)
            .collect()
    }

    /// Returns true when every matrix was computed and judged consistent.
    pub fn is_fully_consistent(&self) -> bool {
        self.criteria_consistency.is_acceptable()
            && self
                .local_priorities
                .iter()
                .all(|local| local.status.is_computed() && local.consistency.is_acceptable())
    }
}

/// Input for one criterion's alternatives matrix.
enum LocalInput<'a> {
    Matrix(&'a JudgmentMatrix),
    Missing,
    Malformed(AhpError),
}

/// Runs the priority engine over the whole hierarchy and synthesizes the
/// overall ranking.
#[derive(Debug, Clone, Copy)]
pub struct HierarchyAggregator {
    max_order: usize,
}

impl Default for HierarchyAggregator {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

impl HierarchyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregator that rejects matrices larger than `max_order`.
    pub fn with_max_order(max_order: usize) -> Self {
        Self { max_order }
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Evaluates a hierarchy from already-built matrices.
    ///
    /// `alternative_matrices[k]` belongs to criterion `k`. A missing entry,
    /// or a matrix of the wrong order or with invalid entries, contributes
    /// zero weights and an undecidable CR instead of failing the run.
    ///
    /// # Errors
    /// - `OrderTooLarge` if either level exceeds the maximum order
    /// - `InvalidEntry` if the criteria matrix holds a negative or non-finite judgment
    pub fn run(
        &self,
        criteria_matrix: &JudgmentMatrix,
        alternative_matrices: &[Option<JudgmentMatrix>],
        alternative_count: usize,
    ) -> Result<HierarchyResult, AhpError> {
        if alternative_matrices.len() > criteria_matrix.order() {
            warn!(
                supplied = alternative_matrices.len(),
                criteria = criteria_matrix.order(),
                "Ignoring alternatives matrices beyond the criteria count"
            );
        }

        let inputs = (0..criteria_matrix.order())
            .map(|k| match alternative_matrices.get(k) {
                Some(Some(matrix)) => LocalInput::Matrix(matrix),
                _ => LocalInput::Missing,
            })
            .collect();

        self.aggregate(criteria_matrix, inputs, alternative_count)
    }

    /// Validates a decision model, reshapes its flat judgments and runs the
    /// hierarchy.
    ///
    /// # Errors
    /// - `Validation` if identifiers are blank or duplicated
    /// - `OrderTooLarge` if either level exceeds the maximum order
    /// - `Shape` / `InvalidEntry` if the criteria judgments are unusable
    pub fn evaluate(&self, model: &DecisionModel) -> Result<HierarchyResult, AhpError> {
        model.validate()?;

        let criteria_count = model.criterion_count();
        let alternative_count = model.alternative_count();
        self.check_order(criteria_count)?;
        self.check_order(alternative_count)?;

        let criteria_matrix = JudgmentMatrix::reshape(&model.criteria_judgments, criteria_count)?;

        let reshaped: Vec<Option<Result<JudgmentMatrix, AhpError>>> = (0..criteria_count)
            .map(|k| {
                model
                    .alternative_judgments_for(k)
                    .map(|flat| JudgmentMatrix::reshape(flat, alternative_count))
            })
            .collect();

        let inputs = reshaped
            .iter()
            .zip(&model.criteria)
            .map(|(entry, criterion)| match entry {
                Some(Ok(matrix)) => LocalInput::Matrix(matrix),
                Some(Err(err)) => {
                    warn!(criterion = %criterion.id, error = %err, "Alternatives judgments malformed");
                    LocalInput::Malformed(err.clone())
                }
                None => LocalInput::Missing,
            })
            .collect();

        self.aggregate(&criteria_matrix, inputs, alternative_count)
    }

    /// Weighted-sum synthesis: `overall[a] = Σ_k criteria[k] · local[k][a]`.
    pub fn synthesize(
        criteria_weights: &WeightVector,
        local_weights: &[&WeightVector],
        alternative_count: usize,
    ) -> WeightVector {
        let mut overall = vec![0.0; alternative_count];

        for (criterion_weight, local) in criteria_weights.iter().zip(local_weights) {
            for (slot, weight) in overall.iter_mut().zip(local.iter()) {
                *slot += criterion_weight * weight;
            }
        }

        WeightVector::new(overall)
    }

    fn check_order(&self, order: usize) -> Result<(), AhpError> {
        if order > self.max_order {
            return Err(AhpError::OrderTooLarge {
                order,
                max: self.max_order,
            });
        }
        Ok(())
    }

    fn aggregate(
        &self,
        criteria_matrix: &JudgmentMatrix,
        inputs: Vec<LocalInput<'_>>,
        alternative_count: usize,
    ) -> Result<HierarchyResult, AhpError> {
        let criteria_count = criteria_matrix.order();
        self.check_order(criteria_count)?;
        self.check_order(alternative_count)?;
        criteria_matrix.check_entries()?;

        let criteria_priorities = PriorityEngine::compute_weights(criteria_matrix);
        let criteria_consistency = ConsistencyChecker::check(&criteria_priorities, criteria_count);

        debug!(
            weights = ?criteria_priorities.weights.as_slice(),
            cr = criteria_consistency.cr,
            "Computed criteria priorities"
        );

        let local_priorities: Vec<LocalPriorities> = inputs
            .into_iter()
            .enumerate()
            .map(|(k, input)| Self::local_priorities(k, input, alternative_count))
            .collect();

        let local_weights: Vec<&WeightVector> =
            local_priorities.iter().map(|local| &local.weights).collect();
        let overall = Self::synthesize(
            &criteria_priorities.weights,
            &local_weights,
            alternative_count,
        );
        let best_alternative = overall.argmax();

        debug!(
            overall = ?overall.as_slice(),
            best = ?best_alternative,
            "Synthesized overall priorities"
        );

        Ok(HierarchyResult {
            criteria_weights: criteria_priorities.weights,
            criteria_consistency,
            local_priorities,
            overall,
            best_alternative,
        })
    }

    fn local_priorities(
        criterion_index: usize,
        input: LocalInput<'_>,
        alternative_count: usize,
    ) -> LocalPriorities {
        let matrix = match input {
            LocalInput::Matrix(matrix) => matrix,
            LocalInput::Missing => {
                warn!(
                    criterion = criterion_index,
                    "Missing alternatives matrix, using zero weights"
                );
                return LocalPriorities::substituted(
                    criterion_index,
                    alternative_count,
                    CriterionStatus::Missing,
                );
            }
            LocalInput::Malformed(err) => {
                return LocalPriorities::substituted(
                    criterion_index,
                    alternative_count,
                    CriterionStatus::Malformed {
                        reason: err.to_string(),
                    },
                );
            }
        };

        let usable = if matrix.order() != alternative_count {
            Err(AhpError::OrderMismatch {
                expected: alternative_count,
                actual: matrix.order(),
            })
        } else {
            matrix.check_entries()
        };

        if let Err(err) = usable {
            warn!(criterion = criterion_index, error = %err, "Alternatives matrix unusable");
            return LocalPriorities::substituted(
                criterion_index,
                alternative_count,
                CriterionStatus::Malformed {
                    reason: err.to_string(),
                },
            );
        }

        let priorities = PriorityEngine::compute_weights(matrix);
        let consistency = ConsistencyChecker::check(&priorities, alternative_count);

        debug!(
            criterion = criterion_index,
            weights = ?priorities.weights.as_slice(),
            cr = consistency.cr,
            "Computed alternatives priorities"
        );

        LocalPriorities {
            criterion_index,
            weights: priorities.weights,
            consistency,
            status: CriterionStatus::Computed,
        }
    }
}
