//! EvaluateDecisionHandler - Command handler that runs a full AHP evaluation.
//!
//! Validates the model, computes the hierarchy result, applies the
//! reciprocal check and hands the finished report to every renderer.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::ReciprocityCheck;
use crate::domain::ahp::{
    AhpError, DecisionModel, EvaluationReport, HierarchyAggregator, JudgmentMatrix,
    ReciprocalViolation,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ReportRenderer;

/// Command to evaluate a decision model.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionCommand {
    pub model: DecisionModel,
}

/// Error type for evaluating a decision.
#[derive(Debug, Clone, Error)]
pub enum EvaluateDecisionError {
    /// The model or its criteria matrix cannot be evaluated.
    #[error(transparent)]
    Invalid(#[from] AhpError),

    /// Strict mode rejected a non-reciprocal matrix.
    #[error("Judgment matrix '{matrix}' is not reciprocal at {} position(s)", violations.len())]
    NonReciprocal {
        matrix: String,
        violations: Vec<ReciprocalViolation>,
    },

    /// The model could not be loaded.
    #[error("{0}")]
    Source(DomainError),
}

impl From<EvaluateDecisionError> for DomainError {
    fn from(err: EvaluateDecisionError) -> Self {
        match err {
            EvaluateDecisionError::Invalid(inner) => inner.into(),
            EvaluateDecisionError::NonReciprocal { ref matrix, .. } => {
                DomainError::new(ErrorCode::NonReciprocal, err.to_string())
                    .with_detail("matrix", matrix.clone())
            }
            EvaluateDecisionError::Source(inner) => inner,
        }
    }
}

/// Handler for evaluating decision models.
pub struct EvaluateDecisionHandler {
    aggregator: HierarchyAggregator,
    reciprocity: ReciprocityCheck,
    renderers: Vec<Arc<dyn ReportRenderer>>,
}

impl EvaluateDecisionHandler {
    pub fn new(aggregator: HierarchyAggregator, reciprocity: ReciprocityCheck) -> Self {
        Self {
            aggregator,
            reciprocity,
            renderers: Vec::new(),
        }
    }

    /// Adds a renderer that receives every successful report.
    pub fn with_renderer(mut self, renderer: Arc<dyn ReportRenderer>) -> Self {
        self.renderers.push(renderer);
        self
    }

    pub fn aggregator(&self) -> &HierarchyAggregator {
        &self.aggregator
    }

    pub fn reciprocity(&self) -> ReciprocityCheck {
        self.reciprocity
    }

    pub fn handle(
        &self,
        cmd: EvaluateDecisionCommand,
    ) -> Result<EvaluationReport, EvaluateDecisionError> {
        let model = cmd.model;
        let result = self.aggregator.evaluate(&model)?;

        self.check_reciprocity(&model)?;

        let report = EvaluationReport::build(&model, result);

        debug!(
            evaluation_id = %report.evaluation_id,
            criteria = model.criterion_count(),
            alternatives = model.alternative_count(),
            recommended = report.recommended.as_ref().map(|r| r.alternative_id.as_str()),
            "Decision evaluated"
        );

        for renderer in &self.renderers {
            renderer.render(&report);
        }

        Ok(report)
    }

    /// Inspects every well-shaped matrix; in strict mode the first
    /// offending matrix fails the evaluation.
    fn check_reciprocity(&self, model: &DecisionModel) -> Result<(), EvaluateDecisionError> {
        let n_c = model.criterion_count();
        let n_a = model.alternative_count();

        let criteria = JudgmentMatrix::reshape(&model.criteria_judgments, n_c)
            .map(|matrix| ("criteria".to_string(), matrix));
        let locals = model.criteria.iter().enumerate().filter_map(|(k, criterion)| {
            let flat = model.alternative_judgments_for(k)?;
            JudgmentMatrix::reshape(flat, n_a)
                .ok()
                .map(|matrix| (criterion.id.clone(), matrix))
        });

        for (label, matrix) in criteria.into_iter().chain(locals) {
            let violations = self.reciprocity.inspect(&label, &matrix);
            if self.reciprocity.strict && !violations.is_empty() {
                return Err(EvaluateDecisionError::NonReciprocal {
                    matrix: label,
                    violations,
                });
            }
        }

        Ok(())
    }
}
