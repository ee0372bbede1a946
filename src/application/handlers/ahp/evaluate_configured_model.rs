//! EvaluateConfiguredModelHandler - Loads the configured model and evaluates it.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{EvaluateDecisionCommand, EvaluateDecisionError, EvaluateDecisionHandler};
use crate::domain::ahp::EvaluationReport;
use crate::ports::DecisionModelSource;

/// Handler that evaluates whatever model the configured source provides.
pub struct EvaluateConfiguredModelHandler {
    source: Arc<dyn DecisionModelSource>,
    evaluator: Arc<EvaluateDecisionHandler>,
}

impl EvaluateConfiguredModelHandler {
    pub fn new(
        source: Arc<dyn DecisionModelSource>,
        evaluator: Arc<EvaluateDecisionHandler>,
    ) -> Self {
        Self { source, evaluator }
    }

    pub async fn handle(&self) -> Result<EvaluationReport, EvaluateDecisionError> {
        let model = self.source.load().await.map_err(|err| {
            warn!(source = %self.source.describe(), error = %err, "Failed to load decision model");
            EvaluateDecisionError::Source(err)
        })?;

        debug!(source = %self.source.describe(), goal = %model.goal, "Decision model loaded");

        self.evaluator.handle(EvaluateDecisionCommand { model })
    }
}
