//! HTTP handlers for AHP endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::model_source::{FileModelSource, StaticModelSource};
use crate::application::handlers::ahp::{
    ComputePrioritiesHandler, ComputePrioritiesQuery, EvaluateConfiguredModelHandler,
    EvaluateDecisionCommand, EvaluateDecisionError, EvaluateDecisionHandler, PrioritiesView,
    ReciprocityCheck,
};
use crate::config::AhpConfig;
use crate::domain::ahp::{AhpError, DecisionModel, EvaluationReport, HierarchyAggregator};
use crate::domain::foundation::DomainError;
use crate::ports::{DecisionModelSource, ReportRenderer};

use super::dto::{ErrorResponse, HealthResponse, PrioritiesRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// AHP API error that implements IntoResponse.
#[derive(Debug)]
pub enum AhpApiError {
    /// Malformed model or matrix.
    BadRequest(ErrorResponse),
    /// Well-formed but rejected by strict reciprocal checking.
    Unprocessable(ErrorResponse),
    /// The configured model could not be loaded.
    Internal(ErrorResponse),
}

impl AhpApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            AhpApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AhpApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AhpApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AhpApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self {
            AhpApiError::BadRequest(body)
            | AhpApiError::Unprocessable(body)
            | AhpApiError::Internal(body) => body,
        };
        (status, Json(body)).into_response()
    }
}

impl From<AhpError> for AhpApiError {
    fn from(error: AhpError) -> Self {
        match error {
            AhpError::NonReciprocal { ref violations } => {
                let details = serde_json::to_value(violations).ok();
                let mut body = ErrorResponse::from(DomainError::from(error.clone()));
                body.details = details;
                AhpApiError::Unprocessable(body)
            }
            other => AhpApiError::BadRequest(DomainError::from(other).into()),
        }
    }
}

impl From<EvaluateDecisionError> for AhpApiError {
    fn from(error: EvaluateDecisionError) -> Self {
        match error {
            EvaluateDecisionError::Invalid(inner) => inner.into(),
            EvaluateDecisionError::NonReciprocal {
                ref matrix,
                ref violations,
            } => {
                let details = serde_json::json!({
                    "matrix": matrix,
                    "violations": violations,
                });
                AhpApiError::Unprocessable(
                    ErrorResponse::from(DomainError::from(error.clone())).with_details(details),
                )
            }
            EvaluateDecisionError::Source(inner) => {
                tracing::error!(error = %inner, "Decision model source failed");
                AhpApiError::Internal(inner.into())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing AHP dependencies.
#[derive(Clone)]
pub struct AhpAppState {
    pub evaluate_handler: Arc<EvaluateDecisionHandler>,
    pub configured_model_handler: Arc<EvaluateConfiguredModelHandler>,
    pub priorities_handler: Arc<ComputePrioritiesHandler>,
}

impl AhpAppState {
    /// Wires every handler from configuration. Successful evaluations
    /// requested over HTTP are not rendered; `startup_renderer` only
    /// receives evaluations of the configured model.
    pub fn from_config(
        config: &AhpConfig,
        startup_renderer: Option<Arc<dyn ReportRenderer>>,
    ) -> Self {
        let reciprocity = if config.strict_reciprocal {
            ReciprocityCheck::strict(config.reciprocal_tolerance)
        } else {
            ReciprocityCheck::permissive(config.reciprocal_tolerance)
        };
        let aggregator = HierarchyAggregator::with_max_order(config.max_order);

        let source: Arc<dyn DecisionModelSource> = match &config.model_path {
            Some(path) => Arc::new(FileModelSource::new(path)),
            None => Arc::new(StaticModelSource::crew_scheduling()),
        };

        let mut configured_evaluator = EvaluateDecisionHandler::new(aggregator, reciprocity);
        if let Some(renderer) = startup_renderer {
            configured_evaluator = configured_evaluator.with_renderer(renderer);
        }

        Self {
            evaluate_handler: Arc::new(EvaluateDecisionHandler::new(aggregator, reciprocity)),
            configured_model_handler: Arc::new(EvaluateConfiguredModelHandler::new(
                source,
                Arc::new(configured_evaluator),
            )),
            priorities_handler: Arc::new(ComputePrioritiesHandler::new(
                config.max_order,
                reciprocity,
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// POST /api/ahp/evaluate
///
/// Evaluates the decision model in the request body.
pub async fn evaluate_decision(
    State(state): State<AhpAppState>,
    Json(model): Json<DecisionModel>,
) -> Result<Json<EvaluationReport>, AhpApiError> {
    let report = state
        .evaluate_handler
        .handle(EvaluateDecisionCommand { model })?;
    Ok(Json(report))
}

/// GET /api/ahp/sample
///
/// Evaluates the model provided by the configured source.
pub async fn evaluate_sample(
    State(state): State<AhpAppState>,
) -> Result<Json<EvaluationReport>, AhpApiError> {
    let report = state.configured_model_handler.handle().await?;
    Ok(Json(report))
}

/// POST /api/ahp/priorities
///
/// Weights and consistency of a single judgment matrix.
pub async fn compute_priorities(
    State(state): State<AhpAppState>,
    Json(request): Json<PrioritiesRequest>,
) -> Result<Json<PrioritiesView>, AhpApiError> {
    let view = state.priorities_handler.handle(ComputePrioritiesQuery {
        judgments: request.judgments,
        order: request.order,
    })?;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::ReciprocalViolation;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn shape_error_is_bad_request() {
        let err: AhpApiError = AhpError::Shape {
            order: 2,
            expected: 4,
            actual: 3,
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_reciprocal_is_unprocessable_with_violations() {
        let err: AhpApiError = EvaluateDecisionError::NonReciprocal {
            matrix: "C2".to_string(),
            violations: vec![ReciprocalViolation {
                row: 0,
                col: 1,
                value: 3.0,
                mirror: 3.0,
            }],
        }
        .into();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        match err {
            AhpApiError::Unprocessable(body) => {
                assert_eq!(body.code, "NON_RECIPROCAL");
                let details = body.details.unwrap();
                assert_eq!(details["matrix"], "C2");
                assert_eq!(details["violations"][0]["col"], 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_config_applies_limits() {
        let config = AhpConfig {
            max_order: 7,
            strict_reciprocal: true,
            reciprocal_tolerance: 0.02,
            ..Default::default()
        };

        let state = AhpAppState::from_config(&config, None);

        assert_eq!(state.evaluate_handler.aggregator().max_order(), 7);
        assert_eq!(
            state.evaluate_handler.reciprocity(),
            ReciprocityCheck::strict(0.02)
        );
    }

    #[test]
    fn source_failure_is_internal() {
        let err: AhpApiError = EvaluateDecisionError::Source(DomainError::new(
            ErrorCode::ModelNotFound,
            "missing",
        ))
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
