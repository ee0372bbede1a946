//! HTTP routes for AHP endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{compute_priorities, evaluate_decision, evaluate_sample, AhpAppState};

/// Creates the AHP router with all routes.
pub fn ahp_routes(state: AhpAppState) -> Router {
    Router::new()
        // POST /api/ahp/evaluate
        .route("/api/ahp/evaluate", post(evaluate_decision))
        // GET /api/ahp/sample
        .route("/api/ahp/sample", get(evaluate_sample))
        // POST /api/ahp/priorities
        .route("/api/ahp/priorities", post(compute_priorities))
        .with_state(state)
}
