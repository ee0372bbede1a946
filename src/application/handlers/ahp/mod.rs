//! AHP command and query handlers.

// Command handlers
mod evaluate_configured_model;
mod evaluate_decision;

// Query handlers
mod compute_priorities;

mod reciprocity;

pub use compute_priorities::{ComputePrioritiesHandler, ComputePrioritiesQuery, PrioritiesView};
pub use evaluate_configured_model::EvaluateConfiguredModelHandler;
pub use evaluate_decision::{
    EvaluateDecisionCommand, EvaluateDecisionError, EvaluateDecisionHandler,
};
pub use reciprocity::{ReciprocityCheck, DEFAULT_RECIPROCAL_TOLERANCE};
