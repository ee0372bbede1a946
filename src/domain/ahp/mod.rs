//! AHP Module - Analytic Hierarchy Process weighting engine.
//!
//! Converts pairwise-comparison judgments into priority weights, checks
//! their consistency, and synthesizes an overall ranking of alternatives.
//!
//! # Components
//!
//! - `JudgmentMatrix` - Reshaping and inspection of n×n judgment matrices
//! - `PriorityEngine` - Geometric-mean weights and λmax for one matrix
//! - `ConsistencyChecker` - CI / CR against the Random Index table
//! - `HierarchyAggregator` - Weighted-sum synthesis across the hierarchy
//! - `EvaluationReport` - Labelled result handed to renderers
//!
//! All functions are pure. Inputs are never mutated; every evaluation
//! returns a fresh result.

mod consistency;
mod errors;
mod hierarchy;
mod judgment_matrix;
mod model;
mod priority_engine;
mod report;
mod weight_vector;

pub use consistency::{
    ConsistencyChecker, ConsistencyResult, ConsistencyVerdict, CONSISTENCY_RATIO_THRESHOLD,
    RANDOM_INDEX,
};
pub use errors::AhpError;
pub use hierarchy::{
    CriterionStatus, HierarchyAggregator, HierarchyResult, LocalPriorities, DEFAULT_MAX_ORDER,
};
pub use judgment_matrix::{JudgmentMatrix, ReciprocalViolation};
pub use model::{Alternative, Criterion, DecisionModel, DecisionModelBuilder};
pub use priority_engine::{Priorities, PriorityEngine};
pub use report::{EvaluationReport, RankedAlternative, WeightRow, WeightTable};
pub use weight_vector::WeightVector;
