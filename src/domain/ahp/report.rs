//! Evaluation Report - labelled, presentation-ready view of a hierarchy result.
//!
//! Renderers only ever read this structure; it carries everything a ranked
//! table or a bar chart needs, already sorted and named.

use serde::Serialize;

use super::{ConsistencyResult, CriterionStatus, DecisionModel, HierarchyResult};
use crate::domain::foundation::{EvaluationId, Timestamp};

/// One alternative's place in the overall ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    /// 1-based position.
    pub rank: usize,
    pub alternative_id: String,
    pub name: String,
    pub weight: f64,
}

/// A labelled weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightRow {
    pub id: String,
    pub name: String,
    pub weight: f64,
}

/// Weights from one judgment matrix, with its consistency figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    pub title: String,
    pub rows: Vec<WeightRow>,
    pub consistency: ConsistencyResult,
    #[serde(flatten)]
    pub status: CriterionStatus,
}

/// Complete output of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub evaluation_id: EvaluationId,
    pub computed_at: Timestamp,
    pub goal: String,
    pub criteria_table: WeightTable,
    /// One table per criterion, in criterion order.
    pub alternative_tables: Vec<WeightTable>,
    /// Sorted by descending overall weight.
    pub ranking: Vec<RankedAlternative>,
    pub recommended: Option<RankedAlternative>,
    pub result: HierarchyResult,
}

impl EvaluationReport {
    /// Attaches the model's names to a computed result.
    pub fn build(model: &DecisionModel, result: HierarchyResult) -> Self {
        let criteria_table = WeightTable {
            title: "Criteria weights".to_string(),
            rows: model
                .criteria
                .iter()
                .zip(result.criteria_weights.iter())
                .map(|(criterion, weight)| WeightRow {
                    id: criterion.id.clone(),
                    name: criterion.name.clone(),
                    weight,
                })
                .collect(),
            consistency: result.criteria_consistency.clone(),
            status: CriterionStatus::Computed,
        };

        let alternative_tables = result
            .local_priorities
            .iter()
            .zip(&model.criteria)
            .map(|(local, criterion)| WeightTable {
                title: format!("Alternatives under {}", criterion.name),
                rows: model
                    .alternatives
                    .iter()
                    .zip(local.weights.iter())
                    .map(|(alternative, weight)| WeightRow {
                        id: alternative.id.clone(),
                        name: alternative.name.clone(),
                        weight,
                    })
                    .collect(),
                consistency: local.consistency.clone(),
                status: local.status.clone(),
            })
            .collect();

        let ranking: Vec<RankedAlternative> = result
            .ranking()
            .into_iter()
            .filter_map(|(idx, weight)| model.alternatives.get(idx).map(|alt| (alt, weight)))
            .enumerate()
            .map(|(position, (alternative, weight))| RankedAlternative {
                rank: position + 1,
                alternative_id: alternative.id.clone(),
                name: alternative.name.clone(),
                weight,
            })
            .collect();

        let recommended = result
            .best_alternative
            .and_then(|idx| model.alternatives.get(idx))
            .and_then(|best| ranking.iter().find(|r| r.alternative_id == best.id))
            .cloned();

        Self {
            evaluation_id: EvaluationId::new(),
            computed_at: Timestamp::now(),
            goal: model.goal.clone(),
            criteria_table,
            alternative_tables,
            ranking,
            recommended,
            result,
        }
    }

    /// `(name, weight)` pairs for a bar chart, sorted descending.
    pub fn chart_series(&self) -> Vec<(&str, f64)> {
        self.ranking
            .iter()
            .map(|ranked| (ranked.name.as_str(), ranked.weight))
            .collect()
    }
}
