//! Decision Model - criteria, alternatives and their flat judgment arrays.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// A decision criterion. Its position fixes its row/column in the criteria matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
}

impl Criterion {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A candidate being ranked. Its position fixes its row/column in every
/// alternatives matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub name: String,
}

impl Alternative {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Everything needed for one AHP evaluation.
///
/// Judgments are flat and row-major. `alternative_judgments[k]` holds the
/// alternatives matrix for criterion `k`; `None` (or a short list) marks a
/// criterion with no judgments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionModel {
    #[serde(default)]
    pub goal: String,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    pub criteria_judgments: Vec<f64>,
    #[serde(default)]
    pub alternative_judgments: Vec<Option<Vec<f64>>>,
}

impl DecisionModel {
    /// Creates a builder for constructing a decision model.
    pub fn builder() -> DecisionModelBuilder {
        DecisionModelBuilder::new()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Flat alternatives judgments for criterion `index`, if supplied.
    pub fn alternative_judgments_for(&self, index: usize) -> Option<&[f64]> {
        self.alternative_judgments
            .get(index)
            .and_then(|judgments| judgments.as_deref())
    }

    /// Checks identifiers and the number of alternatives matrices.
    ///
    /// Matrix shapes are not checked here; a bad shape is a failure local to
    /// that matrix and is handled during aggregation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::validate_ids("criteria", self.criteria.iter().map(|c| c.id.as_str()))?;
        Self::validate_ids(
            "alternatives",
            self.alternatives.iter().map(|a| a.id.as_str()),
        )?;

        if self.alternative_judgments.len() > self.criteria.len() {
            return Err(ValidationError::invalid_format(
                "alternative_judgments",
                format!(
                    "{} matrices supplied for {} criteria",
                    self.alternative_judgments.len(),
                    self.criteria.len()
                ),
            ));
        }

        Ok(())
    }

    fn validate_ids<'a>(
        field: &str,
        ids: impl Iterator<Item = &'a str>,
    ) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for id in ids {
            if id.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("{}.id", field)));
            }
            if !seen.insert(id) {
                return Err(ValidationError::duplicate_id(field, id));
            }
        }
        Ok(())
    }
}

/// Builder for constructing DecisionModel instances.
#[derive(Debug, Default)]
pub struct DecisionModelBuilder {
    model: DecisionModel,
}

impl DecisionModelBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.model.goal = goal.into();
        self
    }

    /// Appends a criterion.
    pub fn criterion(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.model.criteria.push(Criterion::new(id, name));
        self
    }

    /// Appends an alternative.
    pub fn alternative(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.model.alternatives.push(Alternative::new(id, name));
        self
    }

    /// Sets the flat criteria judgments.
    pub fn criteria_judgments(mut self, judgments: Vec<f64>) -> Self {
        self.model.criteria_judgments = judgments;
        self
    }

    /// Appends the alternatives judgments for the next criterion.
    pub fn alternative_judgments(mut self, judgments: Vec<f64>) -> Self {
        self.model.alternative_judgments.push(Some(judgments));
        self
    }

    /// Marks the next criterion as having no alternatives judgments.
    pub fn missing_alternative_judgments(mut self) -> Self {
        self.model.alternative_judgments.push(None);
        self
    }

    /// Builds the decision model.
    pub fn build(self) -> DecisionModel {
        self.model
    }
}
