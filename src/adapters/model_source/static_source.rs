//! In-memory Decision Model Source
//!
//! Serves a model held in memory, including the bundled crew-scheduling
//! sample used when no model file is configured.

use async_trait::async_trait;

use super::ModelFormat;
use crate::domain::ahp::DecisionModel;
use crate::domain::foundation::DomainError;
use crate::ports::DecisionModelSource;

const CREW_SCHEDULING_YAML: &str = include_str!("../../../data/crew_scheduling.yaml");

#[derive(Debug, Clone)]
enum Contents {
    Model(DecisionModel),
    /// Parsed on every load so a broken bundle surfaces as an error.
    Yaml(&'static str),
}

/// Serves a fixed decision model.
#[derive(Debug, Clone)]
pub struct StaticModelSource {
    contents: Contents,
    label: String,
}

impl StaticModelSource {
    pub fn new(model: DecisionModel) -> Self {
        Self {
            contents: Contents::Model(model),
            label: "static:in-memory".to_string(),
        }
    }

    /// Five criteria, three crews.
    pub fn crew_scheduling() -> Self {
        Self {
            contents: Contents::Yaml(CREW_SCHEDULING_YAML),
            label: "static:crew_scheduling".to_string(),
        }
    }
}

#[async_trait]
impl DecisionModelSource for StaticModelSource {
    async fn load(&self) -> Result<DecisionModel, DomainError> {
        match &self.contents {
            Contents::Model(model) => Ok(model.clone()),
            Contents::Yaml(text) => ModelFormat::Yaml.parse(text),
        }
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
