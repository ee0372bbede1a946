//! Data Transfer Objects for AHP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// Body of `POST /api/ahp/priorities`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrioritiesRequest {
    /// Row-major judgments.
    pub judgments: Vec<f64>,
    pub order: usize,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Attaches a structured details payload.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };

        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
