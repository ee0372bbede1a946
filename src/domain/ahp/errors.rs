//! Errors raised by the AHP engine.

use thiserror::Error;

use super::judgment_matrix::ReciprocalViolation;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failure local to one judgment matrix or decision model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    /// The flat judgment array cannot be reshaped into an n×n matrix.
    #[error("Judgment array of length {actual} cannot form a {order}x{order} matrix (expected {expected} entries)")]
    Shape {
        order: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Judgment at ({row}, {col}) must be finite and non-negative, got {value}")]
    InvalidEntry { row: usize, col: usize, value: f64 },

    #[error("Matrix order {order} exceeds the maximum of {max}")]
    OrderTooLarge { order: usize, max: usize },

    #[error("Expected a matrix of order {expected}, got order {actual}")]
    OrderMismatch { expected: usize, actual: usize },

    #[error("Judgment matrix is not reciprocal at {} position(s)", violations.len())]
    NonReciprocal { violations: Vec<ReciprocalViolation> },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AhpError {
    /// Returns the error code used at the application boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::Shape { .. } => ErrorCode::MatrixShape,
            AhpError::InvalidEntry { .. } => ErrorCode::InvalidEntry,
            AhpError::OrderTooLarge { .. } => ErrorCode::OrderTooLarge,
            AhpError::OrderMismatch { .. } => ErrorCode::OrderMismatch,
            AhpError::NonReciprocal { .. } => ErrorCode::NonReciprocal,
            AhpError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        match err {
            AhpError::Validation(inner) => inner.into(),
            AhpError::Shape {
                order,
                expected,
                actual,
            } => DomainError::new(ErrorCode::MatrixShape, err.to_string())
                .with_detail("order", order.to_string())
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            AhpError::InvalidEntry { row, col, .. } => {
                DomainError::new(ErrorCode::InvalidEntry, err.to_string())
                    .with_detail("row", row.to_string())
                    .with_detail("col", col.to_string())
            }
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
