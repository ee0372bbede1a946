//! Optional reciprocal-judgment check shared by the AHP handlers.

use tracing::warn;

use crate::domain::ahp::{JudgmentMatrix, ReciprocalViolation};

/// Default relative tolerance for `M[i][j] * M[j][i] == 1`.
///
/// Loose enough for judgments written as rounded decimals (0.33 for 1/3).
pub const DEFAULT_RECIPROCAL_TOLERANCE: f64 = 0.05;

/// How strictly to treat matrices that break the reciprocal convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocityCheck {
    /// Reject non-reciprocal matrices instead of warning about them.
    pub strict: bool,
    pub tolerance: f64,
}

impl Default for ReciprocityCheck {
    fn default() -> Self {
        Self {
            strict: false,
            tolerance: DEFAULT_RECIPROCAL_TOLERANCE,
        }
    }
}

impl ReciprocityCheck {
    pub fn permissive(tolerance: f64) -> Self {
        Self {
            strict: false,
            tolerance,
        }
    }

    pub fn strict(tolerance: f64) -> Self {
        Self {
            strict: true,
            tolerance,
        }
    }

    /// Lists violations in `matrix`, logging them when any are found.
    pub fn inspect(&self, label: &str, matrix: &JudgmentMatrix) -> Vec<ReciprocalViolation> {
        let violations = matrix.reciprocal_violations(self.tolerance);
        if !violations.is_empty() {
            warn!(
                matrix = label,
                count = violations.len(),
                strict = self.strict,
                "Judgment matrix is not reciprocal"
            );
        }
        violations
    }
}
