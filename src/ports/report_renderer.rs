//! Report Renderer Port - presentation of finished evaluations.

use crate::domain::ahp::EvaluationReport;

/// Port for presenting an evaluation report.
///
/// Rendering is a side effect only; a renderer must not fail the
/// evaluation that produced the report.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &EvaluationReport);
}
