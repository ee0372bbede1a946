//! Report renderer that writes to the tracing log.

use tracing::info;

use super::{format_bar_chart, format_report, DEFAULT_BAR_WIDTH};
use crate::domain::ahp::EvaluationReport;
use crate::ports::ReportRenderer;

/// Emits the formatted tables and bar chart as `info` events, one event
/// per line so structured log collectors keep them readable.
#[derive(Debug, Clone)]
pub struct TracingReportRenderer {
    bar_width: usize,
}

impl Default for TracingReportRenderer {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl TracingReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bar_width(bar_width: usize) -> Self {
        Self { bar_width }
    }
}

impl ReportRenderer for TracingReportRenderer {
    fn render(&self, report: &EvaluationReport) {
        let id = report.evaluation_id;
        for line in format_report(report).lines() {
            info!(evaluation_id = %id, "{}", line);
        }
        for line in format_bar_chart(&report.chart_series(), self.bar_width).lines() {
            info!(evaluation_id = %id, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{DecisionModel, HierarchyAggregator};

    #[test]
    fn renders_without_subscriber() {
        let model = DecisionModel::builder()
            .criterion("C1", "Only")
            .alternative("P1", "Crew A")
            .criteria_judgments(vec![1.0])
            .alternative_judgments(vec![1.0])
            .build();
        let result = HierarchyAggregator::new().evaluate(&model).unwrap();
        let report = EvaluationReport::build(&model, result);

        TracingReportRenderer::with_bar_width(8).render(&report);
    }
}
