//! Report renderers - adapters for the `ReportRenderer` port.

mod text;
mod tracing_renderer;

pub use text::{format_bar_chart, format_report, DEFAULT_BAR_WIDTH};
pub use tracing_renderer::TracingReportRenderer;
