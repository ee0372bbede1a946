//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionModelSource` - Loads the decision model to evaluate
//! - `ReportRenderer` - Presents a finished evaluation report

mod decision_model_source;
mod report_renderer;

pub use decision_model_source::DecisionModelSource;
pub use report_renderer::ReportRenderer;
