//! Decision model sources - adapters for the `DecisionModelSource` port.

mod file_source;
mod static_source;

pub use file_source::{FileModelSource, ModelFormat};
pub use static_source::StaticModelSource;
