//! Decision Model Source Port - where evaluation inputs come from.
//!
//! The application layer asks this port for a [`DecisionModel`] and never
//! cares whether it was read from disk, bundled into the binary, or built
//! in memory by a test.

use async_trait::async_trait;

use crate::domain::ahp::DecisionModel;
use crate::domain::foundation::DomainError;

/// Port for loading a decision model.
///
/// # Contract
///
/// Implementations must:
/// - Return a fully deserialized model (validation happens downstream)
/// - Report missing sources as `ErrorCode::ModelNotFound`
/// - Report unparseable content as `ErrorCode::ModelUnreadable`
#[async_trait]
pub trait DecisionModelSource: Send + Sync {
    /// Loads the model.
    async fn load(&self) -> Result<DecisionModel, DomainError>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_model_source_is_object_safe() {
        fn check<T: DecisionModelSource + ?Sized>() {}
        check::<dyn DecisionModelSource>();
    }
}
