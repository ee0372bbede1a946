//! AHP HTTP adapter module.
//!
//! Provides REST API endpoints for evaluating decision models.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, PrioritiesRequest};
pub use handlers::{AhpApiError, AhpAppState};
pub use routes::ahp_routes;
