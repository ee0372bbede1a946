//! Domain layer - pure AHP engine and the value objects it shares.
//!
//! Nothing in here performs I/O.

pub mod ahp;
pub mod foundation;
