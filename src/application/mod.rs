//! Application layer - Use cases orchestrating the domain through ports.

pub mod handlers;
