//! Crew AHP - Analytic Hierarchy Process weighting engine
//!
//! Turns pairwise-comparison judgments over crew-scheduling criteria and
//! candidate crews into priority weights, consistency ratios and an overall
//! ranking, and serves the evaluation over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
