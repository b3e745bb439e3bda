//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide the calculations behind power
//! analyses for A/B tests on proportion metrics: per-variant sample sizes
//! across a range of minimum detectable effects, the test durations those
//! sizes imply for a given traffic level, feasibility classifications, and
//! a small recommendation heuristic on top of the resulting table.
//! Presentation helpers (console table, CSV export, chart series) live in
//! `report` and only consume already-computed records.

/// This module contains error types
pub mod error;
pub mod params;
/// Quick/standard/sensitive scenario selection over a computed table
pub mod recommend;
/// Rendering and export of computed records
pub mod report;
pub mod sample_size;
mod stats;
/// The MDE sweep that builds the analysis table
pub mod sweep;

pub use crate::error::AbpowerErr;
pub use crate::params::types::ParameterSet;
pub use crate::recommend::compute_recommendations::compute_recommendations;
pub use crate::recommend::types::{Recommendation, RecommendationSet};
pub use crate::sample_size::compute_ss::compute_sample_size;
pub use crate::sweep::compute_sweep::compute_sweep;
pub use crate::sweep::types::{Feasibility, ResultRecord, TrafficAssessment};
