//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod analysis_service;
mod progression_service;

pub use analysis_service::AnalysisService;
pub use progression_service::{EvolveOutcome, ProgressionService};
