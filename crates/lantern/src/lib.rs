//! Lantern Domain Library
//!
//! Core domain types and interfaces for the Lantern self-reflection service:
//! a monster that grows through value-driven actions, and a values analysis
//! produced by a text generation model.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Monster, Progression, values analysis models
//!   - `value_objects/`: Element, EvolutionStage, ActionLevel, BigFive
//!   - `services/`: prompt rendering, JSON extraction, value catalog
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Snapshot persistence
//!   - `services/`: LLM provider
//!
//! # Usage
//!
//! ```rust,ignore
//! use lantern::{ActionLevel, Element, Progression};
//!
//! let mut progression = Progression::default();
//! progression.initialize(Element::Fire, "V001");
//! progression.log_action(ActionLevel::new(3)?, chrono::Local::now().date_naive());
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    extract_json_object, find_core_value, parse_analysis_reply, render_analysis_prompt,
    ActionLevel, ActionOutcome, AnalysisError, AnalysisOutcome, BigFive, BigFiveDelta, CoreValue, DomainError, Element,
    EvolutionProgress, EvolutionStage, Monster, Progression, Testimony, ValueAnalysis,
    ValueFinding, CORE_VALUES, LOCAL_USER_ID, PROGRESSION_SNAPSHOT_KEY,
};
pub use ports::{CompletionOptions, LlmProvider, SnapshotRepository};
