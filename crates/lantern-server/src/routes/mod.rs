//! Lantern API Routes
//!
//! - /api/monster - Monster progression (summon, XP, traits, actions, evolution)
//! - /api/analyze - Values analysis of reflection answers
//! - /api/values - Candidate core values

pub mod analyze;
pub mod error;
pub mod monster;
pub mod swagger;

pub use error::ApiError;
