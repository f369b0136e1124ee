//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Monster: the progression entity (traits, element, form, XP)
//! - Progression: monster record plus daily streak, the persisted snapshot
//! - Analysis: testimony and the structured values analysis

mod analysis;
mod monster;
mod progression;

pub use analysis::*;
pub use monster::*;
pub use progression::*;
