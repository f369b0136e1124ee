//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod action_level;
mod big_five;
mod element;
mod evolution_stage;

pub use action_level::*;
pub use big_five::*;
pub use element::*;
pub use evolution_stage::*;
