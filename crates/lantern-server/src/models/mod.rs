//! Request/Response Models
//!
//! DTOs for the HTTP API, kept separate from the domain entities.

mod analysis;
mod monster;

pub use analysis::*;
pub use monster::*;
