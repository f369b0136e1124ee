//! Domain Services
//!
//! Stateless domain logic used by the values analysis flow.

mod analysis_prompt;
mod analysis_reply;
mod json_extract;
mod value_catalog;

pub use analysis_prompt::*;
pub use analysis_reply::*;
pub use json_extract::*;
pub use value_catalog::*;
