//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod gemini;
pub mod memory;
pub mod postgres;

// Re-exports
pub use gemini::GeminiProvider;
pub use memory::InMemorySnapshotRepository;
pub use postgres::PgSnapshotRepository;
