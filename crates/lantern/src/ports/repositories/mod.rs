//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod snapshot_repository;

pub use snapshot_repository::*;
