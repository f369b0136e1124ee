//! PostgreSQL Repository Implementations

mod snapshot_repository;

pub use snapshot_repository::PgSnapshotRepository;
