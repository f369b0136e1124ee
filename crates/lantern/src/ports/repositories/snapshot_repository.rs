//! Snapshot Repository Port
//!
//! Opaque key-value persistence for whole-state snapshots.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Repository interface for JSON snapshots stored under a fixed key
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Load the snapshot stored under `key`
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError>;

    /// Save (insert or replace) the snapshot under `key`
    async fn save(&self, key: &str, snapshot: &serde_json::Value) -> Result<(), DomainError>;
}
