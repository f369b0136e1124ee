//! In-memory implementation of SnapshotRepository
//!
//! Process-local storage backing the service and route tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use lantern::{DomainError, SnapshotRepository};

#[derive(Default)]
pub struct InMemorySnapshotRepository {
    snapshots: RwLock<HashMap<String, serde_json::Value>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        Ok(self.snapshots.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, snapshot: &serde_json::Value) -> Result<(), DomainError> {
        self.snapshots
            .write()
            .await
            .insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_last_write_wins() {
        let repo = InMemorySnapshotRepository::new();
        assert_eq!(repo.load("k").await.unwrap(), None);

        repo.save("k", &json!({"streak": 1})).await.unwrap();
        repo.save("k", &json!({"streak": 2})).await.unwrap();

        assert_eq!(repo.load("k").await.unwrap(), Some(json!({"streak": 2})));
        assert_eq!(repo.load("other").await.unwrap(), None);
    }
}
