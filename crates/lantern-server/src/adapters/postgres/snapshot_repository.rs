//! PostgreSQL implementation of SnapshotRepository

use async_trait::async_trait;
use sqlx::PgPool;

use lantern::{DomainError, SnapshotRepository};

/// PostgreSQL implementation of SnapshotRepository
pub struct PgSnapshotRepository {
    pool: PgPool,
}

impl PgSnapshotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotRepository for PgSnapshotRepository {
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT data FROM snapshots WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(|(data,)| data))
    }

    async fn save(&self, key: &str, snapshot: &serde_json::Value) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO snapshots (key, data, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                data = EXCLUDED.data,
                updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(snapshot)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }
}
