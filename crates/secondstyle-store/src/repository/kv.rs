//! # Key-Value Repository
//!
//! Raw string storage on the `kv_store` table. The typed repositories
//! (`directory`, `session`) are built on top of this one.
//!
//! Values are whole-snapshot strings; a put overwrites whatever was there
//! (last write wins, no version check).

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;

/// Repository for raw key-value operations.
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }

    /// Reads the value under `key`, or `None` when the key is absent.
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, present = value.is_some(), "kv get");
        Ok(value)
    }

    /// Writes `value` under `key`, overwriting any prior value.
    pub async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "kv put");
        Ok(())
    }

    /// Removes `key`. No-op when the key is absent; idempotent.
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, removed = result.rows_affected() > 0, "kv remove");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{LocalStore, StoreConfig};

    async fn kv() -> KvRepository {
        LocalStore::open(StoreConfig::in_memory()).await.unwrap().kv()
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let kv = kv().await;
        assert_eq!(kv.get("token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let kv = kv().await;
        kv.put("token", "token-1-2").await.unwrap();
        assert_eq!(kv.get("token").await.unwrap().as_deref(), Some("token-1-2"));
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let kv = kv().await;
        kv.put("token", "old").await.unwrap();
        kv.put("token", "new").await.unwrap();
        assert_eq!(kv.get("token").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let kv = kv().await;
        kv.put("token", "value").await.unwrap();
        kv.remove("token").await.unwrap();
        kv.remove("token").await.unwrap(); // second removal is a no-op
        assert_eq!(kv.get("token").await.unwrap(), None);
    }
}
