//! # Directory Repository
//!
//! Persists the registered-accounts directory under the `registeredUsers`
//! key as one JSON array snapshot.
//!
//! Every successful registration saves the FULL directory, overwriting the
//! prior snapshot — there is no per-account row and no incremental append.

use sqlx::SqlitePool;
use tracing::debug;

use secondstyle_core::Account;

use crate::error::StoreResult;
use crate::repository::kv::KvRepository;
use crate::KEY_REGISTERED_USERS;

/// Repository for the registered-accounts snapshot.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    kv: KvRepository,
}

impl DirectoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        DirectoryRepository {
            kv: KvRepository::new(pool),
        }
    }

    /// Loads the directory snapshot.
    ///
    /// ## Behavior
    /// An absent key is an empty directory, not an error (first launch).
    pub async fn load(&self) -> StoreResult<Vec<Account>> {
        match self.kv.get(KEY_REGISTERED_USERS).await? {
            Some(json) => {
                let accounts: Vec<Account> = serde_json::from_str(&json)?;
                debug!(count = accounts.len(), "Directory loaded");
                Ok(accounts)
            }
            None => {
                debug!("No directory snapshot, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Persists the full directory, overwriting the prior snapshot.
    pub async fn save(&self, accounts: &[Account]) -> StoreResult<()> {
        let json = serde_json::to_string(accounts)?;
        self.kv.put(KEY_REGISTERED_USERS, &json).await?;
        debug!(count = accounts.len(), "Directory saved");
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
    use chrono::Utc;

    fn account(id: i64, email: &str) -> Account {
        Account {
            id,
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            registered_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_load_empty_on_first_launch() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        assert!(store.directory().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_reload_preserves_order() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.directory();

        let accounts = vec![account(1, "a@x.com"), account(2, "b@x.com")];
        repo.save(&accounts).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].email, "a@x.com");
        assert_eq!(loaded[1].email, "b@x.com");
    }

    #[tokio::test]
    async fn test_save_overwrites_snapshot() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.directory();

        repo.save(&[account(1, "a@x.com")]).await.unwrap();
        repo.save(&[account(1, "a@x.com"), account(2, "b@x.com")])
            .await
            .unwrap();

        assert_eq!(repo.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_snapshot_keeps_password_verbatim() {
        // The stored snapshot is the full account, password included.
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.directory();

        repo.save(&[account(1, "a@x.com")]).await.unwrap();
        let raw = store.kv().get(KEY_REGISTERED_USERS).await.unwrap().unwrap();
        assert!(raw.contains("\"password\":\"secret1\""));
    }
}
