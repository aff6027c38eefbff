//! # Session Repository
//!
//! Persists the current session under two independent keys:
//! `token` (raw string) and `user` (JSON account).
//!
//! Restore requires BOTH keys; either one alone is treated as no session.
//! Nothing here validates the token or re-checks credentials — the stored
//! snapshot IS the session proof, which is exactly as trustworthy as the
//! local store file (see DESIGN.md, security deviations).

use sqlx::SqlitePool;
use tracing::{debug, warn};

use secondstyle_core::Account;

use crate::error::StoreResult;
use crate::repository::kv::KvRepository;
use crate::{KEY_TOKEN, KEY_USER};

/// Repository for the persisted session.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    kv: KvRepository,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SessionRepository {
            kv: KvRepository::new(pool),
        }
    }

    /// Loads the persisted session, if any.
    ///
    /// ## Behavior
    /// - Both keys present → `Some((account, token))`
    /// - Either key absent → `None`
    /// - Unparsable account JSON → `None`, with a warning; a corrupt
    ///   snapshot downgrades to anonymous rather than blocking startup
    pub async fn load(&self) -> StoreResult<Option<(Account, String)>> {
        let token = self.kv.get(KEY_TOKEN).await?;
        let user_json = self.kv.get(KEY_USER).await?;

        let (Some(token), Some(user_json)) = (token, user_json) else {
            debug!("No persisted session");
            return Ok(None);
        };

        match serde_json::from_str::<Account>(&user_json) {
            Ok(account) => {
                debug!(account_id = account.id, "Persisted session found");
                Ok(Some((account, token)))
            }
            Err(e) => {
                warn!(error = %e, "Persisted account snapshot unparsable, treating as no session");
                Ok(None)
            }
        }
    }

    /// Persists the session: both keys, overwriting prior values.
    pub async fn save(&self, account: &Account, token: &str) -> StoreResult<()> {
        let user_json = serde_json::to_string(account)?;
        self.kv.put(KEY_USER, &user_json).await?;
        self.kv.put(KEY_TOKEN, token).await?;
        debug!(account_id = account.id, "Session persisted");
        Ok(())
    }

    /// Removes both session keys. Idempotent.
    pub async fn clear(&self) -> StoreResult<()> {
        self.kv.remove(KEY_USER).await?;
        self.kv.remove(KEY_TOKEN).await?;
        debug!("Persisted session cleared");
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

    fn account() -> Account {
        Account {
            id: 42,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            registered_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_load_without_session() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        assert!(store.session().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.session();

        repo.save(&account(), "token-42-7").await.unwrap();

        let (loaded, token) = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.id, 42);
        assert_eq!(token, "token-42-7");
    }

    #[tokio::test]
    async fn test_token_alone_is_no_session() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        store.kv().put(KEY_TOKEN, "token-42-7").await.unwrap();
        assert!(store.session().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_user_snapshot_is_no_session() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        store.kv().put(KEY_TOKEN, "token-42-7").await.unwrap();
        store.kv().put(KEY_USER, "{not json").await.unwrap();
        assert!(store.session().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = LocalStore::open(StoreConfig::in_memory()).await.unwrap();
        let repo = store.session();

        repo.save(&account(), "token-42-7").await.unwrap();
        repo.clear().await.unwrap();
        repo.clear().await.unwrap(); // no error on second clear
        assert!(repo.load().await.unwrap().is_none());
    }
}
