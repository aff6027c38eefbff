//! # Directory State
//!
//! The in-memory copy of the registered-accounts directory.
//!
//! Loaded from the durable store at startup; every registration appends
//! here and then snapshots the whole directory back to the store. Accounts
//! are append-only: nothing mutates or deletes one.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use secondstyle_core::Account;

/// In-memory registered-accounts directory.
///
/// ## Invariants
/// - Insertion order is registration order and is preserved by snapshots
/// - Emails are NOT unique; lookups are first-match-wins
/// - Account ids are unique (allocation bumps past collisions)
#[derive(Debug, Clone)]
pub struct DirectoryState {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl DirectoryState {
    /// Wraps the accounts loaded from the durable store.
    pub fn new(accounts: Vec<Account>) -> Self {
        DirectoryState {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    /// Linear scan for an exact credential match.
    ///
    /// ## Behavior
    /// Case-sensitive equality on both fields, no normalization. With
    /// duplicate emails the FIRST registered match wins.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<Account> {
        let accounts = self.accounts.lock().expect("directory mutex poisoned");
        accounts
            .iter()
            .find(|a| a.matches_credentials(email, password))
            .cloned()
    }

    /// Appends a freshly registered account.
    pub fn insert(&self, account: Account) {
        let mut accounts = self.accounts.lock().expect("directory mutex poisoned");
        accounts.push(account);
    }

    /// Full copy of the directory, in registration order.
    /// This is what gets persisted after every registration.
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.lock().expect("directory mutex poisoned").clone()
    }

    /// The ids already in use, for id allocation.
    pub fn taken_ids(&self) -> HashSet<i64> {
        let accounts = self.accounts.lock().expect("directory mutex poisoned");
        accounts.iter().map(|a| a.id).collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().expect("directory mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        DirectoryState::new(Vec::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account(id: i64, email: &str, password: &str) -> Account {
        Account {
            id,
            name: format!("User {}", id),
            email: email.to_string(),
            password: password.to_string(),
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn test_find_exact_match_only() {
        let directory = DirectoryState::new(vec![account(1, "a@x.com", "secret1")]);

        assert!(directory.find_by_credentials("a@x.com", "secret1").is_some());
        assert!(directory.find_by_credentials("a@x.com", "wrong").is_none());
        assert!(directory.find_by_credentials("b@x.com", "secret1").is_none());
    }

    #[test]
    fn test_duplicate_email_first_match_wins() {
        let directory = DirectoryState::new(vec![
            account(1, "a@x.com", "first1"),
            account(2, "a@x.com", "second"),
        ]);

        // Each password reaches its own account; same email, both live.
        assert_eq!(directory.find_by_credentials("a@x.com", "first1").unwrap().id, 1);
        assert_eq!(directory.find_by_credentials("a@x.com", "second").unwrap().id, 2);
    }

    #[test]
    fn test_snapshot_preserves_registration_order() {
        let directory = DirectoryState::default();
        directory.insert(account(1, "a@x.com", "secret1"));
        directory.insert(account(2, "b@x.com", "secret2"));

        let snapshot = directory.snapshot();
        assert_eq!(snapshot[0].id, 1);
        assert_eq!(snapshot[1].id, 2);
    }

    #[test]
    fn test_taken_ids() {
        let directory = DirectoryState::new(vec![account(5, "a@x.com", "p"), account(9, "b@x.com", "p")]);
        let ids = directory.taken_ids();
        assert!(ids.contains(&5) && ids.contains(&9));
        assert_eq!(ids.len(), 2);
    }
}
