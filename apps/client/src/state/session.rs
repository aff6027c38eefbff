//! # Session State
//!
//! The single current session, or none.
//!
//! ## State Machine
//! ```text
//! Anonymous ──login(success)──► Authenticated ──logout──► Anonymous
//!                                    │   ▲
//!                                    └───┘
//!                         login while authenticated:
//!                         overwrites silently, last login wins
//! ```
//!
//! There is no expiry, no refresh and no concurrent-session tracking.

use std::sync::{Arc, Mutex};

use secondstyle_core::Session;

/// The current authenticated identity plus its token, if any.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Option<Session>>>,
}

impl SessionState {
    /// Starts anonymous.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(None)),
        }
    }

    /// Installs a session, silently replacing any current one.
    pub fn set(&self, session: Session) {
        let mut current = self.session.lock().expect("session mutex poisoned");
        *current = Some(session);
    }

    /// Back to anonymous. Idempotent: clearing an empty session is a no-op.
    pub fn clear(&self) {
        let mut current = self.session.lock().expect("session mutex poisoned");
        *current = None;
    }

    /// A copy of the current session.
    pub fn current(&self) -> Option<Session> {
        self.session.lock().expect("session mutex poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.lock().expect("session mutex poisoned").is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use secondstyle_core::Account;

    fn session(id: i64) -> Session {
        Session::mint(
            Account {
                id,
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                password: "secret1".to_string(),
                registered_at: Utc::now(),
            },
            1_700_000_000_000,
        )
    }

    #[test]
    fn test_starts_anonymous() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());
        assert!(state.current().is_none());
    }

    #[test]
    fn test_last_login_wins() {
        let state = SessionState::new();
        state.set(session(1));
        state.set(session(2));
        assert_eq!(state.current().unwrap().identity.id, 2);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let state = SessionState::new();
        state.set(session(1));
        state.clear();
        state.clear();
        assert!(!state.is_authenticated());
    }
}
