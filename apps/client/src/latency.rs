//! # Simulated Network Latency
//!
//! There is no server: form submissions complete after a fixed artificial
//! delay that stands in for network latency. The delay is cancellable, and
//! the cancellation handle is tied to the lifetime of the view that issued
//! the operation.
//!
//! ## Why Cancellation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Mid-Delay Navigation                                   │
//! │                                                                         │
//! │  View mounts ──► ViewGuard created                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit ──► command ──► simulate_network(delay, token)                  │
//! │       │                        │                                        │
//! │       │          user navigates away: guard dropped/unmount()           │
//! │       │                        │                                        │
//! │       │                        ▼                                        │
//! │       │               Err(Cancelled) — NO state mutation                │
//! │       ▼                                                                 │
//! │  (delay elapses first) ──► Ok(()) ──► command mutates state             │
//! │                                                                         │
//! │  Without this, the timer would fire into a view that no longer          │
//! │  exists and mutate state on its behalf.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;

use crate::error::ApiError;

// =============================================================================
// View Guard
// =============================================================================

/// Cancellation source owned by a mounted view.
///
/// The view creates one guard when it mounts and hands [`ViewToken`]s to
/// the commands it issues. Unmounting — explicitly via [`ViewGuard::unmount`]
/// or implicitly by dropping the guard — cancels every outstanding token.
#[derive(Debug)]
pub struct ViewGuard {
    cancel_tx: watch::Sender<bool>,
}

impl ViewGuard {
    pub fn new() -> Self {
        let (cancel_tx, _) = watch::channel(false);
        ViewGuard { cancel_tx }
    }

    /// A token for one issued operation. Cheap to clone.
    pub fn token(&self) -> ViewToken {
        ViewToken {
            cancelled: self.cancel_tx.subscribe(),
            _keep_alive: None,
        }
    }

    /// Cancels all tokens issued by this guard.
    ///
    /// `send_replace` rather than `send`: the flag must stick even when no
    /// token is subscribed yet.
    pub fn unmount(&self) {
        self.cancel_tx.send_replace(true);
    }
}

impl Default for ViewGuard {
    fn default() -> Self {
        ViewGuard::new()
    }
}

impl Drop for ViewGuard {
    fn drop(&mut self) {
        self.cancel_tx.send_replace(true);
    }
}

// =============================================================================
// View Token
// =============================================================================

/// Cancellation token handed to a command by the issuing view.
#[derive(Debug, Clone)]
pub struct ViewToken {
    cancelled: watch::Receiver<bool>,
    /// Keeps the channel open for detached tokens; `None` for view-issued
    /// ones, whose sender lives in the [`ViewGuard`].
    _keep_alive: Option<std::sync::Arc<watch::Sender<bool>>>,
}

impl ViewToken {
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Resolves once the issuing view has unmounted.
    pub async fn cancelled(&self) {
        let mut rx = self.cancelled.clone();
        // A closed channel means the guard is gone, which is also a cancel.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// A token that never cancels, for operations without a mounted view
    /// (startup, tests).
    pub fn detached() -> Self {
        let (tx, rx) = watch::channel(false);
        ViewToken {
            cancelled: rx,
            _keep_alive: Some(std::sync::Arc::new(tx)),
        }
    }
}

// =============================================================================
// Simulated Delay
// =============================================================================

/// Waits out the artificial network delay, racing view cancellation.
///
/// ## Returns
/// - `Ok(())` once the delay elapses with the view still mounted
/// - `Err(Cancelled)` if the view unmounts first (or already had)
pub async fn simulate_network(delay: Duration, view: &ViewToken) -> Result<(), ApiError> {
    if view.is_cancelled() {
        return Err(ApiError::cancelled());
    }

    tokio::select! {
        _ = sleep(delay) => Ok(()),
        _ = view.cancelled() => Err(ApiError::cancelled()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_delay_completes_while_mounted() {
        let guard = ViewGuard::new();
        let token = guard.token();
        assert!(simulate_network(Duration::ZERO, &token).await.is_ok());
    }

    #[tokio::test]
    async fn test_unmount_cancels() {
        let guard = ViewGuard::new();
        let token = guard.token();
        guard.unmount();

        let err = simulate_network(Duration::from_secs(60), &token)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Cancelled);
    }

    #[tokio::test]
    async fn test_dropping_guard_cancels() {
        let guard = ViewGuard::new();
        let token = guard.token();
        drop(guard);

        let err = simulate_network(Duration::from_secs(60), &token)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Cancelled);
    }

    #[tokio::test]
    async fn test_detached_token_never_cancels() {
        let token = ViewToken::detached();
        assert!(!token.is_cancelled());
        assert!(simulate_network(Duration::ZERO, &token).await.is_ok());
    }
}
