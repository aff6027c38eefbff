//! # Auth Commands
//!
//! Registration, login, logout and session restore.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Login Flow                                      │
//! │                                                                         │
//! │  login(email, password)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  simulate_network ── view unmounted? ──► Err(Cancelled)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  directory.find_by_credentials (exact match, first wins)                │
//! │       │                                                                 │
//! │       ├── miss ──► Err("Email ou mot de passe incorrect")               │
//! │       │            (same message for unknown email and wrong password)  │
//! │       ▼                                                                 │
//! │  mint token-<id>-<ms> ──► persist user+token ──► set session            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(LoginResponse { account (no password), token })                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use secondstyle_core::ids::allocate_id;
use secondstyle_core::validation::validate_registration;
use secondstyle_core::{Account, RegistrationForm, Session};

use crate::error::ApiError;
use crate::latency::{simulate_network, ViewToken};
use crate::App;

// =============================================================================
// DTOs
// =============================================================================

/// Account DTO for the view.
///
/// The stored account keeps its plaintext password (a preserved behavior of
/// the original snapshot format); this response type is how the password
/// stays out of everything the view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        AccountDto {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            registered_at: account.registered_at,
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub account: AccountDto,
    pub token: String,
}

// =============================================================================
// Commands
// =============================================================================

/// Registers a new account.
///
/// ## Behavior
/// - Validation first (field→message map on failure), then the simulated
///   network delay, then the mutation — a cancelled submission adds nothing
/// - Always succeeds past validation: no duplicate-email check exists, and
///   registering an email twice creates two accounts with distinct ids
/// - Persists the FULL directory snapshot after appending
///
/// ## Returns
/// The new account, password omitted. The caller is NOT logged in;
/// the original redirects to the login form after registering.
pub async fn register(
    app: &App,
    view: &ViewToken,
    form: RegistrationForm,
) -> Result<AccountDto, ApiError> {
    debug!(email = %form.email, "register command");

    validate_registration(&form)?;
    simulate_network(app.network_delay(), view).await?;

    let now = Utc::now();
    let id = allocate_id(now.timestamp_millis(), &app.directory().taken_ids());
    let account = Account {
        id,
        name: form.name,
        email: form.email,
        password: form.password,
        registered_at: now,
    };

    app.directory().insert(account.clone());
    app.store().directory().save(&app.directory().snapshot()).await?;

    info!(account_id = id, "Account registered");
    Ok(AccountDto::from(&account))
}

/// Logs in with email and password.
///
/// ## Behavior
/// - The delay runs before the credential check, like the simulated call it
///   stands in for
/// - A miss returns ONE fixed message, never revealing which field was wrong
/// - A hit mints a fresh token, persists identity + token, and installs the
///   session — silently replacing any current one (last login wins)
pub async fn login(
    app: &App,
    view: &ViewToken,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    debug!(email = %email, "login command");

    simulate_network(app.network_delay(), view).await?;

    let Some(account) = app.directory().find_by_credentials(email, password) else {
        debug!("Login rejected");
        return Err(ApiError::invalid_credentials());
    };

    let session = Session::mint(account, Utc::now().timestamp_millis());
    app.store()
        .session()
        .save(&session.identity, &session.token)
        .await?;

    let response = LoginResponse {
        account: AccountDto::from(&session.identity),
        token: session.token.clone(),
    };
    app.session().set(session);

    info!(account_id = response.account.id, "Login succeeded");
    Ok(response)
}

/// Logs out.
///
/// ## Behavior
/// Clears the in-memory session and removes both persisted keys. Idempotent:
/// logging out while anonymous is a no-op, not an error. No artificial
/// delay — logout is immediate in the original.
pub async fn logout(app: &App) -> Result<(), ApiError> {
    debug!("logout command");

    app.session().clear();
    app.store().session().clear().await?;

    info!("Logged out");
    Ok(())
}

/// Restores the persisted session, if any. Called once at startup.
///
/// ## Behavior
/// Requires BOTH persisted keys; credentials are NOT re-validated — the
/// stored snapshot is trusted as session proof (preserved simplification,
/// flagged in DESIGN.md). After a logout there is nothing to restore and
/// the app stays anonymous.
pub async fn restore_session(app: &App) -> Result<Option<AccountDto>, ApiError> {
    match app.store().session().load().await? {
        Some((account, token)) => {
            let dto = AccountDto::from(&account);
            app.session().set(Session {
                identity: account,
                token,
            });
            info!(account_id = dto.id, "Session restored");
            Ok(Some(dto))
        }
        None => {
            debug!("No session to restore");
            Ok(None)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
