//! # SecondStyle Client Library
//!
//! The view-facing layer of the SecondStyle client: it owns the explicit
//! state stores, opens the durable store, and exposes the command functions
//! a view layer invokes.
//!
//! ## Module Organization
//! ```text
//! secondstyle_client/
//! ├── lib.rs          ◄─── You are here (App handle, init/teardown)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── directory.rs◄─── Registered accounts (persisted)
//! │   ├── session.rs  ◄─── Current session (persisted)
//! │   ├── catalog.rs  ◄─── Listings (in-memory, seeded)
//! │   ├── favorites.rs◄─── Favorite toggles (ephemeral)
//! │   └── config.rs   ◄─── App configuration
//! ├── commands/
//! │   ├── auth.rs     ◄─── register / login / logout / restore
//! │   ├── listing.rs  ◄─── Catalog CRUD
//! │   └── favorites.rs◄─── Favorite toggle
//! ├── latency.rs      ◄─── Simulated network delay + view cancellation
//! ├── fixtures.rs     ◄─── Seed catalog rows
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. init_tracing() ───────────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, override with RUST_LOG                             │
//! │                                                                         │
//! │  2. AppConfig::from_env() ────────────────────────────────────────────► │
//! │     • SECONDSTYLE_STORE_PATH override, else platform data dir           │
//! │                                                                         │
//! │  3. App::init(config) ────────────────────────────────────────────────► │
//! │     • Open store (SQLite WAL) + run migrations                          │
//! │     • Load directory from the registeredUsers snapshot                  │
//! │     • Restore persisted session (token + user, both required)           │
//! │     • Seed the catalog fixtures; favorites start empty                  │
//! │                                                                         │
//! │  4. View layer drives commands with App + per-view ViewGuard tokens     │
//! │                                                                         │
//! │  5. App::teardown() on exit ──────────────────────────────────────────► │
//! │     • Close the store pool                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Limitation
//! Two running instances over the same store file overwrite each other's
//! snapshots (last write wins, no version check). Acceptable for a
//! single-user local tool; documented, not fixed.

pub mod commands;
pub mod error;
pub mod fixtures;
pub mod latency;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use secondstyle_store::LocalStore;

use crate::error::ApiError;
use crate::state::{AppConfig, CatalogState, DirectoryState, FavoritesState, SessionState};

pub use crate::latency::{ViewGuard, ViewToken};

/// The application context handle passed to every command.
///
/// One `App` per running instance. Cloning is cheap and shares all state:
/// hand clones to the view layer freely.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    store: LocalStore,
    directory: DirectoryState,
    session: SessionState,
    catalog: CatalogState,
    favorites: FavoritesState,
}

impl App {
    /// Initializes the application state.
    ///
    /// ## What This Does
    /// 1. Opens the durable store (creating the file and applying
    ///    migrations as needed)
    /// 2. Loads the registered-accounts directory
    /// 3. Restores the persisted session without re-validating credentials
    /// 4. Seeds the in-memory catalog from the fixtures
    pub async fn init(config: AppConfig) -> Result<App, ApiError> {
        let store = LocalStore::open(config.store.clone()).await?;

        let accounts = store.directory().load().await?;
        let app = App {
            config,
            store,
            directory: DirectoryState::new(accounts),
            session: SessionState::new(),
            catalog: CatalogState::seeded(),
            favorites: FavoritesState::new(),
        };

        commands::auth::restore_session(&app).await?;

        info!(
            accounts = app.directory.len(),
            listings = app.catalog.len(),
            authenticated = app.session.is_authenticated(),
            "Application state initialized"
        );
        Ok(app)
    }

    /// Releases the durable store. Call on application exit.
    ///
    /// In-memory state (catalog, favorites) simply drops; only the
    /// directory and session outlive the process, and both were persisted
    /// at mutation time.
    pub async fn teardown(&self) {
        self.store.close().await;
    }

    /// The durable store handle.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// The registered-accounts directory.
    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    /// The current-session store.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The listing catalog.
    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// The favorite toggles.
    pub fn favorites(&self) -> &FavoritesState {
        &self.favorites
    }

    /// The simulated network delay applied to form submissions.
    pub fn network_delay(&self) -> std::time::Duration {
        self.config.network_delay
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=secondstyle=trace` - trace for secondstyle crates only
/// - Default: INFO level, sqlx at WARN
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,secondstyle=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// =============================================================================
// Unit Tests
// =============================================================================
