//! # secondstyle-store: Durable Storage for the SecondStyle Client
//!
//! Durable client-side storage over SQLite, replacing the browser's local
//! key-value store with the desktop equivalent: a single `kv_store` table
//! of whole-value snapshots.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SecondStyle Data Flow                                │
//! │                                                                         │
//! │  Command (register / login / logout / restore)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 secondstyle-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │  LocalStore   │    │ Repositories  │    │  Migrations  │   │   │
//! │  │   │  (pool.rs)    │    │               │    │  (embedded)  │   │   │
//! │  │   │               │◄───│ KvRepository  │    │              │   │   │
//! │  │   │  SqlitePool   │    │ DirectoryRepo │    │ 001_init.sql │   │   │
//! │  │   │  Management   │    │ SessionRepo   │    │              │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kv_store table: token | user | registeredUsers                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Typed repositories over the key-value table
//!
//! ## Concurrency Model
//!
//! Writes are whole-value overwrites with no version check. Two running
//! instances pointed at the same store file silently clobber each other's
//! snapshots (last write wins) — a documented limitation of the single-user
//! design, not something this crate guards against.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use pool::{LocalStore, StoreConfig};

pub use repository::directory::DirectoryRepository;
pub use repository::kv::KvRepository;
pub use repository::session::SessionRepository;

// =============================================================================
// Storage Keys
// =============================================================================

/// Key holding the raw session token string.
pub const KEY_TOKEN: &str = "token";

/// Key holding the JSON-serialized current account.
pub const KEY_USER: &str = "user";

/// Key holding the JSON-serialized ordered list of registered accounts.
pub const KEY_REGISTERED_USERS: &str = "registeredUsers";
