//! # State Module
//!
//! The explicit state stores the view layer reads and the commands mutate.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each store
//! is its own type with a single responsibility:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┬──────────────┐        │
//! │          ▼                  ▼                  ▼              ▼        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌───────────┐  │
//! │  │DirectoryState│  │ SessionState │  │ CatalogState │  │ Favorites │  │
//! │  │              │  │              │  │              │  │  State    │  │
//! │  │ registered   │  │ Option<      │  │ Vec<Listing> │  │ HashSet   │  │
//! │  │ accounts     │  │  Session>    │  │ (insertion   │  │ <i64>     │  │
//! │  │ (persisted)  │  │ (persisted)  │  │  order, NOT  │  │ (ephemer.)│  │
//! │  │              │  │              │  │  persisted)  │  │           │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └───────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY: each store is Arc<Mutex<..>>; mutations are short,     │
//! │  synchronous critical sections, never held across an await.            │
//! │  PERSISTENCE: directory and session snapshot to the durable store on   │
//! │  mutation; catalog and favorites are in-memory only by design.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod directory;
mod favorites;
mod session;

pub use catalog::CatalogState;
pub use config::{default_store_path, AppConfig, DEFAULT_NETWORK_DELAY};
pub use directory::DirectoryState;
pub use favorites::FavoritesState;
pub use session::SessionState;
