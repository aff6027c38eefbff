//! # Repositories
//!
//! Typed access to the key-value store, one repository per concern:
//!
//! - [`kv`] - raw get/put/remove on the `kv_store` table
//! - [`directory`] - the registered-accounts snapshot (`registeredUsers`)
//! - [`session`] - the persisted session (`token` + `user`)

pub mod directory;
pub mod kv;
pub mod session;
