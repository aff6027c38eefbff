//! # Commands
//!
//! The functions a view layer invokes, one module per concern:
//!
//! - [`auth`] - register, login, logout, restore_session
//! - [`listing`] - create/update/delete/list catalog listings
//! - [`favorites`] - favorite toggles
//!
//! Commands take the [`crate::App`] handle plus, for form submissions, a
//! [`crate::latency::ViewToken`] from the issuing view. Every mutation
//! happens strictly after validation and the simulated network delay, so a
//! cancelled submission leaves all state untouched.

pub mod auth;
pub mod favorites;
pub mod listing;
