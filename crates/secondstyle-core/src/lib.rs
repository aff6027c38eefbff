//! # secondstyle-core: Pure Domain Logic for the SecondStyle Client
//!
//! This crate is the heart of the SecondStyle client. It contains the
//! domain types and pure functions shared by the storage layer and the
//! view-facing command layer, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     SecondStyle Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        View Layer                               │   │
//! │  │    Login Form ──► Catalog Grid ──► Listing Form ──► Profile     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands (apps/client)                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ secondstyle-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   forms   │  │ validation│  │    ids    │   │   │
//! │  │   │  Account  │  │ Regist... │  │   rules   │  │ timestamp │   │   │
//! │  │   │  Listing  │  │ Listing...│  │  field map│  │ allocator │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              secondstyle-store (Storage Layer)                  │   │
//! │  │        SQLite key-value table, embedded migrations              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Account, Session, Listing, enums)
//! - [`forms`] - Typed form records submitted by the view layer
//! - [`validation`] - Pure form validation returning field→message maps
//! - [`ids`] - Millisecond-timestamp id allocation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: the clock is injected as `now_ms`, never read here
//! 2. **No I/O**: storage, network, and file access are forbidden in this crate
//! 3. **Explicit Errors**: validation failures are typed field→message maps

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod forms;
pub mod ids;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::CoreError;
pub use forms::{ListingDraft, ListingPatch, RegistrationForm};
pub use types::*;
pub use validation::FieldErrors;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Location stamped onto every new listing.
///
/// The original client fills this with a fixed value regardless of the
/// current user; there is no per-account location yet.
pub const DEFAULT_LOCATION: &str = "Paris";

/// Posted-date display string stamped onto every new listing.
/// This is a display string, not a real date.
pub const DEFAULT_POSTED_DATE: &str = "Maintenant";

/// Seller-rating display string stamped onto every new listing.
pub const DEFAULT_SELLER_RATING: &str = "4.5";

/// Portable placeholder image URI used when a listing has no photo.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/300";
