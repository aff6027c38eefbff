//! # Catalog State
//!
//! The in-memory set of sale listings.
//!
//! ## Persistence Asymmetry
//! Unlike the directory, the catalog is NEVER written to the durable store:
//! it reseeds from the two fixture rows at every launch, and anything
//! created during a run is gone after restart. That asymmetry is a
//! preserved behavior of the client, not an oversight (see DESIGN.md).
//!
//! ## Invariants
//! - Listing ids are unique at all times
//! - `list()` returns insertion order; deletion leaves no stale entry

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use secondstyle_core::{Listing, ListingPatch};

use crate::fixtures;

/// In-memory listing catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    listings: Arc<Mutex<Vec<Listing>>>,
}

impl CatalogState {
    /// An empty catalog (tests mostly; launches use [`CatalogState::seeded`]).
    pub fn new(listings: Vec<Listing>) -> Self {
        CatalogState {
            listings: Arc::new(Mutex::new(listings)),
        }
    }

    /// The launch-time catalog: the two fixture rows.
    pub fn seeded() -> Self {
        CatalogState::new(fixtures::seed_listings())
    }

    /// Appends a listing. The caller allocates a unique id first.
    pub fn insert(&self, listing: Listing) {
        let mut listings = self.listings.lock().expect("catalog mutex poisoned");
        listings.push(listing);
    }

    /// Merges `patch` onto the listing with `id`.
    ///
    /// ## Behavior
    /// Returns the updated listing, or `None` when the id is absent — the
    /// absent case is a silent no-op by contract, never an error.
    pub fn update(&self, id: i64, patch: &ListingPatch) -> Option<Listing> {
        let mut listings = self.listings.lock().expect("catalog mutex poisoned");
        let listing = listings.iter_mut().find(|l| l.id == id)?;
        listing.apply(patch);
        Some(listing.clone())
    }

    /// Removes the listing with `id`.
    ///
    /// ## Behavior
    /// Idempotent: removing an absent id is a no-op. Returns whether a
    /// listing was actually removed.
    pub fn remove(&self, id: i64) -> bool {
        let mut listings = self.listings.lock().expect("catalog mutex poisoned");
        let before = listings.len();
        listings.retain(|l| l.id != id);
        listings.len() != before
    }

    /// All listings in insertion order. No filtering, no pagination.
    pub fn list(&self) -> Vec<Listing> {
        self.listings.lock().expect("catalog mutex poisoned").clone()
    }

    /// The ids already in use, for id allocation.
    pub fn taken_ids(&self) -> HashSet<i64> {
        let listings = self.listings.lock().expect("catalog mutex poisoned");
        listings.iter().map(|l| l.id).collect()
    }

    pub fn len(&self) -> usize {
        self.listings.lock().expect("catalog mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
