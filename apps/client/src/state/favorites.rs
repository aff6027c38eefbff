//! # Favorites State
//!
//! Per-listing favorite toggles.
//!
//! Deliberately ephemeral: the set lives for the process and is never
//! written to the durable store, matching the throwaway scope the original
//! gives this feature. Promoting it to a per-account durable set was
//! considered and not taken (DESIGN.md).

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// In-memory favorite set, keyed by listing id.
#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    favorites: Arc<Mutex<HashSet<i64>>>,
}

impl FavoritesState {
    pub fn new() -> Self {
        FavoritesState::default()
    }

    /// Flips the favorite state of a listing and returns the NEW state.
    ///
    /// No existence check against the catalog: a favorite can outlive its
    /// listing, exactly as a toggled card could in the original.
    pub fn toggle(&self, listing_id: i64) -> bool {
        let mut favorites = self.favorites.lock().expect("favorites mutex poisoned");
        if favorites.remove(&listing_id) {
            false
        } else {
            favorites.insert(listing_id);
            true
        }
    }

    pub fn is_favorite(&self, listing_id: i64) -> bool {
        self.favorites
            .lock()
            .expect("favorites mutex poisoned")
            .contains(&listing_id)
    }

    pub fn count(&self) -> usize {
        self.favorites.lock().expect("favorites mutex poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_new_state() {
        let favorites = FavoritesState::new();
        assert!(favorites.toggle(1)); // on
        assert!(!favorites.toggle(1)); // off again
        assert!(!favorites.is_favorite(1));
    }

    #[test]
    fn test_toggles_are_independent_per_listing() {
        let favorites = FavoritesState::new();
        favorites.toggle(1);
        favorites.toggle(2);
        favorites.toggle(2);

        assert!(favorites.is_favorite(1));
        assert!(!favorites.is_favorite(2));
        assert_eq!(favorites.count(), 1);
    }
}
