//! # Id Allocation
//!
//! Millisecond-timestamp ids for accounts and listings.
//!
//! Ids are the wall-clock creation instant in milliseconds, which reads
//! naturally in tokens (`token-<id>-<ms>`) but collides under rapid
//! creation within the same millisecond. Uniqueness within a store is a
//! hard invariant, so allocation bumps past taken ids instead of trusting
//! the clock.
//!
//! The clock itself is injected: callers pass `now_ms`, this module never
//! reads time.

use std::collections::HashSet;

/// Allocates an id at or after `now_ms` that is not in `taken`.
///
/// ## Behavior
/// Returns `now_ms` when free; otherwise increments until an unused value
/// is found. Two allocations in the same millisecond therefore yield
/// `now_ms` and `now_ms + 1`, never a duplicate.
pub fn allocate_id(now_ms: i64, taken: &HashSet<i64>) -> i64 {
    let mut id = now_ms;
    while taken.contains(&id) {
        id += 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_timestamp_used_directly() {
        assert_eq!(allocate_id(1_000, &HashSet::new()), 1_000);
    }

    #[test]
    fn test_collision_bumps_forward() {
        let taken: HashSet<i64> = [1_000, 1_001].into_iter().collect();
        assert_eq!(allocate_id(1_000, &taken), 1_002);
    }

    #[test]
    fn test_rapid_allocation_stays_unique() {
        let mut taken = HashSet::new();
        for _ in 0..100 {
            // Same millisecond every time, as a burst of creations would see.
            let id = allocate_id(5_000, &taken);
            assert!(taken.insert(id), "duplicate id {}", id);
        }
        assert_eq!(taken.len(), 100);
    }
}
