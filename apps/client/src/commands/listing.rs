//! # Listing Commands
//!
//! Catalog CRUD invoked by the view layer.
//!
//! ## Catalog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Lifecycle                                    │
//! │                                                                         │
//! │  launch ──► seeded with 2 fixtures                                      │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  create_listing ──► validate ──► delay ──► append (unique id)           │
//! │  update_listing ──► validate ──► delay ──► merge, or silent no-op       │
//! │  delete_listing ──► remove, no-op if absent (no delay)                  │
//! │  list_listings  ──► insertion order, everything, no owner filter        │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  restart ──► back to the 2 fixtures (catalog is never persisted)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `list_listings` backs every catalog page, "my items" included: nothing
//! scopes listings to their creator (preserved behavior, see DESIGN.md).

use chrono::Utc;
use tracing::{debug, info};

use secondstyle_core::ids::allocate_id;
use secondstyle_core::validation::{validate_listing_draft, validate_listing_patch};
use secondstyle_core::{Listing, ListingDraft, ListingPatch};

use crate::error::ApiError;
use crate::latency::{simulate_network, ViewToken};
use crate::App;

/// Publishes a new listing from the "sell an item" form.
///
/// ## Behavior
/// - Validation, then the simulated delay, then the append — cancelling the
///   view mid-delay publishes nothing
/// - The id is the creation timestamp in milliseconds, bumped past any
///   taken id so catalog ids stay unique even within one millisecond
/// - Display fields (location, posted date, seller rating, image) get the
///   fixed placeholder values regardless of who is logged in
pub async fn create_listing(
    app: &App,
    view: &ViewToken,
    draft: ListingDraft,
) -> Result<Listing, ApiError> {
    debug!(title = %draft.title, "create_listing command");

    validate_listing_draft(&draft)?;
    simulate_network(app.network_delay(), view).await?;

    let id = allocate_id(Utc::now().timestamp_millis(), &app.catalog().taken_ids());
    let listing = Listing::from_draft(id, draft);
    app.catalog().insert(listing.clone());

    info!(listing_id = id, "Listing created");
    Ok(listing)
}

/// Applies an edit-form submission to an existing listing.
///
/// ## Behavior
/// - Only the `Some` fields of the patch are merged
/// - A missing id is a silent no-op by contract: the command returns
///   `Ok(None)` and the catalog is untouched
pub async fn update_listing(
    app: &App,
    view: &ViewToken,
    id: i64,
    patch: ListingPatch,
) -> Result<Option<Listing>, ApiError> {
    debug!(listing_id = id, "update_listing command");

    validate_listing_patch(&patch)?;
    simulate_network(app.network_delay(), view).await?;

    let updated = app.catalog().update(id, &patch);
    match &updated {
        Some(_) => info!(listing_id = id, "Listing updated"),
        None => debug!(listing_id = id, "update_listing on missing id, no-op"),
    }
    Ok(updated)
}

/// Deletes a listing by id.
///
/// ## Behavior
/// Immediate (no simulated delay, matching the original) and idempotent:
/// deleting an absent id is a no-op. After removal no catalog read returns
/// the listing.
pub fn delete_listing(app: &App, id: i64) -> Result<(), ApiError> {
    let removed = app.catalog().remove(id);
    debug!(listing_id = id, removed, "delete_listing command");
    Ok(())
}

/// Every listing, in insertion order.
///
/// No filtering, no pagination, no owner scoping.
pub fn list_listings(app: &App) -> Vec<Listing> {
    app.catalog().list()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::latency::ViewGuard;
    use crate::state::AppConfig;

    fn coat_draft() -> ListingDraft {
        ListingDraft {
            title: "Coat".to_string(),
            description: "Warm winter coat".to_string(),
            price: "40.00".to_string(),
            size: secondstyle_core::Size::L,
            category: secondstyle_core::Category::Veste,
            ..ListingDraft::default()
        }
    }

    async fn app() -> App {
        App::init(AppConfig::for_tests()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_contains_it_once() {
        let app = app().await;
        let view = ViewToken::detached();

        let listing = create_listing(&app, &view, coat_draft()).await.unwrap();

        let all = list_listings(&app);
        assert_eq!(all.len(), 3); // 2 fixtures + the coat
        assert_eq!(all.iter().filter(|l| l.id == listing.id).count(), 1);
    }

    #[tokio::test]
    async fn test_create_fills_display_defaults() {
        let app = app().await;
        let view = ViewToken::detached();

        let listing = create_listing(&app, &view, coat_draft()).await.unwrap();

        assert_eq!(listing.location, "Paris");
        assert_eq!(listing.posted_date, "Maintenant");
        assert_eq!(listing.seller_rating, "4.5");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let app = app().await;
        let view = ViewToken::detached();

        let err = create_listing(&app, &view, ListingDraft::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(list_listings(&app).len(), 2); // fixtures only
    }

    #[tokio::test]
    async fn test_update_changes_only_price() {
        let app = app().await;
        let view = ViewToken::detached();

        let listing = create_listing(&app, &view, coat_draft()).await.unwrap();
        let updated = update_listing(
            &app,
            &view,
            listing.id,
            ListingPatch {
                price: Some("10.00".to_string()),
                ..ListingPatch::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.price, "10.00");
        assert_eq!(updated.title, listing.title);
        assert_eq!(updated.size, listing.size);
        assert_eq!(updated.posted_date, listing.posted_date);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_silent_noop() {
        let app = app().await;
        let view = ViewToken::detached();
        let before = list_listings(&app);

        let result = update_listing(&app, &view, 999, ListingPatch::default())
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(list_listings(&app), before);
    }

    #[tokio::test]
    async fn test_delete_removes_from_every_read() {
        let app = app().await;
        let view = ViewToken::detached();

        let listing = create_listing(&app, &view, coat_draft()).await.unwrap();
        delete_listing(&app, listing.id).unwrap();

        assert!(list_listings(&app).iter().all(|l| l.id != listing.id));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_catalog_unchanged() {
        let app = app().await;
        let before = list_listings(&app);

        delete_listing(&app, 999).unwrap();
        delete_listing(&app, 999).unwrap(); // and it stays idempotent

        assert_eq!(list_listings(&app), before);
    }

    #[tokio::test]
    async fn test_cancelled_create_publishes_nothing() {
        let app = app().await;
        let guard = ViewGuard::new();
        let token = guard.token();
        guard.unmount();

        let err = create_listing(&app, &token, coat_draft()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Cancelled);
        assert_eq!(list_listings(&app).len(), 2);
    }

    #[tokio::test]
    async fn test_ids_stay_unique_under_rapid_creation() {
        let app = app().await;
        let view = ViewToken::detached();

        let mut ids = std::collections::HashSet::new();
        for _ in 0..10 {
            let listing = create_listing(&app, &view, coat_draft()).await.unwrap();
            assert!(ids.insert(listing.id), "duplicate listing id {}", listing.id);
        }
    }
}
