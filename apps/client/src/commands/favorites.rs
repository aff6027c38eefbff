//! # Favorite Commands
//!
//! The one operation the favorites stub supports.

use tracing::debug;

use crate::App;

/// Flips the favorite state of a listing, returning the NEW state.
///
/// Ephemeral by design: favorites live in memory for the process and are
/// never persisted. No delay and no catalog existence check — a toggle is
/// as cheap and unchecked as flipping the heart on a card was.
pub fn toggle_favorite(app: &App, listing_id: i64) -> bool {
    let favorited = app.favorites().toggle(listing_id);
    debug!(listing_id, favorited, "toggle_favorite command");
    favorited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let app = App::init(AppConfig::for_tests()).await.unwrap();

        assert!(toggle_favorite(&app, 1));
        assert!(app.favorites().is_favorite(1));
        assert!(!toggle_favorite(&app, 1));
        assert!(!app.favorites().is_favorite(1));
    }
}
