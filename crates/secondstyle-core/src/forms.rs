//! # Form Records
//!
//! Typed records for the forms the view layer submits.
//!
//! Each form is an explicit struct with named fields rather than a loose
//! dictionary; validation lives in [`crate::validation`] as pure functions
//! over these records.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Condition, Size};

// =============================================================================
// Registration
// =============================================================================

/// The registration form.
///
/// `confirm_password` exists only for validation; it is never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// =============================================================================
// Listing Create
// =============================================================================

/// The "sell an item" form.
///
/// The selects are pre-populated (M / T-shirt / Très bon état), matching
/// the defaults of the enum types; text fields start empty. Brand and color
/// are optional free text and may stay empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    /// Decimal string as typed into the price field.
    pub price: String,
    pub size: Size,
    pub category: Category,
    pub condition: Condition,
    pub brand: String,
    pub color: String,
}

impl Default for ListingDraft {
    fn default() -> Self {
        ListingDraft {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            size: Size::default(),
            category: Category::default(),
            condition: Condition::default(),
            brand: String::new(),
            color: String::new(),
        }
    }
}

// =============================================================================
// Listing Edit
// =============================================================================

/// Partial update for an existing listing.
///
/// Only `Some` fields are merged; see [`crate::types::Listing::apply`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub size: Option<Size>,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub brand: Option<String>,
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults_match_form_preselection() {
        let draft = ListingDraft::default();
        assert_eq!(draft.size, Size::M);
        assert_eq!(draft.category, Category::TShirt);
        assert_eq!(draft.condition, Condition::TresBonEtat);
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_empty_patch_serializes_all_null() {
        let json = serde_json::to_value(ListingPatch::default()).unwrap();
        assert!(json.get("price").unwrap().is_null());
    }
}
