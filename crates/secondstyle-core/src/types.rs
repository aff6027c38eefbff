//! # Domain Types
//!
//! Core domain types for the SecondStyle client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Account      │   │    Session      │   │    Listing      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ms stamp)  │   │  identity       │   │  id (ms stamp)  │       │
//! │  │  name           │   │  token          │   │  title, price   │       │
//! │  │  email          │   │                 │   │  size/category  │       │
//! │  │  password       │   │                 │   │  condition      │       │
//! │  │  registered_at  │   │                 │   │  display fields │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Size        │   │    Category     │   │   Condition     │       │
//! │  │  XS..XXL        │   │  T-shirt..      │   │  Neuf..correct  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Enum serde labels are the exact display strings the catalog form      │
//! │  offers, so serialized values round-trip through the view unchanged.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Entities carry a single id: the creation-time millisecond timestamp,
//! bumped past collisions by [`crate::ids::allocate_id`] so ids stay unique
//! within their store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::{ListingDraft, ListingPatch};
use crate::{DEFAULT_LOCATION, DEFAULT_POSTED_DATE, DEFAULT_SELLER_RATING, PLACEHOLDER_IMAGE};

// =============================================================================
// Account
// =============================================================================

/// A registered account in the identity directory.
///
/// Accounts are created by registration, never mutated, and never deleted
/// (no account-deletion path exists). The full account, password included,
/// is what the directory persists; the command layer exposes a
/// password-free summary to the view.
///
/// ## Security
/// The password is stored and compared verbatim, and the session token is an
/// unverified display string. Both are preserved behaviors of the client
/// being reimplemented and are unsuitable for any real deployment; see
/// DESIGN.md.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Creation-time millisecond timestamp.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Directory lookup key. NOT unique by construction: registering the
    /// same email twice creates two distinct accounts.
    pub email: String,

    /// Plaintext password, compared by exact string equality.
    pub password: String,

    /// When the account was registered.
    pub registered_at: DateTime<Utc>,
}

impl Account {
    /// Exact, case-sensitive credential match on both fields.
    ///
    /// No normalization and no hashing; this is the whole credential check.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

// =============================================================================
// Session
// =============================================================================

/// The single current authenticated identity plus its issued token.
///
/// At most one session exists per running instance. The token is never
/// validated anywhere; any non-empty value satisfies "authenticated".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The authenticated account.
    pub identity: Account,

    /// Token minted at login: `token-<accountId>-<millis>`.
    pub token: String,
}

impl Session {
    /// Mints a new session for `identity` at the given wall-clock instant.
    ///
    /// ## Token Format
    /// `token-<accountId>-<now_ms>` — informational only, never verified.
    pub fn mint(identity: Account, now_ms: i64) -> Self {
        let token = format!("token-{}-{}", identity.id, now_ms);
        Session { identity, token }
    }
}

// =============================================================================
// Size
// =============================================================================

/// Clothing size offered by the listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XS")]
    Xs,
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
}

impl Size {
    /// The display label, identical to the serde representation.
    pub const fn label(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }
}

impl Default for Size {
    /// The listing form pre-selects M.
    fn default() -> Self {
        Size::M
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Category
// =============================================================================

/// Listing category. Labels are the French display strings of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "T-shirt")]
    TShirt,
    Pantalon,
    Robe,
    Veste,
    Chaussures,
    Accessoires,
}

impl Category {
    pub const fn label(&self) -> &'static str {
        match self {
            Category::TShirt => "T-shirt",
            Category::Pantalon => "Pantalon",
            Category::Robe => "Robe",
            Category::Veste => "Veste",
            Category::Chaussures => "Chaussures",
            Category::Accessoires => "Accessoires",
        }
    }
}

impl Default for Category {
    /// The listing form pre-selects "T-shirt".
    fn default() -> Self {
        Category::TShirt
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Condition
// =============================================================================

/// Garment condition scale, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Neuf avec étiquettes")]
    NeufAvecEtiquettes,
    #[serde(rename = "Excellent état")]
    ExcellentEtat,
    #[serde(rename = "Très bon état")]
    TresBonEtat,
    #[serde(rename = "Bon état")]
    BonEtat,
    #[serde(rename = "État correct")]
    EtatCorrect,
}

impl Condition {
    pub const fn label(&self) -> &'static str {
        match self {
            Condition::NeufAvecEtiquettes => "Neuf avec étiquettes",
            Condition::ExcellentEtat => "Excellent état",
            Condition::TresBonEtat => "Très bon état",
            Condition::BonEtat => "Bon état",
            Condition::EtatCorrect => "État correct",
        }
    }
}

impl Default for Condition {
    /// The listing form pre-selects "Très bon état".
    fn default() -> Self {
        Condition::TresBonEtat
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Listing
// =============================================================================

/// A sale listing in the catalog.
///
/// Listings carry no owner reference: the catalog attributes nothing to an
/// account, and ownership is a display-only concern of the view layer.
///
/// ## Display Fields
/// `location`, `posted_date` and `seller_rating` are display strings filled
/// with fixed defaults at creation regardless of the current user;
/// `posted_date` is not a real date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Creation-time millisecond timestamp, unique within the catalog.
    pub id: i64,

    pub title: String,

    pub description: String,

    /// Price in euros as a decimal string (e.g. "25.00"). Validated only as
    /// the form validates it: present and parseable as a non-negative number.
    pub price: String,

    pub size: Size,

    pub category: Category,

    pub condition: Condition,

    pub brand: String,

    pub color: String,

    /// Fixed to [`DEFAULT_LOCATION`] at creation.
    pub location: String,

    /// Display string, fixed to [`DEFAULT_POSTED_DATE`] at creation.
    pub posted_date: String,

    /// Display string, fixed to [`DEFAULT_SELLER_RATING`] at creation.
    pub seller_rating: String,

    /// Image URI, or the portable placeholder.
    pub image: String,
}

impl Listing {
    /// Builds a listing from a submitted draft.
    ///
    /// ## Behavior
    /// The draft supplies the form fields; the display fields get the fixed
    /// placeholder values. The id is allocated by the caller (the catalog
    /// store owns uniqueness).
    pub fn from_draft(id: i64, draft: ListingDraft) -> Self {
        Listing {
            id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            size: draft.size,
            category: draft.category,
            condition: draft.condition,
            brand: draft.brand,
            color: draft.color,
            location: DEFAULT_LOCATION.to_string(),
            posted_date: DEFAULT_POSTED_DATE.to_string(),
            seller_rating: DEFAULT_SELLER_RATING.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Merges the `Some` fields of `patch` onto this listing.
    ///
    /// ## Behavior
    /// Field-by-field overwrite; absent fields are left intact. The id and
    /// the display fields are not editable through a patch.
    pub fn apply(&mut self, patch: &ListingPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = &patch.price {
            self.price = price.clone();
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(brand) = &patch.brand {
            self.brand = brand.clone();
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
