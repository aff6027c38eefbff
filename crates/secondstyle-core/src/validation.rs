//! # Validation Module
//!
//! Pure form validation for the SecondStyle client.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View layer                                                   │
//! │  ├── Field presence hints (required inputs, number fields)             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (command layer calls it before any mutation)     │
//! │  ├── Pure functions over the typed form records                        │
//! │  └── Result is a field → message map rendered next to each input       │
//! │                                                                         │
//! │  There is no server, so this is the final check: a submission that     │
//! │  passes here is applied to the stores unconditionally.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are the user-facing French strings the client displays.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::forms::{ListingDraft, ListingPatch, RegistrationForm};
use crate::MIN_PASSWORD_LENGTH;

// =============================================================================
// Messages
// =============================================================================

/// Shown under the password field when it is too short.
pub const MSG_PASSWORD_TOO_SHORT: &str =
    "Le mot de passe doit contenir au moins 6 caractères";

/// Shown under the confirmation field when it differs from the password.
pub const MSG_PASSWORD_MISMATCH: &str = "Les mots de passe ne correspondent pas";

/// Shown under any required field left empty.
pub const MSG_REQUIRED: &str = "Ce champ est requis";

/// Shown under the price field when it does not parse as a non-negative number.
pub const MSG_PRICE_INVALID: &str = "Le prix doit être un nombre positif";

// =============================================================================
// Field Errors
// =============================================================================

/// A field → message map describing every invalid field of a submission.
///
/// The view renders each message next to its field, so the map keys are the
/// camelCase field names the view knows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub fields: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors::default()
    }

    /// Records a message for a field, overwriting any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(())` when no field failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Result type for validation operations.
pub type ValidationResult = Result<(), FieldErrors>;

// =============================================================================
// Registration
// =============================================================================

/// Validates the registration form.
///
/// ## Rules
/// - name, email, password must be non-empty
/// - password must have at least [`MIN_PASSWORD_LENGTH`] characters
/// - confirmation must equal the password
///
/// Multiple failures are reported together, one message per field.
/// Note what is deliberately absent: no email format check and no
/// duplicate-email check — registration always succeeds once this passes.
pub fn validate_registration(form: &RegistrationForm) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", MSG_REQUIRED);
    }
    if form.email.trim().is_empty() {
        errors.insert("email", MSG_REQUIRED);
    }

    if form.password.is_empty() {
        errors.insert("password", MSG_REQUIRED);
    } else if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert("password", MSG_PASSWORD_TOO_SHORT);
    }

    if form.confirm_password != form.password {
        errors.insert("confirmPassword", MSG_PASSWORD_MISMATCH);
    }

    errors.into_result()
}

// =============================================================================
// Listing Draft
// =============================================================================

/// Validates the "sell an item" form.
///
/// ## Rules
/// - title, description, price must be non-empty
/// - price must parse as a finite, non-negative number
///
/// Brand and color are optional. The price stays a string after validation;
/// the catalog never does arithmetic on it.
pub fn validate_listing_draft(draft: &ListingDraft) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if draft.title.trim().is_empty() {
        errors.insert("title", MSG_REQUIRED);
    }
    if draft.description.trim().is_empty() {
        errors.insert("description", MSG_REQUIRED);
    }

    let price = draft.price.trim();
    if price.is_empty() {
        errors.insert("price", MSG_REQUIRED);
    } else {
        match price.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {}
            _ => errors.insert("price", MSG_PRICE_INVALID),
        }
    }

    errors.into_result()
}

// =============================================================================
// Listing Patch
// =============================================================================

/// Validates an edit-form submission.
///
/// ## Rules
/// Absent fields are untouched and pass; present fields obey the same rules
/// as the create form (title/description non-empty, price parseable and
/// non-negative).
pub fn validate_listing_patch(patch: &ListingPatch) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            errors.insert("title", MSG_REQUIRED);
        }
    }
    if let Some(description) = &patch.description {
        if description.trim().is_empty() {
            errors.insert("description", MSG_REQUIRED);
        }
    }
    if let Some(price) = &patch.price {
        let price = price.trim();
        if price.is_empty() {
            errors.insert("price", MSG_REQUIRED);
        } else {
            match price.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => {}
                _ => errors.insert("price", MSG_PRICE_INVALID),
            }
        }
    }

    errors.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegistrationForm {
        RegistrationForm {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration(&valid_registration()).is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let form = RegistrationForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..valid_registration()
        };
        let errors = validate_registration(&form).unwrap_err();
        assert_eq!(errors.get("password"), Some(MSG_PASSWORD_TOO_SHORT));
        assert!(errors.get("confirmPassword").is_none());
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let form = RegistrationForm {
            confirm_password: "different".to_string(),
            ..valid_registration()
        };
        let errors = validate_registration(&form).unwrap_err();
        assert_eq!(errors.get("confirmPassword"), Some(MSG_PASSWORD_MISMATCH));
    }

    #[test]
    fn test_short_and_mismatched_reported_together() {
        let form = RegistrationForm {
            password: "abc".to_string(),
            confirm_password: "xyz".to_string(),
            ..valid_registration()
        };
        let errors = validate_registration(&form).unwrap_err();
        assert_eq!(errors.fields.len(), 2);
    }

    #[test]
    fn test_exactly_six_characters_accepted() {
        let form = RegistrationForm {
            password: "123456".to_string(),
            confirm_password: "123456".to_string(),
            ..valid_registration()
        };
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn test_duplicate_email_not_checked_here() {
        // Uniqueness is deliberately unguarded; the same form twice is fine.
        assert!(validate_registration(&valid_registration()).is_ok());
        assert!(validate_registration(&valid_registration()).is_ok());
    }

    fn valid_draft() -> ListingDraft {
        ListingDraft {
            title: "Coat".to_string(),
            description: "Warm coat".to_string(),
            price: "40.00".to_string(),
            ..ListingDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_listing_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn test_draft_requires_title_description_price() {
        let errors = validate_listing_draft(&ListingDraft::default()).unwrap_err();
        assert_eq!(errors.get("title"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("description"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("price"), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_draft_rejects_negative_or_garbage_price() {
        for bad in ["-1", "abc", "NaN", "inf"] {
            let draft = ListingDraft {
                price: bad.to_string(),
                ..valid_draft()
            };
            let errors = validate_listing_draft(&draft).unwrap_err();
            assert_eq!(errors.get("price"), Some(MSG_PRICE_INVALID), "price {:?}", bad);
        }
    }

    #[test]
    fn test_draft_accepts_zero_price() {
        let draft = ListingDraft {
            price: "0".to_string(),
            ..valid_draft()
        };
        assert!(validate_listing_draft(&draft).is_ok());
    }

    #[test]
    fn test_brand_and_color_optional() {
        let draft = valid_draft();
        assert!(draft.brand.is_empty());
        assert!(validate_listing_draft(&draft).is_ok());
    }

    #[test]
    fn test_empty_patch_passes() {
        assert!(validate_listing_patch(&ListingPatch::default()).is_ok());
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        let patch = ListingPatch {
            price: Some("10.00".to_string()),
            ..ListingPatch::default()
        };
        assert!(validate_listing_patch(&patch).is_ok());

        let patch = ListingPatch {
            title: Some("  ".to_string()),
            price: Some("-3".to_string()),
            ..ListingPatch::default()
        };
        let errors = validate_listing_patch(&patch).unwrap_err();
        assert_eq!(errors.get("title"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("price"), Some(MSG_PRICE_INVALID));
        assert!(errors.get("description").is_none());
    }
}
