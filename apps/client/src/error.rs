//! # API Error Type
//!
//! Unified error type for the command layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in SecondStyle                            │
//! │                                                                         │
//! │  View                        Command Layer                              │
//! │  ────                        ─────────────                              │
//! │                                                                         │
//! │  login(email, password)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function: Result<T, ApiError>                           │  │
//! │  │                                                                  │  │
//! │  │  Credential miss? ── CoreError::InvalidCredentials ──┐           │  │
//! │  │  Bad form input?  ── FieldErrors (per-field map) ────┼─ ApiError │  │
//! │  │  Storage failure? ── StoreError (detail logged) ─────┤           │  │
//! │  │  View unmounted?  ── Cancelled ──────────────────────┘           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The view renders `message` (and `fields` next to inputs when set).    │
//! │  Storage detail never reaches the view; it goes to the log.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::error;

use secondstyle_core::{CoreError, FieldErrors};
use secondstyle_store::StoreError;

/// API error returned from command functions.
///
/// ## Serialization
/// What the view receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "password: Le mot de passe doit contenir au moins 6 caractères",
///   "fields": { "password": "Le mot de passe doit contenir au moins 6 caractères" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,

    /// Field → message map for form errors, rendered next to each input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Login failed; deliberately silent about which field was wrong.
    InvalidCredentials,

    /// A form submission failed validation.
    ValidationError,

    /// The durable store failed.
    StorageError,

    /// The issuing view unmounted before the operation completed.
    Cancelled,

    /// Anything else.
    Internal,
}

impl ApiError {
    /// Creates a new API error with no field map.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: None,
        }
    }

    /// The fixed, field-agnostic login failure.
    pub fn invalid_credentials() -> Self {
        ApiError::new(
            ErrorCode::InvalidCredentials,
            CoreError::InvalidCredentials.to_string(),
        )
    }

    /// A validation failure carrying the per-field messages.
    pub fn validation(errors: FieldErrors) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: errors.to_string(),
            fields: Some(errors.fields),
        }
    }

    /// The issuing view unmounted mid-operation.
    pub fn cancelled() -> Self {
        ApiError::new(ErrorCode::Cancelled, "Opération annulée")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::validation(errors)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidCredentials => ApiError::invalid_credentials(),
            CoreError::Validation(errors) => ApiError::validation(errors),
        }
    }
}

/// Converts storage errors to API errors.
///
/// The actual error goes to the log; the view gets a generic message.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "Store operation failed");
        ApiError::new(ErrorCode::StorageError, "Échec du stockage local")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_field_map() {
        let mut fields = FieldErrors::new();
        fields.insert("password", "trop court");
        let err = ApiError::validation(fields);

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.fields.as_ref().unwrap().get("password").map(String::as_str),
            Some("trop court")
        );
    }

    #[test]
    fn test_invalid_credentials_is_generic() {
        let err = ApiError::invalid_credentials();
        assert_eq!(err.message, "Email ou mot de passe incorrect");
        assert!(err.fields.is_none());
    }

    #[test]
    fn test_fields_omitted_from_json_when_absent() {
        let json = serde_json::to_value(ApiError::cancelled()).unwrap();
        assert!(json.get("fields").is_none());
        assert_eq!(json.get("code").unwrap(), "CANCELLED");
    }
}
