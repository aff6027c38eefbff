//! # Error Types
//!
//! Domain errors for secondstyle-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  secondstyle-core errors (this file)                                   │
//! │  ├── CoreError         - Domain failures (credentials, validation)    │
//! │  └── FieldErrors       - Per-field validation map (validation.rs)     │
//! │                                                                         │
//! │  secondstyle-store errors (separate crate)                             │
//! │  └── StoreError        - Durable storage failures                      │
//! │                                                                         │
//! │  Command-layer errors (apps/client)                                    │
//! │  └── ApiError          - What the view sees (serialized)               │
//! │                                                                         │
//! │  Flow: FieldErrors → CoreError → ApiError → View                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::validation::FieldErrors;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Login failed. One fixed message for both "no such email" and "wrong
    /// password": the caller must not be able to tell which field was wrong.
    #[error("Email ou mot de passe incorrect")]
    InvalidCredentials,

    /// A form submission failed validation; the map carries one message per
    /// invalid field.
    #[error("{0}")]
    Validation(#[from] FieldErrors),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // The message names both fields and blames neither.
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Email ou mot de passe incorrect"
        );
    }

    #[test]
    fn test_field_errors_convert_to_core_error() {
        let mut fields = FieldErrors::new();
        fields.insert("password", "too short");
        let err: CoreError = fields.into();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
