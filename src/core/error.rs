//! Typed error handling for the catalog
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a record or argument failed construction checks
//! - [`CatalogError`]: anything a controller or provider operation can fail with
//!
//! Data providers return `anyhow::Result` (the same seam the storage layer
//! uses), so typed errors convert into `anyhow::Error` and can be recovered
//! with `downcast_ref` when a caller needs to match on them.
//!
//! # Example
//!
//! ```rust,ignore
//! match controller.create_from(draft).await {
//!     Ok(()) => {}
//!     Err(CatalogError::Validation(e)) => println!("Fix the form: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised while constructing a record or checking an argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is missing or blank
    #[error("Field '{field}' is required")]
    Required { field: String },

    /// A date field could not be parsed as a calendar date
    #[error("Field '{field}' must be a valid date (got '{value}')")]
    InvalidDate { field: String, value: String },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } | ValidationError::InvalidDate { field, .. } => {
                field
            }
        }
    }
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// The main error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input rejected before reaching the data provider
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with the given id
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },

    /// A record with the given id already exists
    #[error("{entity_type} with id '{id}' already exists")]
    AlreadyExists { entity_type: String, id: String },

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by the data provider, kept verbatim
    #[error(transparent)]
    Provider(anyhow::Error),
}

impl CatalogError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::NotFound { .. } => "NOT_FOUND",
            CatalogError::AlreadyExists { .. } => "ALREADY_EXISTS",
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Provider(_) => "PROVIDER_ERROR",
        }
    }

    /// Wrap a provider failure, unwrapping typed catalog errors it carries.
    pub fn from_provider(err: anyhow::Error) -> Self {
        match err.downcast::<CatalogError>() {
            Ok(typed) => typed,
            Err(err) => match err.downcast::<ValidationError>() {
                Ok(validation) => CatalogError::Validation(validation),
                Err(err) => CatalogError::Provider(err),
            },
        }
    }
}

/// Convenience alias for catalog results
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_validation_message() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "Field 'name' is required");
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_invalid_date_message() {
        let err = ValidationError::InvalidDate {
            field: "date_release".to_string(),
            value: "2024-13-01".to_string(),
        };
        assert!(err.to_string().contains("2024-13-01"));
        assert_eq!(err.field(), "date_release");
    }

    #[test]
    fn test_error_codes() {
        let err = CatalogError::NotFound {
            entity_type: "product".to_string(),
            id: "p-1".to_string(),
        };
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "product with id 'p-1' not found");

        let err = CatalogError::Config("bad".to_string());
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_provider_message_is_verbatim() {
        let err = CatalogError::from_provider(anyhow!("Error code: 500\nMessage: boom"));
        assert_eq!(err.error_code(), "PROVIDER_ERROR");
        assert_eq!(err.to_string(), "Error code: 500\nMessage: boom");
    }

    #[test]
    fn test_from_provider_recovers_typed_errors() {
        let typed = anyhow::Error::new(CatalogError::AlreadyExists {
            entity_type: "product".to_string(),
            id: "p-1".to_string(),
        });
        assert!(matches!(
            CatalogError::from_provider(typed),
            CatalogError::AlreadyExists { .. }
        ));

        let validation = anyhow::Error::new(ValidationError::Required {
            field: "id".to_string(),
        });
        assert!(matches!(
            CatalogError::from_provider(validation),
            CatalogError::Validation(_)
        ));
    }
}
