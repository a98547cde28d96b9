// Copyright 2025 Cowboy AI, LLC.

//! Error types for breed resolution

use thiserror::Error;

/// Entity type label used for canonical breed lookups
pub const BREED_ENTITY: &str = "Breed";

/// Entity type label used for custom breed lookups
pub const CUSTOM_BREED_ENTITY: &str = "CustomBreed";

/// Errors that can occur while resolving breed attributes
#[derive(Debug, Clone, Error)]
pub enum BreedError {
    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound {
        /// Type of entity that wasn't found
        entity_type: String,
        /// ID that was searched for
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// External service error
    #[error("External service error: {service} - {message}")]
    ExternalServiceError {
        /// Name of the external service
        service: String,
        /// Error message from the service
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for breed operations
pub type BreedResult<T> = Result<T, BreedError>;

impl From<serde_json::Error> for BreedError {
    fn from(err: serde_json::Error) -> Self {
        BreedError::SerializationError(err.to_string())
    }
}

impl BreedError {
    /// Not-found error for a canonical breed
    pub fn breed_not_found(id: impl ToString) -> Self {
        BreedError::EntityNotFound {
            entity_type: BREED_ENTITY.to_string(),
            id: id.to_string(),
        }
    }

    /// Not-found error for a custom breed definition
    pub fn custom_breed_not_found(id: impl ToString) -> Self {
        BreedError::EntityNotFound {
            entity_type: CUSTOM_BREED_ENTITY.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        BreedError::ValidationError(msg.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, BreedError::EntityNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, BreedError::ValidationError(_))
    }
}
