//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Domain inputs the storefront can absorb (unknown categories, empty
/// searches, absent cart lines) never surface here.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Cart accessed outside an active session.
    #[error("Cart store is not initialized: use it within an active cart session")]
    StoreUninitialized,

    /// Catalog data violates a data-model invariant.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
