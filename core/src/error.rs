//! Error types for the list store.
//!
//! # Design
//! Lookups by id are the only operations that can miss, so the error enum
//! has a single variant. It is returned as a value; the host decides how to
//! surface it (the HTTP layer maps it to 404).

/// Errors returned by `ListStore` lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No stored item carries the requested id.
    #[error("list item {id} not found")]
    NotFound { id: u64 },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
