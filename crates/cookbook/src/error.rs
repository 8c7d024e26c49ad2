//! Error types for the Cookbook.

use cookbook_core::{QueryError, RegistryError, ResolveError};
use cookbook_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Cookbook operations.
#[derive(Debug, Error)]
pub enum CookbookError {
    /// The entry was rejected at registration.
    #[error("invalid entry: {0}")]
    Registry(#[from] RegistryError),

    /// A summary query failed.
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    /// Resolving an entry failed.
    #[error("unresolvable entry: {0}")]
    Resolve(#[from] ResolveError),

    /// Storage failure unrelated to the request itself.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for CookbookError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Registry(e) => CookbookError::Registry(e),
            StoreError::Query(e) => CookbookError::Query(e),
            StoreError::Resolve(e) => CookbookError::Resolve(e),
            e @ StoreError::LockPoisoned => CookbookError::Store(e),
        }
    }
}

impl CookbookError {
    /// True when the caller's input caused the failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, CookbookError::Store(_))
    }
}

/// Result type for Cookbook operations.
pub type Result<T> = std::result::Result<T, CookbookError>;
