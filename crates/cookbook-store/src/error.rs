//! Error types for the store module.

use cookbook_core::{QueryError, RegistryError, ResolveError};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entry was rejected by registry validation.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A summary query failed.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Resolving an entry failed.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// A writer panicked while holding the registry lock.
    #[error("registry lock poisoned")]
    LockPoisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
