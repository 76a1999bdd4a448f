//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use trainer_core::model::CatalogError;

/// Errors emitted while assembling a `GameStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
