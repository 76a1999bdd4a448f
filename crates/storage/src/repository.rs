use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use trainer_core::model::{Catalog, CatalogError, Method, MethodId};

use crate::records::parse_catalog_json;

/// Errors surfaced by catalog providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid catalog data: {0}")]
    Invalid(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Source of exercise methods, read once when a trainer starts.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Persist or replace a method, keeping its position if it already exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the method cannot be stored.
    async fn upsert_method(&self, method: &Method) -> Result<(), StorageError>;

    /// Fetch a method by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_method(&self, id: &MethodId) -> Result<Method, StorageError>;

    /// All methods in provider order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot be read.
    async fn list_methods(&self) -> Result<Vec<Method>, StorageError>;
}

/// Simple in-memory catalog for tests and bundled content.
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    methods: Arc<Mutex<Vec<Method>>>,
}

impl InMemoryCatalogRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_methods(methods: Vec<Method>) -> Self {
        Self {
            methods: Arc::new(Mutex::new(methods)),
        }
    }

    /// Builds a repository from a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be parsed or validated.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let methods = parse_catalog_json(raw)?;
        tracing::debug!(methods = methods.len(), "loaded catalog document");
        Ok(Self::with_methods(methods))
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn upsert_method(&self, method: &Method) -> Result<(), StorageError> {
        let mut guard = self
            .methods
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.iter_mut().find(|m| m.id() == method.id()) {
            Some(existing) => *existing = method.clone(),
            None => guard.push(method.clone()),
        }
        Ok(())
    }

    async fn get_method(&self, id: &MethodId) -> Result<Method, StorageError> {
        let guard = self
            .methods
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|m| m.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_methods(&self) -> Result<Vec<Method>, StorageError> {
        let guard = self
            .methods
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

/// Catalog provider behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Storage {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCatalogRepository::new()))
    }

    /// Reads every method and validates them as one catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on provider failures or `StorageError::Catalog`
    /// when the methods do not form a valid catalog.
    pub async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        let methods = self.catalog.list_methods().await?;
        let catalog = Catalog::new(methods).inspect_err(|e| {
            tracing::warn!(error = %e, "catalog failed validation");
        })?;
        tracing::info!(
            methods = catalog.methods().len(),
            exercises = catalog.total_exercises(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
