#![forbid(unsafe_code)]

pub mod records;
pub mod repository;

pub use records::{catalog_to_json, parse_catalog_json, ExerciseRecord, MethodRecord};
pub use repository::{CatalogRepository, InMemoryCatalogRepository, Storage, StorageError};
