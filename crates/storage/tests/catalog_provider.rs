use std::sync::Arc;

use storage::repository::{CatalogRepository, InMemoryCatalogRepository, Storage};
use storage::{catalog_to_json, StorageError};
use trainer_core::fixtures::{method_fixture, python_method};
use trainer_core::model::{CatalogError, MethodCategory, MethodId, ProgrammingLanguage};

#[tokio::test]
async fn json_document_feeds_a_validated_catalog() {
    let methods = vec![
        python_method("py_list_len", 2),
        method_fixture(
            "js_array_push",
            ProgrammingLanguage::JavaScript,
            MethodCategory::Array,
            3,
        ),
    ];
    let json = catalog_to_json(&methods).unwrap();

    let repo = InMemoryCatalogRepository::from_json(&json).unwrap();
    let storage = Storage::new(Arc::new(repo.clone()));
    let catalog = storage.load_catalog().await.unwrap();

    assert_eq!(catalog.total_exercises(), 5);
    let js: Vec<_> = catalog
        .methods_for(ProgrammingLanguage::JavaScript, None)
        .map(|m| m.id().as_str())
        .collect();
    assert_eq!(js, vec!["js_array_push"]);

    let fetched = repo
        .get_method(&MethodId::new("py_list_len").unwrap())
        .await
        .unwrap();
    assert_eq!(fetched, methods[0]);
}

#[tokio::test]
async fn duplicate_exercise_ids_fail_catalog_load() {
    let repo = InMemoryCatalogRepository::new();
    let first = python_method("py_list_len", 1);
    repo.upsert_method(&first).await.unwrap();

    // Same exercise ids under a different method id.
    let json = catalog_to_json(&[first]).unwrap().replace(
        "\"id\": \"py_list_len\"",
        "\"id\": \"py_list_len_copy\"",
    );
    let copy = InMemoryCatalogRepository::from_json(&json).unwrap();
    for method in copy.list_methods().await.unwrap() {
        repo.upsert_method(&method).await.unwrap();
    }

    let err = Storage::new(Arc::new(repo)).load_catalog().await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::Catalog(CatalogError::DuplicateExercise(_))
    ));
}

#[tokio::test]
async fn empty_provider_loads_empty_catalog() {
    let catalog = Storage::in_memory().load_catalog().await.unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.total_exercises(), 0);
}
