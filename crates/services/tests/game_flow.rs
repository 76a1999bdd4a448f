use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{GameError, GameStore, SessionPhase, TrainerSettings};
use storage::repository::{CatalogRepository, InMemoryCatalogRepository, Storage, StorageError};
use trainer_core::fixtures::python_method;
use trainer_core::model::{ExerciseId, Method, MethodId};
use trainer_core::time::fixed_clock;

fn two_method_storage() -> Storage {
    let repo = InMemoryCatalogRepository::with_methods(vec![
        python_method("py_list_len", 2),
        python_method("py_list_append", 2),
    ]);
    Storage::new(Arc::new(repo))
}

struct OfflineCatalog;

#[async_trait]
impl CatalogRepository for OfflineCatalog {
    async fn upsert_method(&self, _method: &Method) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn get_method(&self, _id: &MethodId) -> Result<Method, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn list_methods(&self) -> Result<Vec<Method>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test]
async fn two_by_two_catalog_session_starts_at_one_of_four() {
    let mut game = GameStore::load(
        &two_method_storage(),
        TrainerSettings::default(),
        fixed_clock(),
    )
    .await
    .unwrap();

    assert_eq!(game.session().phase(), SessionPhase::Uninitialized);
    let progress = game.start_session_with_rng(&mut StdRng::seed_from_u64(17));
    assert_eq!(progress.total, 4);
    assert_eq!(progress.current, 1);

    let progress = game.start_session();
    assert_eq!(progress.total, game.catalog().total_exercises());
    assert_eq!(game.session().current_index(), 0);
    assert_eq!(game.session().score(), 0);
    assert_eq!(game.session().attempted(), 0);
}

#[tokio::test]
async fn offline_provider_surfaces_storage_error() {
    let storage = Storage::new(Arc::new(OfflineCatalog));
    let err = GameStore::load(&storage, TrainerSettings::default(), fixed_clock())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::Storage(StorageError::Connection(_))
    ));
}

#[tokio::test]
async fn selecting_a_method_and_recording_progress() {
    let mut game = GameStore::load(
        &two_method_storage(),
        TrainerSettings::default(),
        fixed_clock(),
    )
    .await
    .unwrap();

    let method_id = MethodId::new("py_list_len").unwrap();
    let first = game.select_method(&method_id).map(|e| e.id().clone());
    assert_eq!(first, Some(ExerciseId::new("py_list_len_1").unwrap()));

    let exercise_id = ExerciseId::new("py_list_len_1").unwrap();
    game.progress_mut()
        .update_progress(&method_id, &exercise_id, true);
    let record = game
        .progress_mut()
        .update_progress(&method_id, &exercise_id, true);
    assert_eq!(record.completed_exercises().len(), 1);
    assert_eq!(record.total_attempts(), 2);
    assert!(game.progress().is_exercise_completed(&method_id, &exercise_id));
}

#[tokio::test]
async fn playing_through_a_session_to_the_end() {
    let mut game = GameStore::load(
        &two_method_storage(),
        TrainerSettings::default(),
        fixed_clock(),
    )
    .await
    .unwrap();
    game.start_session_with_rng(&mut StdRng::seed_from_u64(99));

    while !game.session().is_finished() {
        let answer = game
            .session()
            .current_exercise()
            .map(|e| e.exercise().answer().to_owned())
            .unwrap();
        let outcome = game.submit_answer(&answer).unwrap();
        assert!(outcome.correct);
        game.session_mut().next_exercise();
    }

    // The flag is set while the last exercise is still on screen.
    let last = game.session().current_index();
    assert_eq!(last, 3);
    for _ in 0..3 {
        game.session_mut().next_exercise();
        assert_eq!(game.session().current_index(), last);
        assert!(game.session().is_finished());
    }

    game.session_mut().skip_exercise();
    let progress = game.session().progress();
    assert_eq!(progress.score, 3);
    assert_eq!(progress.attempted, 4);
    assert!(progress.score <= progress.attempted);
    assert_eq!(game.progress().completed_exercise_count(), 3);
}
