use rand::Rng;

use storage::repository::Storage;
use trainer_core::model::{
    Catalog, Exercise, ExerciseId, Method, MethodCategory, MethodId, ProgrammingLanguage,
};
use trainer_core::{Clock, TrainerSettings};

use crate::error::GameError;
use crate::language::LanguageSelector;
use crate::progress_store::ProgressStore;
use crate::sessions::{SessionProgress, SessionStore};

/// Result of answering the current session exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub method_id: MethodId,
    pub exercise_id: ExerciseId,
    pub correct: bool,
    pub progress: SessionProgress,
}

/// One learner's trainer state: catalog, language, progress and session.
///
/// Each concern lives in its own store; `GameStore` wires them together and is
/// owned by the caller.
#[derive(Debug, Clone)]
pub struct GameStore {
    catalog: Catalog,
    settings: TrainerSettings,
    language: LanguageSelector,
    progress: ProgressStore,
    session: SessionStore,
}

impl GameStore {
    #[must_use]
    pub fn new(catalog: Catalog, settings: TrainerSettings, clock: Clock) -> Self {
        let language = LanguageSelector::with_language(settings.default_language());
        let progress = ProgressStore::new(settings.owner_id().clone()).with_clock(clock);
        let session = SessionStore::new().with_shuffle(settings.shuffle());
        Self {
            catalog,
            settings,
            language,
            progress,
            session,
        }
    }

    /// Validate `methods` as a catalog and build a store over it.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Catalog` on duplicate ids or methods without exercises.
    pub fn from_methods(
        methods: Vec<Method>,
        settings: TrainerSettings,
        clock: Clock,
    ) -> Result<Self, GameError> {
        let catalog = Catalog::new(methods)?;
        Ok(Self::new(catalog, settings, clock))
    }

    /// Build a store from the catalog provider in `storage`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if the catalog cannot be read or validated.
    pub async fn load(
        storage: &Storage,
        settings: TrainerSettings,
        clock: Clock,
    ) -> Result<Self, GameError> {
        let catalog = storage.load_catalog().await?;
        Ok(Self::new(catalog, settings, clock))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    #[must_use]
    pub fn language(&self) -> ProgrammingLanguage {
        self.language.current()
    }

    pub fn set_language(&mut self, language: ProgrammingLanguage) {
        self.language.set_language(language);
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressStore {
        &mut self.progress
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Catalog methods for the selected language.
    #[must_use]
    pub fn available_methods(&self) -> Vec<&Method> {
        self.catalog
            .methods_for(self.language.current(), None)
            .collect()
    }

    /// Catalog methods for the selected language in one category.
    #[must_use]
    pub fn available_methods_in(&self, category: MethodCategory) -> Vec<&Method> {
        self.catalog
            .methods_for(self.language.current(), Some(category))
            .collect()
    }

    /// Select a catalog method by id and return its first exercise.
    ///
    /// Unknown ids leave the current selection untouched.
    pub fn select_method(&mut self, id: &MethodId) -> Option<&Exercise> {
        let method = self.catalog.method(id)?;
        self.progress.set_method(method);
        self.progress.current_exercise()
    }

    /// Start a session over every exercise in the catalog.
    pub fn start_session(&mut self) -> SessionProgress {
        self.start_session_with_rng(&mut rand::rng())
    }

    /// Same as `start_session`, drawing the shuffle from `rng`.
    pub fn start_session_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SessionProgress {
        self.session.initialize_with_rng(self.catalog.methods(), rng);
        tracing::info!(total = self.session.total(), "session started");
        self.session.progress()
    }

    /// Start a session restricted to the selected language.
    pub fn start_language_session(&mut self) -> SessionProgress {
        self.start_language_session_with_rng(&mut rand::rng())
    }

    /// Same as `start_language_session`, drawing the shuffle from `rng`.
    pub fn start_language_session_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> SessionProgress {
        let language = self.language.current();
        self.session
            .initialize_with_rng(self.catalog.methods_for(language, None), rng);
        tracing::info!(%language, total = self.session.total(), "language session started");
        self.session.progress()
    }

    /// Check `answer` against the current session exercise and record it.
    ///
    /// A correct answer scores and marks the exercise completed. A wrong one
    /// only counts as a method attempt; the session counters wait for a retry
    /// or `skip_exercise`. The cursor never moves here.
    pub fn submit_answer(&mut self, answer: &str) -> Option<AnswerOutcome> {
        let current = self.session.current_exercise()?;
        let method_id = current.method_id().clone();
        let exercise_id = current.exercise().id().clone();
        let correct = current.exercise().check_answer(answer);

        self.progress
            .update_progress(&method_id, &exercise_id, correct);
        if correct {
            self.session.add_score();
        }

        tracing::debug!(method = %method_id, exercise = %exercise_id, correct, "answer submitted");
        Some(AnswerOutcome {
            method_id,
            exercise_id,
            correct,
            progress: self.session.progress(),
        })
    }
}
