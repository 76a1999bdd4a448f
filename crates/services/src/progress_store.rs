use std::collections::BTreeMap;

use trainer_core::Clock;
use trainer_core::model::{Exercise, ExerciseId, Method, MethodId, MethodProgress, OwnerId};

/// Per-method progress for one learner, plus the method/exercise being viewed.
///
/// Lookups never fail: unknown methods read as `None` or `false`.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    owner_id: OwnerId,
    clock: Clock,
    current_method: Option<Method>,
    current_exercise: Option<Exercise>,
    records: BTreeMap<MethodId, MethodProgress>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            clock: Clock::default(),
            current_method: None,
            current_exercise: None,
            records: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    #[must_use]
    pub fn current_method(&self) -> Option<&Method> {
        self.current_method.as_ref()
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.current_exercise.as_ref()
    }

    /// Make `method` current and jump to its first exercise.
    ///
    /// A method without exercises leaves no current exercise.
    pub fn set_method(&mut self, method: &Method) {
        self.current_exercise = method.first_exercise().cloned();
        self.current_method = Some(method.clone());
        tracing::debug!(
            method = %method.id(),
            exercise = ?self.current_exercise.as_ref().map(Exercise::id),
            "method selected"
        );
    }

    /// Replace the current exercise. It does not have to belong to the current method.
    pub fn set_exercise(&mut self, exercise: &Exercise) {
        self.current_exercise = Some(exercise.clone());
    }

    /// Record one attempt, creating the method's record on first use.
    ///
    /// Attempts and the practice timestamp change on every call; the completed
    /// set only grows when `completed` is true and the id is new.
    pub fn update_progress(
        &mut self,
        method_id: &MethodId,
        exercise_id: &ExerciseId,
        completed: bool,
    ) -> &MethodProgress {
        let now = self.clock.now();
        let owner_id = &self.owner_id;
        let record = self
            .records
            .entry(method_id.clone())
            .or_insert_with(|| MethodProgress::new(owner_id.clone(), method_id.clone(), now));
        record.record_attempt(exercise_id, completed, now);

        tracing::debug!(
            method = %method_id,
            exercise = %exercise_id,
            completed,
            attempts = record.total_attempts(),
            mastery = record.mastery_level(),
            "progress updated"
        );
        record
    }

    #[must_use]
    pub fn method_progress(&self, method_id: &MethodId) -> Option<&MethodProgress> {
        self.records.get(method_id)
    }

    #[must_use]
    pub fn is_exercise_completed(&self, method_id: &MethodId, exercise_id: &ExerciseId) -> bool {
        self.records
            .get(method_id)
            .is_some_and(|p| p.is_completed(exercise_id))
    }

    /// All records, ordered by method id.
    pub fn progress_records(&self) -> impl Iterator<Item = &MethodProgress> {
        self.records.values()
    }

    /// Completed exercises summed over every method.
    #[must_use]
    pub fn completed_exercise_count(&self) -> usize {
        self.records
            .values()
            .map(|p| p.completed_exercises().len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use trainer_core::fixtures::python_method;
    use trainer_core::model::{MethodCategory, MethodDraft, ProgrammingLanguage};
    use trainer_core::time::{fixed_clock, fixed_now};

    fn store() -> ProgressStore {
        ProgressStore::new(OwnerId::anonymous()).with_clock(fixed_clock())
    }

    fn ids(method: &str, exercise: &str) -> (MethodId, ExerciseId) {
        (
            MethodId::new(method).unwrap(),
            ExerciseId::new(exercise).unwrap(),
        )
    }

    #[test]
    fn set_method_selects_first_exercise() {
        let mut store = store();
        let method = python_method("py_list_len", 2);
        store.set_method(&method);

        assert_eq!(store.current_method().map(|m| m.id().as_str()), Some("py_list_len"));
        assert_eq!(
            store.current_exercise().map(|e| e.id().as_str()),
            Some("py_list_len_1")
        );
    }

    #[test]
    fn set_method_without_exercises_clears_exercise() {
        let mut store = store();
        store.set_method(&python_method("py_list_len", 1));
        let empty = MethodDraft {
            id: "py_list_clear".into(),
            name: "clear".into(),
            language: ProgrammingLanguage::Python,
            category: MethodCategory::Array,
            description: String::new(),
            syntax: "list.clear()".into(),
            exercises: Vec::new(),
        }
        .validate()
        .unwrap();
        store.set_method(&empty);

        assert!(store.current_exercise().is_none());
        assert_eq!(store.current_method().map(|m| m.id().as_str()), Some("py_list_clear"));
    }

    #[test]
    fn set_exercise_accepts_foreign_exercise() {
        let mut store = store();
        let len = python_method("py_list_len", 1);
        let pop = python_method("py_list_pop", 2);
        store.set_method(&len);
        store.set_exercise(&pop.exercises()[1]);
        assert_eq!(
            store.current_exercise().map(|e| e.id().as_str()),
            Some("py_list_pop_2")
        );
        assert_eq!(store.current_method().map(|m| m.id().as_str()), Some("py_list_len"));
    }

    #[test]
    fn repeated_completion_is_idempotent_on_set() {
        let mut store = store();
        let (method, exercise) = ids("py_list_len", "py_list_len_1");
        store.update_progress(&method, &exercise, true);
        let record = store.update_progress(&method, &exercise, true);

        assert_eq!(record.completed_exercises().len(), 1);
        assert_eq!(record.total_attempts(), 2);
        assert_eq!(record.mastery_level(), 1);
        assert!(store.is_exercise_completed(&method, &exercise));
    }

    #[test]
    fn first_update_creates_record_for_owner() {
        let mut store = ProgressStore::new(OwnerId::new("learner-1").unwrap())
            .with_clock(fixed_clock());
        let (method, exercise) = ids("py_list_pop", "py_list_pop_1");
        assert!(store.method_progress(&method).is_none());

        store.update_progress(&method, &exercise, false);
        let record = store.method_progress(&method).unwrap();
        assert_eq!(record.owner_id().as_str(), "learner-1");
        assert_eq!(record.method_id(), &method);
        assert_eq!(record.total_attempts(), 1);
        assert!(record.completed_exercises().is_empty());
        assert!(!store.is_exercise_completed(&method, &exercise));
    }

    #[test]
    fn unknown_method_reads_as_not_completed() {
        let store = store();
        let (method, exercise) = ids("js_array_map", "js_array_map_1");
        assert!(!store.is_exercise_completed(&method, &exercise));
        assert!(store.method_progress(&method).is_none());
    }

    #[test]
    fn every_attempt_refreshes_timestamp() {
        let mut store = store();
        let (method, exercise) = ids("py_list_len", "py_list_len_1");
        store.update_progress(&method, &exercise, true);

        store.clock.advance(Duration::hours(2));
        let record = store.update_progress(&method, &exercise, true);
        assert_eq!(record.last_practice_at(), fixed_now() + Duration::hours(2));
        assert_eq!(record.total_attempts(), 2);
    }

    #[test]
    fn completed_count_spans_methods() {
        let mut store = store();
        let (len, len_1) = ids("py_list_len", "py_list_len_1");
        let (_, len_2) = ids("py_list_len", "py_list_len_2");
        let (pop, pop_1) = ids("py_list_pop", "py_list_pop_1");
        store.update_progress(&len, &len_1, true);
        store.update_progress(&len, &len_2, true);
        store.update_progress(&pop, &pop_1, false);
        store.update_progress(&pop, &pop_1, true);

        assert_eq!(store.completed_exercise_count(), 3);
        let methods: Vec<_> = store
            .progress_records()
            .map(|p| p.method_id().as_str())
            .collect();
        assert_eq!(methods, vec!["py_list_len", "py_list_pop"]);
    }
}
