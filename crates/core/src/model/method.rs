use thiserror::Error;

use crate::model::exercise::{Exercise, ExerciseDraft, ExerciseError};
use crate::model::ids::{ExerciseId, MethodId};
use crate::model::taxonomy::{MethodCategory, ProgrammingLanguage};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MethodError {
    #[error("method id cannot be empty")]
    EmptyId,

    #[error("method {0} has an empty name")]
    EmptyName(String),

    #[error("invalid exercise in method {method}: {source}")]
    Exercise {
        method: String,
        #[source]
        source: ExerciseError,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated method fields, exercises included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDraft {
    pub id: String,
    pub name: String,
    pub language: ProgrammingLanguage,
    pub category: MethodCategory,
    pub description: String,
    pub syntax: String,
    pub exercises: Vec<ExerciseDraft>,
}

impl MethodDraft {
    /// Validate the method and every exercise it carries.
    ///
    /// An empty exercise list is accepted here; `Catalog` is the layer that
    /// refuses it.
    ///
    /// # Errors
    ///
    /// Returns `MethodError` if the id or name is blank or an exercise is invalid.
    pub fn validate(self) -> Result<Method, MethodError> {
        let id = MethodId::new(self.id).map_err(|_| MethodError::EmptyId)?;

        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(MethodError::EmptyName(id.to_string()));
        }

        let exercises = self
            .exercises
            .into_iter()
            .map(ExerciseDraft::validate)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| MethodError::Exercise {
                method: id.to_string(),
                source,
            })?;

        Ok(Method {
            id,
            name,
            language: self.language,
            category: self.category,
            description: self.description.trim().to_owned(),
            syntax: self.syntax.trim().to_owned(),
            exercises,
        })
    }
}

//
// ─── METHOD ────────────────────────────────────────────────────────────────────
//

/// A named language operation (e.g. `list.append`) with its practice exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    id: MethodId,
    name: String,
    language: ProgrammingLanguage,
    category: MethodCategory,
    description: String,
    syntax: String,
    exercises: Vec<Exercise>,
}

impl Method {
    #[must_use]
    pub fn id(&self) -> &MethodId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn language(&self) -> ProgrammingLanguage {
        self.language
    }

    #[must_use]
    pub fn category(&self) -> MethodCategory {
        self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Syntax template, e.g. `list.pop([index])`.
    #[must_use]
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// Exercises in authoring order.
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn first_exercise(&self) -> Option<&Exercise> {
        self.exercises.first()
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseId) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id() == id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DifficultyLevel;

    fn exercise_draft(id: &str) -> ExerciseDraft {
        ExerciseDraft {
            id: id.into(),
            code: "numbers = [1, 2, 3]".into(),
            question: "What method will make numbers = [1, 2, 3, 4]?".into(),
            answer: "numbers.append(4)".into(),
            hint: None,
            explanation: None,
            difficulty: DifficultyLevel::Beginner,
        }
    }

    fn method_draft() -> MethodDraft {
        MethodDraft {
            id: "py_list_append".into(),
            name: "append".into(),
            language: ProgrammingLanguage::Python,
            category: MethodCategory::Array,
            description: "Adds an element to the end of the list".into(),
            syntax: "list.append(element)".into(),
            exercises: vec![exercise_draft("py_list_append_1"), exercise_draft("py_list_append_2")],
        }
    }

    #[test]
    fn validate_keeps_exercise_order() {
        let method = method_draft().validate().unwrap();
        assert_eq!(method.name(), "append");
        assert_eq!(method.syntax(), "list.append(element)");
        let ids: Vec<_> = method.exercises().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["py_list_append_1", "py_list_append_2"]);
        assert_eq!(
            method.first_exercise().map(|e| e.id().as_str()),
            Some("py_list_append_1")
        );
    }

    #[test]
    fn validate_reports_owning_method_for_bad_exercise() {
        let mut draft = method_draft();
        draft.exercises[1].answer = " ".into();
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            MethodError::Exercise {
                method: "py_list_append".into(),
                source: ExerciseError::EmptyAnswer("py_list_append_2".into()),
            }
        );
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut draft = method_draft();
        draft.name = "".into();
        assert_eq!(
            draft.validate().unwrap_err(),
            MethodError::EmptyName("py_list_append".into())
        );
    }

    #[test]
    fn empty_exercise_list_is_representable() {
        let mut draft = method_draft();
        draft.exercises.clear();
        let method = draft.validate().unwrap();
        assert!(method.first_exercise().is_none());
    }

    #[test]
    fn exercise_lookup_by_id() {
        let method = method_draft().validate().unwrap();
        let id = ExerciseId::new("py_list_append_2").unwrap();
        assert!(method.exercise(&id).is_some());
        let missing = ExerciseId::new("py_list_append_9").unwrap();
        assert!(method.exercise(&missing).is_none());
    }
}
