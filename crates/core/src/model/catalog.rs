use std::collections::HashSet;

use thiserror::Error;

use crate::model::exercise::Exercise;
use crate::model::ids::{ExerciseId, MethodId};
use crate::model::method::Method;
use crate::model::taxonomy::{MethodCategory, ProgrammingLanguage};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate method id: {0}")]
    DuplicateMethod(MethodId),

    #[error("duplicate exercise id: {0}")]
    DuplicateExercise(ExerciseId),

    #[error("method {0} has no exercises")]
    NoExercises(MethodId),
}

/// Read-only, validated collection of methods in provider order.
///
/// Method ids are unique, exercise ids are unique across the whole catalog and
/// every method has at least one exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    methods: Vec<Method>,
}

impl Catalog {
    /// Build a catalog from validated methods.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on duplicate ids or methods without exercises.
    pub fn new(methods: Vec<Method>) -> Result<Self, CatalogError> {
        let mut method_ids = HashSet::with_capacity(methods.len());
        let mut exercise_ids = HashSet::new();

        for method in &methods {
            if !method_ids.insert(method.id()) {
                return Err(CatalogError::DuplicateMethod(method.id().clone()));
            }
            if method.exercises().is_empty() {
                return Err(CatalogError::NoExercises(method.id().clone()));
            }
            for exercise in method.exercises() {
                if !exercise_ids.insert(exercise.id()) {
                    return Err(CatalogError::DuplicateExercise(exercise.id().clone()));
                }
            }
        }

        Ok(Self { methods })
    }

    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    #[must_use]
    pub fn method(&self, id: &MethodId) -> Option<&Method> {
        self.methods.iter().find(|m| m.id() == id)
    }

    /// Finds an exercise anywhere in the catalog, together with its method.
    #[must_use]
    pub fn exercise(&self, id: &ExerciseId) -> Option<(&Method, &Exercise)> {
        self.methods
            .iter()
            .find_map(|m| m.exercise(id).map(|e| (m, e)))
    }

    /// Methods for a language, optionally narrowed to one category.
    pub fn methods_for(
        &self,
        language: ProgrammingLanguage,
        category: Option<MethodCategory>,
    ) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(move |m| {
            m.language() == language && category.is_none_or(|c| m.category() == c)
        })
    }

    /// Number of exercises across all methods.
    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.methods.iter().map(|m| m.exercises().len()).sum()
    }
}
