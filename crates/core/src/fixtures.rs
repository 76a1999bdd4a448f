//! Small builders for tests in this and downstream crates.

use crate::model::{
    DifficultyLevel, ExerciseDraft, Method, MethodCategory, MethodDraft, ProgrammingLanguage,
};

/// Builds a method `id` with `exercises` exercises named `{id}_1..=n`.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
pub fn method_fixture(
    id: &str,
    language: ProgrammingLanguage,
    category: MethodCategory,
    exercises: usize,
) -> Method {
    MethodDraft {
        id: id.to_owned(),
        name: id.rsplit('_').next().unwrap_or(id).to_owned(),
        language,
        category,
        description: format!("{id} description"),
        syntax: format!("{id}()"),
        exercises: (1..=exercises)
            .map(|n| ExerciseDraft {
                id: format!("{id}_{n}"),
                code: format!("value = {n}"),
                question: format!("Question {n} for {id}?"),
                answer: format!("{id}({n})"),
                hint: None,
                explanation: None,
                difficulty: DifficultyLevel::Beginner,
            })
            .collect(),
    }
    .validate()
    .expect("fixture method should be valid")
}

/// Python array method with `exercises` exercises.
#[must_use]
pub fn python_method(id: &str, exercises: usize) -> Method {
    method_fixture(id, ProgrammingLanguage::Python, MethodCategory::Array, exercises)
}
