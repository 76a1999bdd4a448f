use thiserror::Error;

use crate::model::ids::ExerciseId;
use crate::model::taxonomy::DifficultyLevel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise id cannot be empty")]
    EmptyId,

    #[error("exercise {0} has an empty question")]
    EmptyQuestion(String),

    #[error("exercise {0} has an empty answer")]
    EmptyAnswer(String),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated exercise fields as handed over by a catalog provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub id: String,
    pub code: String,
    pub question: String,
    pub answer: String,
    pub hint: Option<String>,
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
}

impl ExerciseDraft {
    /// Validate and normalize the draft into an immutable `Exercise`.
    ///
    /// The code snippet is kept verbatim; its indentation is meaningful.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError` if the id, question or answer is blank.
    pub fn validate(self) -> Result<Exercise, ExerciseError> {
        let id = ExerciseId::new(self.id).map_err(|_| ExerciseError::EmptyId)?;

        let question = self.question.trim().to_owned();
        if question.is_empty() {
            return Err(ExerciseError::EmptyQuestion(id.to_string()));
        }

        let answer = self.answer.trim().to_owned();
        if answer.is_empty() {
            return Err(ExerciseError::EmptyAnswer(id.to_string()));
        }

        Ok(Exercise {
            id,
            code: self.code,
            question,
            answer,
            hint: normalize_optional(self.hint),
            explanation: normalize_optional(self.explanation),
            difficulty: self.difficulty,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

//
// ─── EXERCISE ──────────────────────────────────────────────────────────────────
//

/// A single question/answer unit tied to a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    id: ExerciseId,
    code: String,
    question: String,
    answer: String,
    hint: Option<String>,
    explanation: Option<String>,
    difficulty: DifficultyLevel,
}

impl Exercise {
    #[must_use]
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    /// Source snippet shown above the question.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Canonical answer string.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    /// Compares a learner's input with the canonical answer.
    ///
    /// Leading/trailing whitespace is ignored and inner whitespace runs are
    /// collapsed to a single space; everything else must match exactly.
    #[must_use]
    pub fn check_answer(&self, input: &str) -> bool {
        collapse_whitespace(input) == collapse_whitespace(&self.answer)
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
