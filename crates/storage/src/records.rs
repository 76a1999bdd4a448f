//! Serialized catalog shapes.
//!
//! Records mirror the document layout catalog providers ship (camelCase keys,
//! lowercase enum values) and convert into validated domain types.

use serde::{Deserialize, Serialize};
use trainer_core::model::{
    DifficultyLevel, Exercise, ExerciseDraft, Method, MethodCategory, MethodDraft, MethodError,
    ProgrammingLanguage,
};

use crate::repository::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub id: String,
    pub code: String,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub difficulty: DifficultyLevel,
}

impl ExerciseRecord {
    #[must_use]
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id().to_string(),
            code: exercise.code().to_owned(),
            question: exercise.question().to_owned(),
            answer: exercise.answer().to_owned(),
            hint: exercise.hint().map(ToOwned::to_owned),
            explanation: exercise.explanation().map(ToOwned::to_owned),
            difficulty: exercise.difficulty(),
        }
    }

    fn into_draft(self) -> ExerciseDraft {
        ExerciseDraft {
            id: self.id,
            code: self.code,
            question: self.question,
            answer: self.answer,
            hint: self.hint,
            explanation: self.explanation,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub id: String,
    pub name: String,
    pub language: ProgrammingLanguage,
    pub category: MethodCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub syntax: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

impl MethodRecord {
    #[must_use]
    pub fn from_method(method: &Method) -> Self {
        Self {
            id: method.id().to_string(),
            name: method.name().to_owned(),
            language: method.language(),
            category: method.category(),
            description: method.description().to_owned(),
            syntax: method.syntax().to_owned(),
            exercises: method
                .exercises()
                .iter()
                .map(ExerciseRecord::from_exercise)
                .collect(),
        }
    }

    /// Convert the record back into a domain `Method`.
    ///
    /// # Errors
    ///
    /// Returns `MethodError` if the method or one of its exercises fails validation.
    pub fn into_method(self) -> Result<Method, MethodError> {
        MethodDraft {
            id: self.id,
            name: self.name,
            language: self.language,
            category: self.category,
            description: self.description,
            syntax: self.syntax,
            exercises: self
                .exercises
                .into_iter()
                .map(ExerciseRecord::into_draft)
                .collect(),
        }
        .validate()
    }
}

/// Parses a JSON array of method documents into domain methods.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::Invalid` for documents that fail validation.
pub fn parse_catalog_json(raw: &str) -> Result<Vec<Method>, StorageError> {
    let records: Vec<MethodRecord> =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;

    records
        .into_iter()
        .map(|record| {
            record.into_method().map_err(|e| {
                tracing::warn!(error = %e, "rejected catalog method");
                StorageError::Invalid(e.to_string())
            })
        })
        .collect()
}

/// Serializes methods into the JSON document layout read by `parse_catalog_json`.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn catalog_to_json(methods: &[Method]) -> Result<String, StorageError> {
    let records: Vec<MethodRecord> = methods.iter().map(MethodRecord::from_method).collect();
    serde_json::to_string_pretty(&records).map_err(|e| StorageError::Serialization(e.to_string()))
}
