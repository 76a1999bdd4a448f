mod catalog;
mod exercise;
mod ids;
mod method;
mod progress;
mod taxonomy;

pub use ids::{ExerciseId, MethodId, OwnerId, ParseIdError};
pub use taxonomy::{DifficultyLevel, MethodCategory, ProgrammingLanguage, TaxonomyError};

pub use catalog::{Catalog, CatalogError};
pub use exercise::{Exercise, ExerciseDraft, ExerciseError};
pub use method::{Method, MethodDraft, MethodError};
pub use progress::MethodProgress;
