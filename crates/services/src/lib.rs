#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod language;
pub mod progress_store;
pub mod sessions;

pub use trainer_core::{Clock, TrainerSettings};
pub use sessions as session;

pub use error::GameError;
pub use game::{AnswerOutcome, GameStore};
pub use language::LanguageSelector;
pub use progress_store::ProgressStore;

pub use sessions::{SessionBuilder, SessionExercise, SessionPhase, SessionProgress, SessionStore};
