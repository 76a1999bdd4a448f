mod plan;
mod progress;
mod service;

// Public API of the session subsystem.
pub use plan::{SessionBuilder, SessionExercise};
pub use progress::SessionProgress;
pub use service::{SessionPhase, SessionStore};
