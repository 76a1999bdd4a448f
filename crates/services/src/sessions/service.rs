use rand::Rng;

use trainer_core::model::Method;

use super::plan::{SessionBuilder, SessionExercise};
use super::progress::SessionProgress;

/// Lifecycle of a session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    InProgress,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a flattened, shuffled exercise queue.
///
/// Scoring and navigation are separate actions: `add_score` never moves the
/// cursor and `next_exercise` never scores. The cursor is clamped to the last
/// exercise. Before `initialize` every action is a no-op.
#[derive(Debug, Clone)]
pub struct SessionStore {
    phase: SessionPhase,
    exercises: Vec<SessionExercise>,
    current: usize,
    score: u32,
    attempted: u32,
    shuffle: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            exercises: Vec::new(),
            current: 0,
            score: 0,
            attempted: 0,
            shuffle: true,
        }
    }

    /// Enable or disable shuffling for subsequent initializations.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Rebuild the queue from `methods` and reset every counter.
    ///
    /// Calling it again discards the previous session entirely.
    pub fn initialize<'a>(&mut self, methods: impl IntoIterator<Item = &'a Method>) {
        self.initialize_with_rng(methods, &mut rand::rng());
    }

    /// Same as `initialize`, drawing the shuffle from `rng`.
    pub fn initialize_with_rng<'a, R: Rng + ?Sized>(
        &mut self,
        methods: impl IntoIterator<Item = &'a Method>,
        rng: &mut R,
    ) {
        self.exercises = SessionBuilder::new(methods)
            .with_shuffle(self.shuffle)
            .build(rng);
        self.current = 0;
        self.score = 0;
        self.attempted = 0;
        self.phase = SessionPhase::InProgress;
        tracing::info!(
            exercises = self.exercises.len(),
            shuffled = self.shuffle,
            "session initialized"
        );
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn exercises(&self) -> &[SessionExercise] {
        &self.exercises
    }

    /// Zero-based cursor position.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&SessionExercise> {
        self.exercises.get(self.current)
    }

    /// True once the cursor sits on the last exercise.
    ///
    /// The flag is already set while the last exercise is being answered.
    /// An initialized empty session is finished; an uninitialized one is not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::InProgress
            && self.current >= self.exercises.len().saturating_sub(1)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            current: self.current + 1,
            total: self.total(),
            score: self.score,
            attempted: self.attempted,
            is_finished: self.is_finished(),
        }
    }

    /// Move to the next exercise; stays put on the last one.
    pub fn next_exercise(&mut self) {
        if self.phase != SessionPhase::InProgress {
            return;
        }
        if self.current + 1 < self.exercises.len() {
            self.current += 1;
        }
    }

    /// Count a correct answer. Does not advance.
    pub fn add_score(&mut self) {
        if self.phase != SessionPhase::InProgress {
            tracing::debug!("add_score ignored before initialization");
            return;
        }
        self.score = self.score.saturating_add(1);
        self.attempted = self.attempted.saturating_add(1);
        tracing::debug!(score = self.score, attempted = self.attempted, "scored");
    }

    /// Count an attempt without scoring, then advance.
    pub fn skip_exercise(&mut self) {
        if self.phase != SessionPhase::InProgress {
            tracing::debug!("skip_exercise ignored before initialization");
            return;
        }
        self.attempted = self.attempted.saturating_add(1);
        self.next_exercise();
        tracing::debug!(
            index = self.current,
            attempted = self.attempted,
            "exercise skipped"
        );
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
