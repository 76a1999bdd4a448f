use chrono::{DateTime, Utc};

use crate::model::ids::{ExerciseId, MethodId, OwnerId};

/// A learner's accumulated progress on one method.
///
/// Completed exercise ids keep insertion order and never repeat. Attempts only
/// grow. The mastery level equals the number of completed exercises and is not
/// capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodProgress {
    owner_id: OwnerId,
    method_id: MethodId,
    completed_exercises: Vec<ExerciseId>,
    total_attempts: u32,
    mastery_level: u32,
    last_practice_at: DateTime<Utc>,
}

impl MethodProgress {
    /// Fresh record with no attempts, stamped at `created_at`.
    #[must_use]
    pub fn new(owner_id: OwnerId, method_id: MethodId, created_at: DateTime<Utc>) -> Self {
        Self {
            owner_id,
            method_id,
            completed_exercises: Vec::new(),
            total_attempts: 0,
            mastery_level: 0,
            last_practice_at: created_at,
        }
    }

    /// Records one attempt on `exercise_id`.
    ///
    /// Every call counts as an attempt and refreshes the practice timestamp.
    /// A completed exercise is only added once.
    pub fn record_attempt(
        &mut self,
        exercise_id: &ExerciseId,
        completed: bool,
        practiced_at: DateTime<Utc>,
    ) {
        if completed && !self.is_completed(exercise_id) {
            self.completed_exercises.push(exercise_id.clone());
            self.mastery_level = u32::try_from(self.completed_exercises.len()).unwrap_or(u32::MAX);
        }

        self.total_attempts = self.total_attempts.saturating_add(1);
        self.last_practice_at = practiced_at;
    }

    #[must_use]
    pub fn is_completed(&self, exercise_id: &ExerciseId) -> bool {
        self.completed_exercises.contains(exercise_id)
    }

    #[must_use]
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    #[must_use]
    pub fn method_id(&self) -> &MethodId {
        &self.method_id
    }

    #[must_use]
    pub fn completed_exercises(&self) -> &[ExerciseId] {
        &self.completed_exercises
    }

    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    #[must_use]
    pub fn mastery_level(&self) -> u32 {
        self.mastery_level
    }

    #[must_use]
    pub fn last_practice_at(&self) -> DateTime<Utc> {
        self.last_practice_at
    }
}
