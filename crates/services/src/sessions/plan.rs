use rand::Rng;
use rand::seq::SliceRandom;

use trainer_core::model::{Exercise, Method, MethodId};

/// An exercise queued in a session, annotated with its method for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExercise {
    method_id: MethodId,
    method_name: String,
    method_syntax: String,
    exercise: Exercise,
}

impl SessionExercise {
    fn from_method(method: &Method, exercise: &Exercise) -> Self {
        Self {
            method_id: method.id().clone(),
            method_name: method.name().to_owned(),
            method_syntax: method.syntax().to_owned(),
            exercise: exercise.clone(),
        }
    }

    #[must_use]
    pub fn method_id(&self) -> &MethodId {
        &self.method_id
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    #[must_use]
    pub fn method_syntax(&self) -> &str {
        &self.method_syntax
    }

    #[must_use]
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }
}

/// Flattens methods into a session queue, optionally shuffled.
pub struct SessionBuilder<'a> {
    methods: Vec<&'a Method>,
    shuffle: bool,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(methods: impl IntoIterator<Item = &'a Method>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
            shuffle: true,
        }
    }

    /// Enable or disable shuffling. Disabled keeps method then exercise order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Build the queue; shuffling is a uniform Fisher-Yates permutation.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<SessionExercise> {
        let mut queue: Vec<SessionExercise> = self
            .methods
            .iter()
            .flat_map(|method| {
                method
                    .exercises()
                    .iter()
                    .map(move |exercise| SessionExercise::from_method(method, exercise))
            })
            .collect();

        if self.shuffle {
            queue.as_mut_slice().shuffle(rng);
        }
        queue
    }
}
