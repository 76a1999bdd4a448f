use trainer_core::model::ProgrammingLanguage;

/// Holds the language the learner is practicing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageSelector {
    current: ProgrammingLanguage,
}

impl LanguageSelector {
    /// Starts on Python.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(language: ProgrammingLanguage) -> Self {
        Self { current: language }
    }

    #[must_use]
    pub fn current(&self) -> ProgrammingLanguage {
        self.current
    }

    pub fn set_language(&mut self, language: ProgrammingLanguage) {
        tracing::debug!(from = %self.current, to = %language, "language changed");
        self.current = language;
    }
}
