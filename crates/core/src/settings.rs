use crate::model::{OwnerId, ProgrammingLanguage};

pub const ENV_OWNER_ID: &str = "TRAINER_OWNER_ID";
pub const ENV_LANGUAGE: &str = "TRAINER_LANGUAGE";
pub const ENV_SHUFFLE: &str = "TRAINER_SHUFFLE";

/// Runtime configuration for a trainer instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerSettings {
    owner_id: OwnerId,
    default_language: ProgrammingLanguage,
    shuffle: bool,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            owner_id: OwnerId::anonymous(),
            default_language: ProgrammingLanguage::Python,
            shuffle: true,
        }
    }
}

impl TrainerSettings {
    #[must_use]
    pub fn new(owner_id: OwnerId, default_language: ProgrammingLanguage, shuffle: bool) -> Self {
        Self {
            owner_id,
            default_language,
            shuffle,
        }
    }

    /// Reads overrides from the process environment.
    ///
    /// Missing or malformed values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with a caller-supplied variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let owner_id = lookup(ENV_OWNER_ID)
            .and_then(|value| OwnerId::new(value).ok())
            .unwrap_or(defaults.owner_id);
        let default_language = lookup(ENV_LANGUAGE)
            .and_then(|value| value.parse::<ProgrammingLanguage>().ok())
            .unwrap_or(defaults.default_language);
        let shuffle = lookup(ENV_SHUFFLE)
            .and_then(|value| parse_flag(&value))
            .unwrap_or(defaults.shuffle);

        Self {
            owner_id,
            default_language,
            shuffle,
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    #[must_use]
    pub fn default_language(&self) -> ProgrammingLanguage {
        self.default_language
    }

    /// When false, sessions keep catalog order.
    #[must_use]
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
