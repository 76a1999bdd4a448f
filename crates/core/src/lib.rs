#![forbid(unsafe_code)]

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
pub mod model;
pub mod settings;
pub mod time;

pub use settings::TrainerSettings;
pub use time::Clock;
