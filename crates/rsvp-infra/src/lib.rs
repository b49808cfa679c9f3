pub mod history;
pub mod locale;
pub mod storage;
pub mod submission;
pub mod time;

pub use history::InMemorySessionHistory;
pub use locale::{EnvLocale, FixedLocale};
pub use storage::{FilePreferenceStore, InMemoryPreferenceStore};
pub use submission::HttpFormSubmitter;
pub use time::TokioFadeTimer;
