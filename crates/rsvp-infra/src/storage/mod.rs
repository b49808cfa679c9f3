mod file_preferences;
mod memory_preferences;

pub use file_preferences::{FilePreferenceStore, DEFAULT_PREFERENCES_FILE};
pub use memory_preferences::InMemoryPreferenceStore;
