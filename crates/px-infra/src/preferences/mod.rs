pub mod file_store;
pub mod in_memory;

pub use file_store::{FilePreferenceStore, DEFAULT_PREFERENCES_FILE};
pub use in_memory::InMemoryPreferenceStore;
