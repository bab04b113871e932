pub mod preferences;
pub mod session;

pub use preferences::{FilePreferenceStore, InMemoryPreferenceStore};
pub use session::InMemorySessionProvider;
