pub mod load_preferences;
pub mod persist_preference;

pub use load_preferences::LoadPreferences;
pub use persist_preference::PersistPreference;
