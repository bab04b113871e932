//! Preference domain module.

mod key;
pub mod model;

pub use key::PreferenceKey;
pub use model::{decode_bool, encode_bool, Preferences, ThemeMode};
