//! Port interfaces for the application layer
//!
//! Ports define the contract between the access gate use cases and the
//! infrastructure or platform implementations behind them. The gate only
//! ever sees these traits, so every collaborator can be swapped for a test
//! double.

pub mod app_dirs;
pub mod biometric;
pub mod errors;
pub mod preference_store;
pub mod session;
pub mod theme;

pub use app_dirs::AppDirsPort;
pub use biometric::BiometricPort;
pub use errors::{AppDirsError, StorageError};
pub use preference_store::PreferenceStorePort;
pub use session::SessionPort;
pub use theme::ThemeApplierPort;
