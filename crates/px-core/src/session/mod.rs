//! Account session value types.
//!
//! The session is owned by an external account provider. The gate only reads
//! snapshots of it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRef(String);

impl UserRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reactive session value published by the account provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<UserRef>,
    pub loading: bool,
}

impl SessionSnapshot {
    /// Provider has not resolved yet.
    pub fn resolving() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn signed_in(user: UserRef) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::resolving()
    }
}
