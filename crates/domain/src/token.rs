//! Opaque session tokens.

use serde::{Deserialize, Serialize};

/// An opaque bearer token issued by the backend on login.
///
/// Tokens are never inspected or mutated by the portal; they are replaced
/// wholesale on re-login and destroyed on logout, on any 401/403 response,
/// or by cookie expiry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw token value, as sent in the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns the raw value.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns true if the token value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A shortened preview (first 8 chars) safe for log output.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.0.len() > 12 {
            format!("{}...", &self.0[..8])
        } else {
            self.0.clone()
        }
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Tokens are credentials; Debug must not leak the full value.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken({})", self.preview())
    }
}
