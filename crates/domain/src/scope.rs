//! Session token scopes.
//!
//! The portal holds up to two independent sessions at once: an admin-console
//! session and a tenant-portal session. Each is addressed by a scope, which
//! also fixes the storage key and cookie name used everywhere that scope's
//! token is persisted.

use serde::{Deserialize, Serialize};

/// Namespace of an independent session.
///
/// An operator may hold one token of each scope at the same time (logged
/// into the admin console and a tenant portal in parallel); a single token
/// never belongs to both scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenScope {
    /// Admin console session.
    Admin,
    /// Tenant portal session.
    Tenant,
}

impl TokenScope {
    /// Both scopes, in attachment-precedence order (admin first).
    pub const ALL: [Self; 2] = [Self::Admin, Self::Tenant];

    /// Key under which this scope's token is stored in the durable store.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Admin => "admin_token",
            Self::Tenant => "tenant_token",
        }
    }

    /// Name of the cookie mirroring this scope's token.
    ///
    /// Identical to [`Self::storage_key`]; both locations share one key
    /// namespace.
    #[must_use]
    pub const fn cookie_name(self) -> &'static str {
        self.storage_key()
    }
}

impl std::fmt::Display for TokenScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Tenant => write!(f, "tenant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_distinct() {
        assert_eq!(TokenScope::Admin.storage_key(), "admin_token");
        assert_eq!(TokenScope::Tenant.storage_key(), "tenant_token");
        assert_ne!(
            TokenScope::Admin.storage_key(),
            TokenScope::Tenant.storage_key()
        );
    }

    #[test]
    fn test_precedence_order_is_admin_first() {
        assert_eq!(TokenScope::ALL[0], TokenScope::Admin);
    }
}
