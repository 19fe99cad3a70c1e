//! Tenant identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// URL-safe identifier of a tenant company, embedded in every tenant-scoped
/// route (`/t/{slug}/...`).
///
/// Slugs are lowercase letters, digits, and hyphens only. They are not
/// secret; an unknown slug simply routes to a login page for a tenant that
/// may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantSlug(String);

impl TenantSlug {
    /// Validates and wraps a slug.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSlug`] if the value is empty or
    /// contains characters outside `[a-z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidSlug("empty slug".to_string()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::InvalidSlug(value));
        }
        Ok(Self(value))
    }

    /// The raw slug value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TenantSlug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lowercase_digits_hyphens() {
        assert!(TenantSlug::new("acme-42").is_ok());
        assert!(TenantSlug::new("a").is_ok());
    }

    #[test]
    fn test_rejects_uppercase_and_symbols() {
        assert!(TenantSlug::new("Acme").is_err());
        assert!(TenantSlug::new("acme_co").is_err());
        assert!(TenantSlug::new("acme/co").is_err());
        assert!(TenantSlug::new("").is_err());
    }

    #[test]
    fn test_parses_from_str() {
        let slug: TenantSlug = "acme".parse().unwrap();
        assert_eq!(slug.as_str(), "acme");
    }
}
