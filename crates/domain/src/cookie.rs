//! Session cookie model.
//!
//! The portal sets exactly one kind of cookie: a scope-qualified session
//! token mirror, readable by edge routing. Expiry is enforced passively by
//! `Max-Age`; clearing is done by re-setting the cookie with `Max-Age=0`.

use serde::{Deserialize, Serialize};

use crate::scope::TokenScope;

/// Fixed lifetime of a session cookie, in seconds (24 hours from issuance).
pub const SESSION_MAX_AGE_SECS: i64 = 86_400;

/// `SameSite` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    /// Cookies are sent with top-level navigations and GET from third-party
    /// sites.
    #[default]
    Lax,
    /// Cookies are only sent in first-party context.
    Strict,
    /// Cookies are sent with all requests.
    None,
}

impl SameSite {
    /// Attribute value as rendered in a `Set-Cookie` header.
    #[must_use]
    pub const fn attribute_value(self) -> &'static str {
        match self {
            Self::Lax => "Lax",
            Self::Strict => "Strict",
            Self::None => "None",
        }
    }
}

/// A session cookie as written to the edge cookie jar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    /// Cookie name (`admin_token` or `tenant_token`).
    pub name: String,
    /// Cookie value; empty for removals.
    pub value: String,
    /// Path the cookie applies to.
    pub path: String,
    /// Lifetime in seconds; `0` removes the cookie.
    pub max_age: i64,
    /// `SameSite` attribute.
    pub same_site: SameSite,
}

impl SessionCookie {
    /// A session cookie for a scope's token: `path=/`, `max-age=86400`,
    /// `SameSite=Lax`.
    #[must_use]
    pub fn session(scope: TokenScope, value: impl Into<String>) -> Self {
        Self {
            name: scope.cookie_name().to_string(),
            value: value.into(),
            path: "/".to_string(),
            max_age: SESSION_MAX_AGE_SECS,
            same_site: SameSite::Lax,
        }
    }

    /// The removal form of a scope's cookie (`max-age=0`).
    #[must_use]
    pub fn removal(scope: TokenScope) -> Self {
        Self {
            name: scope.cookie_name().to_string(),
            value: String::new(),
            path: "/".to_string(),
            max_age: 0,
            same_site: SameSite::Lax,
        }
    }

    /// Whether applying this cookie removes it from the jar.
    #[must_use]
    pub const fn is_removal(&self) -> bool {
        self.max_age == 0
    }

    /// Renders the cookie as a `Set-Cookie` header value.
    #[must_use]
    pub fn to_set_cookie_header(&self) -> String {
        format!(
            "{}={}; Path={}; Max-Age={}; SameSite={}",
            self.name,
            self.value,
            self.path,
            self.max_age,
            self.same_site.attribute_value()
        )
    }
}
