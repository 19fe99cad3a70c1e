//! Route classification and the edge guard decision table.
//!
//! Every incoming navigation path is classified at request time; nothing is
//! stored. The guard is a pure function of the path and the presence of the
//! two session cookies, so it can run before any page logic and be tested
//! without a server.
//!
//! Cookie presence is treated as proof of authentication here. The guard
//! never inspects token contents or expiry; a stale-but-present cookie
//! passes and fails later at the gateway on the first real request, which
//! is the authoritative check.

/// Classification of an incoming path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteClass<'a> {
    /// Exactly `/admin/login` (public).
    AdminLogin,
    /// Any other path under `/admin` (requires an admin session).
    AdminProtected,
    /// Bare tenant root `/t/{slug}`, the tenant's public landing page.
    TenantRoot {
        /// Positional slug segment.
        slug: &'a str,
    },
    /// Exactly `/t/{slug}/login` (public).
    TenantLogin {
        /// Positional slug segment.
        slug: &'a str,
    },
    /// Deeper tenant path without a `/login` segment (requires a tenant
    /// session).
    TenantProtected {
        /// Positional slug segment; not validated against known tenants.
        slug: &'a str,
    },
    /// Everything else; always rendered.
    Public,
}

/// Outcome of the edge guard for one navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page.
    Continue,
    /// Redirect the navigation to the given path.
    Redirect(String),
}

/// Classifies a path into its [`RouteClass`].
///
/// The slug is extracted purely positionally (second path segment) and may
/// be empty for malformed paths such as `/t//x`; callers redirect to
/// whatever login page that yields rather than erroring.
#[must_use]
pub fn classify(path: &str) -> RouteClass<'_> {
    if path == "/admin/login" {
        return RouteClass::AdminLogin;
    }
    if path.starts_with("/admin") {
        return RouteClass::AdminProtected;
    }
    if let Some(rest) = path.strip_prefix("/t/") {
        if !rest.is_empty() && !rest.contains('/') {
            return RouteClass::TenantRoot { slug: rest };
        }
        if let Some(slug) = rest.strip_suffix("/login") {
            if !slug.is_empty() && !slug.contains('/') {
                return RouteClass::TenantLogin { slug };
            }
        }
        if !path.contains("/login") {
            let slug = rest.split('/').next().unwrap_or("");
            return RouteClass::TenantProtected { slug };
        }
    }
    RouteClass::Public
}

/// The guard decision table, first match wins.
///
/// | Path | Condition | Action |
/// |---|---|---|
/// | protected admin | no admin cookie | redirect `/admin/login` |
/// | `/admin/login` | admin cookie present | redirect `/admin` |
/// | protected tenant | no tenant cookie | redirect `/t/{slug}/login` |
/// | `/t/{slug}/login` | tenant cookie present | redirect `/t/{slug}/dashboard` |
/// | anything else | - | continue |
///
/// The bare tenant root is always public; it is the tenant's landing page
/// and must render without a session.
#[must_use]
pub fn guard(path: &str, has_admin_cookie: bool, has_tenant_cookie: bool) -> GuardDecision {
    match classify(path) {
        RouteClass::AdminProtected if !has_admin_cookie => {
            GuardDecision::Redirect("/admin/login".to_string())
        }
        RouteClass::AdminLogin if has_admin_cookie => GuardDecision::Redirect("/admin".to_string()),
        RouteClass::TenantProtected { slug } if !has_tenant_cookie => {
            GuardDecision::Redirect(format!("/t/{slug}/login"))
        }
        RouteClass::TenantLogin { slug } if has_tenant_cookie => {
            GuardDecision::Redirect(format!("/t/{slug}/dashboard"))
        }
        _ => GuardDecision::Continue,
    }
}

/// Login page for the area a path belongs to, used when an authorization
/// failure must bounce the *current* location back to a login screen.
///
/// Prefix rules only: anything under `/admin` goes to the admin login,
/// anything under `/t/` goes to that tenant's login (slug taken
/// positionally), and any other location gets no redirect at all.
#[must_use]
pub fn login_redirect_for(path: &str) -> Option<String> {
    if path.starts_with("/admin") {
        return Some("/admin/login".to_string());
    }
    if path.starts_with("/t/") {
        let slug = path.split('/').nth(2).unwrap_or("");
        return Some(format!("/t/{slug}/login"));
    }
    None
}
