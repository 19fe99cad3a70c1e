//! In-process cookie mirror read by edge routing.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tijara_application::ports::Clock;
use tijara_domain::SessionCookie;
use tokio::sync::RwLock;

struct StoredCookie {
    value: String,
    expires_at: DateTime<Utc>,
}

/// The short-lived cookie location of the credential store.
///
/// Holds the session cookies the edge guard consults on every navigation.
/// Expiry is enforced passively: an entry past its `max-age` simply stops
/// being visible. Applying a removal cookie (`max-age=0`) deletes the
/// entry.
#[derive(Clone)]
pub struct EdgeCookieJar {
    cookies: Arc<RwLock<HashMap<String, StoredCookie>>>,
    clock: Arc<dyn Clock>,
}

impl EdgeCookieJar {
    /// Creates an empty jar using the given clock.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            cookies: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Applies a cookie: inserts it, or removes the entry for a
    /// `max-age=0` removal form.
    pub async fn apply(&self, cookie: &SessionCookie) {
        let mut cookies = self.cookies.write().await;
        if cookie.is_removal() {
            cookies.remove(&cookie.name);
            return;
        }
        cookies.insert(
            cookie.name.clone(),
            StoredCookie {
                value: cookie.value.clone(),
                expires_at: self.clock.now() + Duration::seconds(cookie.max_age),
            },
        );
    }

    /// Whether a non-expired cookie with this name is present.
    pub async fn present(&self, name: &str) -> bool {
        self.value(name).await.is_some()
    }

    /// Value of a non-expired cookie, if present.
    pub async fn value(&self, name: &str) -> Option<String> {
        let cookies = self.cookies.read().await;
        cookies
            .get(name)
            .filter(|c| c.expires_at > self.clock.now())
            .map(|c| c.value.clone())
    }

    /// Drops expired entries.
    pub async fn cleanup_expired(&self) {
        let now = self.clock.now();
        self.cookies
            .write()
            .await
            .retain(|_, c| c.expires_at > now);
    }
}

impl std::fmt::Debug for EdgeCookieJar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeCookieJar").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use tijara_domain::TokenScope;

    use super::*;

    /// Clock that can be advanced by tests.
    struct MockClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl MockClock {
        fn starting_at(now: DateTime<Utc>) -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(now),
            })
        }

        fn advance(&self, seconds: i64) {
            let mut now = self.now.lock().unwrap();
            *now += Duration::seconds(seconds);
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    #[tokio::test]
    async fn test_session_cookie_is_visible_until_max_age() {
        let clock = MockClock::starting_at(Utc::now());
        let jar = EdgeCookieJar::new(clock.clone());

        jar.apply(&SessionCookie::session(TokenScope::Tenant, "tok"))
            .await;
        assert!(jar.present("tenant_token").await);

        clock.advance(86_399);
        assert!(jar.present("tenant_token").await);

        clock.advance(2);
        assert!(!jar.present("tenant_token").await);
    }

    #[tokio::test]
    async fn test_removal_form_deletes_the_entry() {
        let clock = MockClock::starting_at(Utc::now());
        let jar = EdgeCookieJar::new(clock);

        jar.apply(&SessionCookie::session(TokenScope::Admin, "tok"))
            .await;
        jar.apply(&SessionCookie::removal(TokenScope::Admin)).await;

        assert!(!jar.present("admin_token").await);
    }

    #[tokio::test]
    async fn test_reapplying_replaces_value_and_expiry() {
        let clock = MockClock::starting_at(Utc::now());
        let jar = EdgeCookieJar::new(clock.clone());

        jar.apply(&SessionCookie::session(TokenScope::Admin, "old"))
            .await;
        clock.advance(50_000);
        jar.apply(&SessionCookie::session(TokenScope::Admin, "new"))
            .await;
        clock.advance(50_000);

        // 100 000 s after the first write, only the refreshed entry lives.
        assert_eq!(jar.value("admin_token").await, Some("new".to_string()));
    }

    #[tokio::test]
    async fn test_cleanup_expired_drops_stale_entries() {
        let clock = MockClock::starting_at(Utc::now());
        let jar = EdgeCookieJar::new(clock.clone());

        jar.apply(&SessionCookie::session(TokenScope::Admin, "tok"))
            .await;
        clock.advance(90_000);
        jar.cleanup_expired().await;

        assert_eq!(jar.value("admin_token").await, None);
    }
}
