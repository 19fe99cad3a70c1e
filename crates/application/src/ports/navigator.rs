//! Navigator port
//!
//! The gateway's inbound interceptor classifies the *current* location (not
//! the failed request's target) and may force a navigation. This port makes
//! that dependency explicit and injectable instead of reading ambient
//! global state.

use std::sync::{Arc, Mutex};

/// Port for the current navigation context of a gateway call.
pub trait Navigator: Send + Sync {
    /// Path the user is currently on.
    fn current_path(&self) -> String;

    /// Forces a navigation to the given path.
    fn redirect(&self, target: &str);
}

/// Navigator bound to one request, recording at most one redirect.
///
/// Concurrent failures may each record a redirect; the last write wins,
/// which matches browser navigation semantics.
#[derive(Debug, Clone)]
pub struct RecordingNavigator {
    path: String,
    target: Arc<Mutex<Option<String>>>,
}

impl RecordingNavigator {
    /// A navigator positioned at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: Arc::new(Mutex::new(None)),
        }
    }

    /// A navigator for calls made outside any navigation (background work).
    ///
    /// Positioned at `/`, which classifies as neither admin nor tenant
    /// area, so authorization failures propagate without a redirect.
    #[must_use]
    pub fn detached() -> Self {
        Self::new("/")
    }

    /// The redirect recorded by the gateway, if any.
    #[must_use]
    pub fn taken_redirect(&self) -> Option<String> {
        self.target.lock().map_or(None, |mut slot| slot.take())
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn redirect(&self, target: &str) {
        if let Ok(mut slot) = self.target.lock() {
            *slot = Some(target.to_string());
        }
    }
}
