//! Shared application state.

use std::path::Path;
use std::sync::Arc;

use tijara_application::ports::RecordingNavigator;
use tijara_application::session::{FlashSlot, SessionContext};
use tijara_infrastructure::{
    DualCredentialStore, EdgeCookieJar, FileTokenRepository, GatewayClient, GatewayConfig,
    GatewayError, SystemClock,
};

/// Everything the handlers and the guard share.
#[derive(Clone)]
pub struct AppState {
    /// Gateway client bound to a detached navigator; handlers rebind per
    /// request.
    pub gateway: GatewayClient,
    /// Session context over the dual credential store.
    pub session: SessionContext,
    /// One-shot cross-navigation message slot.
    pub flash: FlashSlot,
    /// Cookie mirror consulted by the route guard.
    pub jar: EdgeCookieJar,
}

impl AppState {
    /// Wires the store, session, flash slot, and gateway together.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway client cannot be built.
    pub fn new(config: &GatewayConfig, data_dir: &Path) -> Result<Self, GatewayError> {
        let jar = EdgeCookieJar::new(Arc::new(SystemClock::new()));
        let store = DualCredentialStore::new(FileTokenRepository::new(data_dir), jar.clone());
        let session = SessionContext::new(Arc::new(store));
        let flash = FlashSlot::new();
        let gateway = GatewayClient::new(
            config,
            session.clone(),
            flash.clone(),
            Arc::new(RecordingNavigator::detached()),
        )?;

        Ok(Self {
            gateway,
            session,
            flash,
            jar,
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
