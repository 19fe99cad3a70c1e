//! Tijara Application - Session logic and use cases
//!
//! This crate owns the portal's session plumbing: the credential-store and
//! navigator ports, the injectable session context read by the gateway on
//! every call, the one-shot flash slot, the authorization-failure recovery
//! path, and the login/logout use cases.

pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{
    AuthGateway, AuthGatewayError, Clock, CredentialError, CredentialStore, Navigator,
    RecordingNavigator,
};
pub use session::{recover_unauthorized, FlashSlot, SessionContext, AUTH_FAILURE_MESSAGE};
pub use use_cases::{
    admin_login, logout, tenant_login, Credentials, LoginOutcome, LOGIN_FALLBACK_MESSAGE,
    LOGIN_NO_TOKEN_MESSAGE,
};
