//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait that can be implemented by adapters in the
//! infrastructure layer.

mod auth_gateway;
mod clock;
mod credential_store;
mod navigator;

pub use auth_gateway::{AuthGateway, AuthGatewayError};
pub use clock::Clock;
pub use credential_store::{CredentialError, CredentialStore};
pub use navigator::{Navigator, RecordingNavigator};
