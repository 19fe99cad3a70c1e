//! API gateway client
//!
//! A single outbound HTTP client fronting the backend REST API. It
//! attaches whichever session token applies to every request and
//! intercepts authorization failures once, at the transport boundary.

mod client;
mod config;
mod error;

pub use client::GatewayClient;
pub use config::GatewayConfig;
pub use error::GatewayError;
