//! Tijara Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest-based gateway client, the
//! dual-location credential store, and the system clock.

pub mod adapters;
pub mod gateway;
pub mod persistence;

pub use adapters::SystemClock;
pub use gateway::{GatewayClient, GatewayConfig, GatewayError};
pub use persistence::{DualCredentialStore, EdgeCookieJar, FileTokenRepository};
