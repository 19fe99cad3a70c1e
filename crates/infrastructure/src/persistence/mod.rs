//! Persistence adapters
//!
//! The credential store writes every token to two places: a durable JSON
//! file (the client-side storage of record) and an in-process cookie jar
//! (the short-lived mirror read by edge routing). `DualCredentialStore`
//! composes the two behind the application's `CredentialStore` port.

mod cookie_jar;
mod credential_store;
mod token_repository;

pub use cookie_jar::EdgeCookieJar;
pub use credential_store::DualCredentialStore;
pub use token_repository::FileTokenRepository;
