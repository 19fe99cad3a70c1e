//! Session state and recovery.
//!
//! This module provides:
//! - The injectable session context read by the gateway on every call
//! - The one-shot flash slot surviving a forced navigation
//! - The global authorization-failure recovery path

mod context;
mod flash;
mod recovery;

pub use context::SessionContext;
pub use flash::FlashSlot;
pub use recovery::{recover_unauthorized, AUTH_FAILURE_MESSAGE};
