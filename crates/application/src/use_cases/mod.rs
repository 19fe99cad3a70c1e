//! Use cases
//!
//! Session bootstrap (login) and teardown (logout) flows.

mod login;
mod logout;

pub use login::{
    admin_login, tenant_login, Credentials, LoginOutcome, LOGIN_FALLBACK_MESSAGE,
    LOGIN_NO_TOKEN_MESSAGE,
};
pub use logout::logout;
