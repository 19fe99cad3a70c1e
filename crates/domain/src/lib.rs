//! Tijara Domain - Core portal types
//!
//! This crate defines the domain model for the Tijara portal layer.
//! All types here are pure Rust with no I/O dependencies.

pub mod cookie;
pub mod error;
pub mod model;
pub mod route;
pub mod scope;
pub mod slug;
pub mod token;

pub use cookie::{SameSite, SessionCookie, SESSION_MAX_AGE_SECS};
pub use error::{DomainError, DomainResult};
pub use model::{
    Customer, DashboardSummary, Invoice, InvoiceItem, NewCustomer, NewInvoice, NewPayment,
    NewTenant, PageMeta, Payment, Tenant, TenantListPage, TenantListQuery, TenantStats,
};
pub use route::{classify, guard, login_redirect_for, GuardDecision, RouteClass};
pub use scope::TokenScope;
pub use slug::TenantSlug;
pub use token::SessionToken;
