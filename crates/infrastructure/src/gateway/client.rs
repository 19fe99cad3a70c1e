//! HTTP gateway client implementation using reqwest.
//!
//! One shared client wraps all outbound calls to the backend. Before every
//! request it attaches the applicable session token; on every response it
//! inspects the status and routes 401/403 through the global recovery path
//! before the caller sees the error.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tijara_application::ports::{AuthGateway, AuthGatewayError, Navigator};
use tijara_application::session::{recover_unauthorized, FlashSlot, SessionContext};
use tijara_application::use_cases::Credentials;
use tijara_domain::{
    Customer, DashboardSummary, Invoice, NewCustomer, NewInvoice, NewPayment, NewTenant, Payment,
    Tenant, TenantListPage, TenantListQuery, TenantSlug, TokenScope,
};
use url::Url;

use super::{GatewayConfig, GatewayError};

/// The single shared client for the backend REST API.
///
/// Session state, the flash slot, and the navigation context are explicit
/// constructor dependencies; nothing is read from ambient storage. The
/// client is cheap to clone, and [`Self::with_navigator`] rebinds a clone
/// to one navigation request.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: Url,
    session: SessionContext,
    flash: FlashSlot,
    navigator: Arc<dyn Navigator>,
}

impl GatewayClient {
    /// Creates the client.
    ///
    /// Transport defaults apply: no retries, no backoff, no timeout
    /// override. Redirects follow up to 10 hops.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        config: &GatewayConfig,
        session: SessionContext,
        flash: FlashSlot,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .user_agent(concat!("Tijara/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
            flash,
            navigator,
        })
    }

    /// A clone of this client bound to another navigation context.
    #[must_use]
    pub fn with_navigator(&self, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: self.session.clone(),
            flash: self.flash.clone(),
            navigator,
        }
    }

    /// The session context this client attaches tokens from.
    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::InvalidBaseUrl(format!("{e}: {path}")))
    }

    /// Pulls the backend's `message` field out of an error payload.
    fn backend_message(payload: &Value) -> Option<String> {
        payload
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
    }

    /// Applies both interceptors around one request.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        // Outbound: admin token first, tenant token otherwise. Without
        // either the request goes out unauthenticated and the backend
        // decides.
        let builder = match self.session.bearer_token().await? {
            Some(token) => builder.bearer_auth(token.as_str()),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(Self::backend_message);
            recover_unauthorized(&self.session, &self.flash, self.navigator.as_ref()).await?;
            return Err(GatewayError::Unauthorized {
                status: status.as_u16(),
                message,
            });
        }

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(Self::backend_message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.execute(self.http.get(self.endpoint(path)?)).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &(impl Serialize + Sync),
    ) -> Result<T, GatewayError> {
        self.execute(self.http.get(self.endpoint(path)?).query(query))
            .await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, GatewayError> {
        self.execute(self.http.post(self.endpoint(path)?).json(body))
            .await
    }

    /// Accepts a bare array, `{ data: [] }`, or `{ <key>: [] }`; the
    /// backend has shipped all three shapes for list endpoints.
    fn coerce_list<T: DeserializeOwned>(
        payload: Value,
        key: &str,
    ) -> Result<Vec<T>, GatewayError> {
        let list = match payload {
            Value::Array(_) => payload,
            Value::Object(mut object) => object
                .remove("data")
                .or_else(|| object.remove(key))
                .unwrap_or(Value::Array(Vec::new())),
            _ => Value::Array(Vec::new()),
        };
        serde_json::from_value(list).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    // --- Auth endpoints ---

    /// Admin login exchange; returns the raw response payload.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn admin_login_exchange(
        &self,
        credentials: &Credentials,
    ) -> Result<Value, GatewayError> {
        self.post("/admin/auth/login", credentials).await
    }

    /// Tenant login exchange; returns the raw response payload.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn tenant_login_exchange(
        &self,
        credentials: &Credentials,
    ) -> Result<Value, GatewayError> {
        self.post("/auth/login", credentials).await
    }

    // --- Public tenant endpoints ---

    /// Tenant landing data by slug.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors; 404 marks an unknown slug.
    pub async fn tenant_by_slug(&self, slug: &TenantSlug) -> Result<Tenant, GatewayError> {
        self.get(&format!("/tenants/by-slug/{slug}")).await
    }

    // --- Admin console endpoints ---

    /// One page of the admin tenant list.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn admin_tenants(
        &self,
        query: &TenantListQuery,
    ) -> Result<TenantListPage, GatewayError> {
        self.get_with_query("/admin/tenants", query).await
    }

    /// A single tenant by id.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn admin_tenant(&self, id: &str) -> Result<Tenant, GatewayError> {
        self.get(&format!("/admin/tenants/{id}")).await
    }

    /// Creates a tenant; returns the raw created payload.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn create_tenant(&self, tenant: &NewTenant) -> Result<Value, GatewayError> {
        self.post("/admin/tenants", tenant).await
    }

    // --- Tenant portal endpoints ---

    /// Dashboard figures for the authenticated tenant.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, GatewayError> {
        self.get("/dashboard").await
    }

    /// Customers of the authenticated tenant.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn customers(&self) -> Result<Vec<Customer>, GatewayError> {
        let payload: Value = self.get("/customers").await?;
        Self::coerce_list(payload, "customers")
    }

    /// Creates a customer; returns the raw created payload.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Value, GatewayError> {
        self.post("/customers", customer).await
    }

    /// Invoices of the authenticated tenant.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn invoices(&self) -> Result<Vec<Invoice>, GatewayError> {
        let payload: Value = self.get("/invoices").await?;
        Self::coerce_list(payload, "invoices")
    }

    /// A single invoice by id.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors; 404 marks an unknown
    /// invoice.
    pub async fn invoice(&self, id: &str) -> Result<Invoice, GatewayError> {
        self.get(&format!("/invoices/{id}")).await
    }

    /// Creates an invoice; returns the raw created payload.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Value, GatewayError> {
        self.post("/invoices", invoice).await
    }

    /// Payments of the authenticated tenant.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn payments(&self) -> Result<Vec<Payment>, GatewayError> {
        let payload: Value = self.get("/payments").await?;
        Self::coerce_list(payload, "payments")
    }

    /// Records a payment; returns the raw created payload.
    ///
    /// # Errors
    ///
    /// Propagates transport and backend errors.
    pub async fn create_payment(&self, payment: &NewPayment) -> Result<Value, GatewayError> {
        self.post("/payments", payment).await
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthGateway for GatewayClient {
    async fn login(
        &self,
        scope: TokenScope,
        credentials: &Credentials,
    ) -> Result<Value, AuthGatewayError> {
        let result = match scope {
            TokenScope::Admin => self.admin_login_exchange(credentials).await,
            TokenScope::Tenant => self.tenant_login_exchange(credentials).await,
        };
        result.map_err(|e| match e {
            GatewayError::Unauthorized { message, .. } | GatewayError::Api { message, .. } => {
                AuthGatewayError::Rejected { message }
            }
            other => AuthGatewayError::Transport(other.to_string()),
        })
    }
}
