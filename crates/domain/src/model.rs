//! Wire models for the backend REST API.
//!
//! These mirror what the backend actually sends, camelCase field names
//! included. The backend's contract has drifted over time, so most fields
//! are optional and defaulted; pages render whatever is present.

use serde::{Deserialize, Serialize};

/// A tenant company as listed in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Backend-assigned identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Older payloads carry the name under `companyName`.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Short tenant code.
    #[serde(default)]
    pub code: Option<String>,
    /// URL slug of the tenant portal.
    #[serde(default)]
    pub slug: Option<String>,
    /// Creation timestamp, backend-formatted.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Aggregate figures shown on the tenant card.
    #[serde(default)]
    pub stats: Option<TenantStats>,
}

impl Tenant {
    /// Display name, whichever field the backend populated.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.company_name.as_deref())
            .unwrap_or("-")
    }
}

/// Aggregate counters attached to a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct TenantStats {
    #[serde(default)]
    pub customers_count: Option<u64>,
    #[serde(default)]
    pub invoices_count: Option<u64>,
    #[serde(default)]
    pub revenue_sum: Option<f64>,
    #[serde(default)]
    pub outstanding_sum: Option<f64>,
}

/// Payload for creating a tenant from the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTenant {
    /// Display name.
    pub name: String,
    /// URL slug for the new tenant portal.
    pub slug: String,
}

/// Query parameters for the admin tenant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TenantListQuery {
    /// Free-text search over tenant names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Paging metadata of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// One page of the admin tenant list (`{ items: [], meta: {} }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TenantListPage {
    /// Tenants on this page.
    #[serde(default)]
    pub items: Vec<Tenant>,
    /// Paging metadata.
    #[serde(default)]
    pub meta: PageMeta,
}

/// A customer of a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct NewCustomer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A line on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct InvoiceItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub qty: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub line_total: Option<f64>,
}

/// An invoice, as listed and as shown in detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Invoice {
    pub id: String,
    #[serde(default)]
    pub number: Option<serde_json::Value>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<InvoiceItem>>,
    #[serde(default)]
    pub sub_total: Option<f64>,
    #[serde(default)]
    pub tax_total: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    /// Older payloads carry the total under `amount`.
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Payload for creating an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct NewInvoice {
    pub customer_id: String,
    pub items: Vec<InvoiceItem>,
}

/// A recorded payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<serde_json::Value>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Payload for recording a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct NewPayment {
    pub invoice_id: String,
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
}

/// Figures shown on the tenant dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct DashboardSummary {
    #[serde(default)]
    pub customers_count: Option<u64>,
    #[serde(default)]
    pub invoices_count: Option<u64>,
    #[serde(default)]
    pub revenue_sum: Option<f64>,
    #[serde(default)]
    pub due_sum: Option<f64>,
    #[serde(default)]
    pub recent_invoices: Vec<Invoice>,
    #[serde(default)]
    pub recent_payments: Vec<Payment>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tenant_display_name_falls_back_to_company_name() {
        let tenant: Tenant =
            serde_json::from_str(r#"{"id": "1", "companyName": "Acme"}"#).unwrap();
        assert_eq!(tenant.display_name(), "Acme");
    }

    #[test]
    fn test_tenant_list_page_tolerates_missing_meta() {
        let page: TenantListPage =
            serde_json::from_str(r#"{"items": [{"id": "1", "name": "Acme"}]}"#).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.meta.total_pages, None);
    }

    #[test]
    fn test_invoice_number_accepts_string_or_numeric() {
        let a: Invoice = serde_json::from_str(r#"{"id": "1", "number": "INV-7"}"#).unwrap();
        let b: Invoice = serde_json::from_str(r#"{"id": "2", "number": 7}"#).unwrap();
        assert!(a.number.is_some());
        assert!(b.number.is_some());
    }

    #[test]
    fn test_dashboard_summary_defaults_to_empty_lists() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert!(summary.recent_invoices.is_empty());
        assert!(summary.recent_payments.is_empty());
    }
}
