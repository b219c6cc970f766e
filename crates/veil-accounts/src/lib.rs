//! Mock customer records for the support demo
//!
//! All data is fictional. Every record deliberately carries the PII kinds the
//! redaction layers look for.

mod data;

use serde::Serialize;
use tracing::debug;

pub use data::CUSTOMERS;

pub const NOT_FOUND: &str = "No account found for the given identifier.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub date: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: &'static str,
    pub email: &'static str,
    pub account_id: &'static str,
    pub ssn: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub balance: &'static str,
    pub recent_transactions: &'static [Transaction],
}

/// Find a customer by email, name, or account ID (in that order of precedence).
///
/// Matching is case-insensitive; names match on substring.
pub fn find_customer(identifier: &str) -> Option<&'static Customer> {
    let needle = identifier.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let found = CUSTOMERS
        .iter()
        .find(|c| c.email.to_lowercase() == needle)
        .or_else(|| CUSTOMERS.iter().find(|c| c.name.to_lowercase().contains(&needle)))
        .or_else(|| CUSTOMERS.iter().find(|c| c.account_id.to_lowercase() == needle));

    debug!(found = found.is_some(), "Customer lookup");
    found
}

/// Output of the support agent's account lookup tool
pub fn lookup_customer_account(identifier: &str) -> String {
    find_customer(identifier)
        .and_then(|customer| serde_json::to_string_pretty(customer).ok())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}
