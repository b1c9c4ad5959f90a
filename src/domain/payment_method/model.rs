//! Payment method domain entity

use chrono::{DateTime, Utc};

/// A stored way for a customer to pay (card, wallet, cash...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: i64,
    pub customer_id: i64,
    /// e.g. CARD, PAYPAL, CASH
    pub method_type: String,
    /// Tokenized or masked details
    pub details: Option<String>,
    /// At most one per customer
    pub primary_method: bool,
    pub created_at: DateTime<Utc>,
}
