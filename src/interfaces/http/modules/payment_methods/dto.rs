//! Payment method DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::PaymentMethod;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentMethodResponse {
    pub id: i64,
    pub customer_id: i64,
    pub method_type: String,
    pub details: Option<String>,
    pub primary_method: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(m: PaymentMethod) -> Self {
        Self {
            id: m.id,
            customer_id: m.customer_id,
            method_type: m.method_type,
            details: m.details,
            primary_method: m.primary_method,
            created_at: m.created_at,
        }
    }
}

/// Filter for the payment method listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PaymentMethodFilter {
    /// Only methods owned by this customer
    #[serde(alias = "customerId")]
    pub customer_id: Option<i64>,
}
