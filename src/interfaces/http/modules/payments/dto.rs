//! Payment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Payment, PaymentStatus};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i64,
    pub reservation_id: i64,
    pub payment_time: DateTime<Utc>,
    /// Exact decimal, e.g. "49.99"
    pub amount: String,
    pub payment_method: String,
    pub status: PaymentStatus,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            reservation_id: p.reservation_id,
            payment_time: p.payment_time,
            amount: p.amount.to_string(),
            payment_method: p.payment_method,
            status: p.status,
        }
    }
}
