use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::PaymentStatus;
use crate::shared::{not_blank, positive_amount};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentDto {
    pub reservation_id: i64,
    /// Defaults to the time of recording
    #[serde(default)]
    pub payment_time: Option<DateTime<Utc>>,
    #[schema(value_type = String, example = "49.99")]
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    #[validate(custom(function = "not_blank"))]
    pub payment_method: String,
    /// PENDING when omitted
    #[serde(default)]
    pub status: Option<PaymentStatus>,
}

/// Replacement values for a payment. The reservation it settles is fixed.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentDto {
    /// Unchanged when omitted
    #[serde(default)]
    pub payment_time: Option<DateTime<Utc>>,
    #[schema(value_type = String, example = "49.99")]
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    #[validate(custom(function = "not_blank"))]
    pub payment_method: String,
    /// Unchanged when omitted
    #[serde(default)]
    pub status: Option<PaymentStatus>,
}
