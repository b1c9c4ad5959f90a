use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::not_blank;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentMethodDto {
    pub customer_id: i64,
    #[validate(custom(function = "not_blank"))]
    pub method_type: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub details: Option<String>,
    #[serde(default)]
    pub primary_method: bool,
    /// Assigned at creation when omitted
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Replacement values for a payment method. Owner and creation time are fixed.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentMethodDto {
    #[validate(custom(function = "not_blank"))]
    pub method_type: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub details: Option<String>,
    #[serde(default)]
    pub primary_method: bool,
}
