use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::not_blank;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerDto {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_method1: Option<String>,
    #[serde(default)]
    pub payment_method2: Option<String>,
    #[serde(default)]
    pub detail_payment_method1: Option<String>,
    #[serde(default)]
    pub detail_payment_method2: Option<String>,
}

/// Replacement values for a customer's mutable fields.
///
/// `password: None` keeps the stored hash.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerDto {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_method1: Option<String>,
    #[serde(default)]
    pub payment_method2: Option<String>,
    #[serde(default)]
    pub detail_payment_method1: Option<String>,
    #[serde(default)]
    pub detail_payment_method2: Option<String>,
}
