use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::not_blank;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDriverDto {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub license_number: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Replacement values for a driver's mutable fields.
///
/// `password: None` keeps the stored hash.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateDriverDto {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub license_number: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
