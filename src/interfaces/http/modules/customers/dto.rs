//! Customer DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Customer;

/// Customer API representation. The password hash is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub status: Option<String>,
    pub payment_method1: Option<String>,
    pub payment_method2: Option<String>,
    pub detail_payment_method1: Option<String>,
    pub detail_payment_method2: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            username: c.username,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone_number: c.phone_number,
            status: c.status,
            payment_method1: c.payment_method1,
            payment_method2: c.payment_method2,
            detail_payment_method1: c.detail_payment_method1,
            detail_payment_method2: c.detail_payment_method2,
        }
    }
}
