//! Driver DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Driver;

/// Driver API representation without the password hash
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DriverResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub license_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

impl From<Driver> for DriverResponse {
    fn from(d: Driver) -> Self {
        Self {
            id: d.id,
            username: d.username,
            email: d.email,
            phone_number: d.phone_number,
            license_number: d.license_number,
            date_of_birth: d.date_of_birth,
            place_of_birth: d.place_of_birth,
            address: d.address,
            status: d.status,
        }
    }
}
