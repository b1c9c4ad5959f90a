//! Driver domain entity

use chrono::NaiveDate;

/// A licensed driver that vehicles can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub id: i64,
    pub username: String,
    /// bcrypt hash; plaintext never reaches the store
    pub password_hash: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub license_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub place_of_birth: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}
