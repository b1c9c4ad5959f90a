//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::{ServiceSettings, Services};
use crate::domain::{CreateCustomerDto, CreateDriverDto, CreateReservationDto, VehicleDto};
use crate::infrastructure::storage::InMemoryRepositoryProvider;

pub type TestServices = Services;

/// Services over a fresh in-memory store, with a cheap bcrypt cost.
pub fn services() -> TestServices {
    Services::new(
        Arc::new(InMemoryRepositoryProvider::new()),
        ServiceSettings {
            bcrypt_cost: 4,
            default_window: Duration::minutes(120),
        },
    )
}

pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, hour, 0, 0).unwrap()
}

pub fn new_customer(username: &str) -> CreateCustomerDto {
    CreateCustomerDto {
        username: username.into(),
        password: "secret1".into(),
        email: format!("{}@example.com", username.trim().replace(' ', "_")),
        first_name: None,
        last_name: None,
        phone_number: None,
        status: None,
        payment_method1: None,
        payment_method2: None,
        detail_payment_method1: None,
        detail_payment_method2: None,
    }
}

pub fn new_driver(username: &str) -> CreateDriverDto {
    CreateDriverDto {
        username: username.into(),
        password: "secret1".into(),
        email: format!("{}@example.com", username),
        phone_number: None,
        license_number: "B-1234".into(),
        date_of_birth: None,
        place_of_birth: None,
        address: None,
        status: None,
    }
}

pub fn vehicle_dto(driver_id: Option<i64>) -> VehicleDto {
    VehicleDto {
        driver_id,
        vehicle_type: "Sedan".into(),
        license_plate: "ABC-123".into(),
        status: None,
    }
}

pub fn booking(customer_id: i64, vehicle_id: i64, from: u32, to: u32) -> CreateReservationDto {
    CreateReservationDto {
        customer_id,
        vehicle_id,
        pickup_time: at(from),
        dropoff_time: Some(at(to)),
        pickup_location: "Airport".into(),
        dropoff_location: "City Centre".into(),
        status: None,
    }
}
