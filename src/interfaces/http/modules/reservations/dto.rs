//! Reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Reservation, ReservationStatus};

/// Reservation details in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i64,
    pub customer_id: i64,
    pub vehicle_id: i64,
    pub pickup_time: DateTime<Utc>,
    pub dropoff_time: DateTime<Utc>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub status: ReservationStatus,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            vehicle_id: r.vehicle_id,
            pickup_time: r.pickup_time,
            dropoff_time: r.dropoff_time,
            pickup_location: r.pickup_location,
            dropoff_location: r.dropoff_location,
            status: r.status,
        }
    }
}
