//! Vehicle DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Vehicle, VehicleStatus};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub id: i64,
    pub driver_id: Option<i64>,
    pub vehicle_type: String,
    pub license_plate: String,
    pub status: VehicleStatus,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            driver_id: v.driver_id,
            vehicle_type: v.vehicle_type,
            license_plate: v.license_plate,
            status: v.status,
        }
    }
}
