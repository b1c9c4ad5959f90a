use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::VehicleStatus;
use crate::shared::not_blank;

/// Vehicle fields accepted on both create and update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VehicleDto {
    #[serde(default)]
    pub driver_id: Option<i64>,
    #[validate(custom(function = "not_blank"))]
    pub vehicle_type: String,
    #[validate(custom(function = "not_blank"))]
    pub license_plate: String,
    /// Defaults to AVAILABLE on create; kept as-is on update when omitted
    #[serde(default)]
    pub status: Option<VehicleStatus>,
}
