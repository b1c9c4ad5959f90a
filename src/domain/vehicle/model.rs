//! Vehicle domain entity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operational status of a vehicle.
///
/// Managed by operators; reservations do not move it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    #[default]
    Available,
    Reserved,
    Maintenance,
    OutOfService,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Reserved => "RESERVED",
            Self::Maintenance => "MAINTENANCE",
            Self::OutOfService => "OUT_OF_SERVICE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AVAILABLE" => Some(Self::Available),
            "RESERVED" => Some(Self::Reserved),
            "MAINTENANCE" => Some(Self::Maintenance),
            "OUT_OF_SERVICE" => Some(Self::OutOfService),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i64,
    /// Assigned driver, if any
    pub driver_id: Option<i64>,
    pub vehicle_type: String,
    pub license_plate: String,
    pub status: VehicleStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_roundtrip() {
        for status in [
            VehicleStatus::Available,
            VehicleStatus::Reserved,
            VehicleStatus::Maintenance,
            VehicleStatus::OutOfService,
        ] {
            assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(VehicleStatus::parse("BROKEN"), None);
    }

    #[test]
    fn status_uses_screaming_case_on_the_wire() {
        let json = serde_json::to_string(&VehicleStatus::OutOfService).unwrap();
        assert_eq!(json, "\"OUT_OF_SERVICE\"");
    }
}
