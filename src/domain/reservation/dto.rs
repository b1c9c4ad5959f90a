use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::ReservationStatus;
use crate::shared::{collect_violations, not_blank, DomainError, DomainResult, FieldViolation};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReservationDto {
    pub customer_id: i64,
    pub vehicle_id: i64,
    pub pickup_time: DateTime<Utc>,
    /// End of the pickup window; the configured default length applies when omitted
    #[serde(default)]
    pub dropoff_time: Option<DateTime<Utc>>,
    #[validate(custom(function = "not_blank"))]
    pub pickup_location: String,
    #[validate(custom(function = "not_blank"))]
    pub dropoff_location: String,
    /// PENDING when omitted
    #[serde(default)]
    pub status: Option<ReservationStatus>,
}

impl CreateReservationDto {
    /// Field contracts plus the window ordering check, reported together.
    pub fn validate_all(&self) -> DomainResult<()> {
        check(self.validate(), self.pickup_time, self.dropoff_time)
    }
}

/// Replacement values for a reservation's mutable fields.
///
/// The owning customer is fixed at creation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateReservationDto {
    pub vehicle_id: i64,
    pub pickup_time: DateTime<Utc>,
    /// Keeps the current window length when omitted
    #[serde(default)]
    pub dropoff_time: Option<DateTime<Utc>>,
    #[validate(custom(function = "not_blank"))]
    pub pickup_location: String,
    #[validate(custom(function = "not_blank"))]
    pub dropoff_location: String,
    /// Target status; unchanged when omitted
    #[serde(default)]
    pub status: Option<ReservationStatus>,
}

impl UpdateReservationDto {
    pub fn validate_all(&self) -> DomainResult<()> {
        check(self.validate(), self.pickup_time, self.dropoff_time)
    }
}

fn check(
    declared: Result<(), validator::ValidationErrors>,
    pickup_time: DateTime<Utc>,
    dropoff_time: Option<DateTime<Utc>>,
) -> DomainResult<()> {
    let mut violations = match declared {
        Ok(()) => Vec::new(),
        Err(errors) => collect_violations(&errors),
    };
    if matches!(dropoff_time, Some(dropoff) if dropoff <= pickup_time) {
        violations.push(FieldViolation::new(
            "dropoff_time",
            "must be later than pickup_time",
        ));
        violations.sort_by(|a, b| a.field.cmp(&b.field));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::ValidationFailed(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn dto() -> CreateReservationDto {
        let pickup = Utc::now() + Duration::days(1);
        CreateReservationDto {
            customer_id: 1,
            vehicle_id: 1,
            pickup_time: pickup,
            dropoff_time: Some(pickup + Duration::hours(2)),
            pickup_location: "Airport".into(),
            dropoff_location: "Hotel".into(),
            status: None,
        }
    }

    #[test]
    fn well_formed_request_passes() {
        assert!(dto().validate_all().is_ok());
    }

    #[test]
    fn blank_locations_and_inverted_window_reported_together() {
        let mut d = dto();
        d.pickup_location = " ".into();
        d.dropoff_location = String::new();
        d.dropoff_time = Some(d.pickup_time - Duration::minutes(5));
        let Err(DomainError::ValidationFailed(violations)) = d.validate_all() else {
            panic!("expected validation failure");
        };
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["dropoff_location", "dropoff_time", "pickup_location"]);
    }

    #[test]
    fn status_parses_from_wire_form() {
        let json = serde_json::json!({
            "customer_id": 1,
            "vehicle_id": 2,
            "pickup_time": "2025-06-01T10:00:00Z",
            "pickup_location": "A",
            "dropoff_location": "B",
            "status": "CONFIRMED"
        });
        let d: CreateReservationDto = serde_json::from_value(json).unwrap();
        assert_eq!(d.status, Some(ReservationStatus::Confirmed));
        assert!(d.dropoff_time.is_none());
    }
}
