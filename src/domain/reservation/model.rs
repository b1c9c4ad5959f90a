//! Reservation domain entity

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, DomainResult, FieldViolation};

/// Reservation status
///
/// `PENDING -> CONFIRMED -> COMPLETED`, with `CANCELLED` reachable from
/// either non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Booked, awaiting confirmation
    #[default]
    Pending,
    /// Confirmed by the back office
    Confirmed,
    /// Cancelled before completion
    Cancelled,
    /// Trip finished
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// `None` for anything but the four stored names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "CANCELLED" => Some(Self::Cancelled),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Non-terminal reservations hold their vehicle.
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half-open interval `[start, end)` during which a reservation holds its vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PickupWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &PickupWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Vehicle booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    pub vehicle_id: i64,
    pub pickup_time: DateTime<Utc>,
    /// End of the pickup window
    pub dropoff_time: DateTime<Utc>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn window(&self) -> PickupWindow {
        PickupWindow::new(self.pickup_time, self.dropoff_time)
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether holding both reservations would double-book the vehicle.
    pub fn conflicts_with(&self, other: &Reservation) -> bool {
        self.id != other.id
            && self.vehicle_id == other.vehicle_id
            && self.is_active()
            && other.is_active()
            && self.window().overlaps(&other.window())
    }

    /// Move to `next`, rejecting moves the status machine does not allow.
    pub fn transition_to(&mut self, next: ReservationStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                entity: "Reservation",
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}

/// End of a window starting at `pickup_time`: `dropoff_time` when given,
/// otherwise `pickup_time + length`.
pub fn window_end(
    pickup_time: DateTime<Utc>,
    dropoff_time: Option<DateTime<Utc>>,
    length: Duration,
) -> DomainResult<DateTime<Utc>> {
    if let Some(dropoff) = dropoff_time {
        return Ok(dropoff);
    }
    pickup_time.checked_add_signed(length).ok_or_else(|| {
        DomainError::ValidationFailed(vec![FieldViolation::new("pickup_time", "out of range")])
    })
}

/// Checks `candidate` against the row as currently stored.
///
/// Stores call this under their booking guard so that a status change
/// decided on a stale read cannot overwrite a newer one.
pub fn ensure_stored_transition(
    stored: Option<&Reservation>,
    candidate: &Reservation,
) -> DomainResult<()> {
    let stored = stored.ok_or_else(|| DomainError::not_found("Reservation", candidate.id))?;
    if !stored.status.can_transition_to(candidate.status) {
        return Err(DomainError::InvalidTransition {
            entity: "Reservation",
            from: stored.status.to_string(),
            to: candidate.status.to_string(),
        });
    }
    Ok(())
}

/// Fails with `Conflict` if `candidate` overlaps any active reservation in `existing`.
pub fn ensure_vehicle_free<'a>(
    candidate: &Reservation,
    existing: impl IntoIterator<Item = &'a Reservation>,
) -> DomainResult<()> {
    if let Some(taken) = existing.into_iter().find(|r| candidate.conflicts_with(r)) {
        return Err(DomainError::Conflict(format!(
            "vehicle {} is already booked by reservation {} from {} to {}",
            candidate.vehicle_id,
            taken.id,
            taken.pickup_time.to_rfc3339(),
            taken.dropoff_time.to_rfc3339()
        )));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    fn booking(id: i64, vehicle_id: i64, from: u32, to: u32) -> Reservation {
        Reservation {
            id,
            customer_id: 1,
            vehicle_id,
            pickup_time: at(from),
            dropoff_time: at(to),
            pickup_location: "Airport".into(),
            dropoff_location: "Downtown".into(),
            status: ReservationStatus::Pending,
        }
    }

    #[test]
    fn new_reservation_is_active() {
        let r = booking(1, 1, 10, 12);
        assert!(r.is_active());
        assert_eq!(r.status, ReservationStatus::Pending);
    }

    #[test]
    fn allowed_transitions() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn rejected_transitions() {
        use ReservationStatus::*;
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Confirmed.can_transition_to(Pending));
    }

    #[test]
    fn transition_to_reports_both_states() {
        let mut r = booking(1, 1, 10, 12);
        r.status = ReservationStatus::Completed;
        let err = r.transition_to(ReservationStatus::Pending).unwrap_err();
        match err {
            DomainError::InvalidTransition { from, to, .. } => {
                assert_eq!(from, "COMPLETED");
                assert_eq!(to, "PENDING");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(r.status, ReservationStatus::Completed);
    }

    #[test]
    fn overlapping_windows_conflict() {
        let a = booking(1, 7, 10, 12);
        let b = booking(2, 7, 11, 13);
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn touching_windows_do_not_conflict() {
        let a = booking(1, 7, 10, 12);
        let b = booking(2, 7, 12, 14);
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn other_vehicle_or_terminal_status_do_not_conflict() {
        let a = booking(1, 7, 10, 12);
        let other_vehicle = booking(2, 8, 10, 12);
        assert!(!a.conflicts_with(&other_vehicle));

        let mut cancelled = booking(3, 7, 10, 12);
        cancelled.status = ReservationStatus::Cancelled;
        assert!(!a.conflicts_with(&cancelled));
    }

    #[test]
    fn reservation_never_conflicts_with_itself() {
        let a = booking(1, 7, 10, 12);
        assert!(!a.conflicts_with(&a.clone()));
    }

    #[test]
    fn ensure_vehicle_free_names_the_blocking_reservation() {
        let existing = vec![booking(1, 7, 10, 12)];
        let candidate = booking(0, 7, 11, 13);
        let err = ensure_vehicle_free(&candidate, &existing).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("reservation 1")));

        let later = Reservation {
            pickup_time: at(12),
            dropoff_time: at(12) + Duration::hours(2),
            ..candidate
        };
        assert!(ensure_vehicle_free(&later, &existing).is_ok());
    }

    #[test]
    fn status_display_roundtrip() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            assert_eq!(ReservationStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(ReservationStatus::parse("Unknown"), None);
        assert_eq!(ReservationStatus::parse("pending"), None);
    }

    #[test]
    fn window_end_prefers_explicit_dropoff() {
        assert_eq!(window_end(at(10), Some(at(11)), Duration::hours(2)).unwrap(), at(11));
        assert_eq!(window_end(at(10), None, Duration::hours(2)).unwrap(), at(12));
    }

    #[test]
    fn window_end_overflow_is_a_validation_failure() {
        let err = window_end(DateTime::<Utc>::MAX_UTC, None, Duration::hours(2)).unwrap_err();
        match err {
            DomainError::ValidationFailed(violations) => {
                assert_eq!(violations, vec![FieldViolation::new("pickup_time", "out of range")]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(window_end(DateTime::<Utc>::MAX_UTC, Some(at(12)), Duration::hours(2)).is_ok());
    }

    #[test]
    fn stored_transition_uses_the_stored_status() {
        let mut stored = booking(1, 7, 10, 12);
        stored.status = ReservationStatus::Cancelled;
        let mut stale = booking(1, 7, 10, 12);
        stale.status = ReservationStatus::Confirmed;

        let err = ensure_stored_transition(Some(&stored), &stale).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { ref from, .. } if from == "CANCELLED"));

        stored.status = ReservationStatus::Pending;
        assert!(ensure_stored_transition(Some(&stored), &stale).is_ok());
        assert!(matches!(
            ensure_stored_transition(None, &stale),
            Err(DomainError::NotFound { .. })
        ));
    }
}
