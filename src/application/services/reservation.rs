//! Reservation service
//!
//! Owns the booking workflow: reference checks, the default pickup window,
//! status transitions and the double-booking guard. The overlap check itself
//! runs inside the repository so that it shares a lock with the write.

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::application::lookup::{ensure_unreferenced, Lookup};
use crate::domain::reservation::window_end;
use crate::domain::{
    CreateReservationDto, DomainError, DomainResult, FieldViolation, RepositoryProvider,
    Reservation, ReservationStatus, UpdateReservationDto,
};

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    lookup: Lookup,
    default_window: Duration,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, default_window: Duration) -> Self {
        Self {
            lookup: Lookup::new(repos.clone()),
            repos,
            default_window,
        }
    }

    pub async fn save(&self, dto: CreateReservationDto) -> DomainResult<Reservation> {
        dto.validate_all()?;

        let status = dto.status.unwrap_or_default();
        if !matches!(status, ReservationStatus::Pending | ReservationStatus::Confirmed) {
            return Err(DomainError::ValidationFailed(vec![FieldViolation::new(
                "status",
                "a new reservation must be PENDING or CONFIRMED",
            )]));
        }

        self.lookup.referenced_customer(dto.customer_id).await?;
        self.lookup.referenced_vehicle(dto.vehicle_id).await?;

        let dropoff_time = window_end(dto.pickup_time, dto.dropoff_time, self.default_window)?;
        let candidate = Reservation {
            id: 0,
            customer_id: dto.customer_id,
            vehicle_id: dto.vehicle_id,
            pickup_time: dto.pickup_time,
            dropoff_time,
            pickup_location: dto.pickup_location,
            dropoff_location: dto.dropoff_location,
            status,
        };

        let reservation = match self.repos.reservations().create_exclusive(candidate).await {
            Ok(r) => r,
            Err(e) => {
                if let DomainError::Conflict(reason) = &e {
                    warn!(vehicle_id = dto.vehicle_id, %reason, "Booking rejected");
                }
                return Err(e);
            }
        };

        info!(
            reservation_id = reservation.id,
            customer_id = reservation.customer_id,
            vehicle_id = reservation.vehicle_id,
            status = %reservation.status,
            "Reservation created"
        );
        Ok(reservation)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<Reservation> {
        self.lookup.reservation(id).await
    }

    pub async fn get_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_by_customer(customer_id).await
    }

    pub async fn get_by_vehicle(&self, vehicle_id: i64) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_by_vehicle(vehicle_id).await
    }

    /// Reschedule, edit or move a reservation through its status machine.
    ///
    /// Omitting `dropoff_time` keeps the current window length; omitting
    /// `status` keeps the current status.
    pub async fn update(&self, id: i64, dto: UpdateReservationDto) -> DomainResult<Reservation> {
        let mut reservation = self.lookup.reservation(id).await?;
        dto.validate_all()?;

        if dto.vehicle_id != reservation.vehicle_id {
            self.lookup.referenced_vehicle(dto.vehicle_id).await?;
        }
        if let Some(next) = dto.status {
            reservation.transition_to(next)?;
        }

        let length = reservation.dropoff_time - reservation.pickup_time;
        reservation.vehicle_id = dto.vehicle_id;
        reservation.pickup_time = dto.pickup_time;
        reservation.dropoff_time = window_end(dto.pickup_time, dto.dropoff_time, length)?;
        reservation.pickup_location = dto.pickup_location;
        reservation.dropoff_location = dto.dropoff_location;

        let reservation = match self.repos.reservations().update_exclusive(reservation).await {
            Ok(r) => r,
            Err(e) => {
                if let DomainError::Conflict(reason) = &e {
                    warn!(reservation_id = id, %reason, "Reschedule rejected");
                }
                return Err(e);
            }
        };

        info!(reservation_id = id, status = %reservation.status, "Reservation updated");
        Ok(reservation)
    }

    /// Delete a reservation with no payments or feedback attached.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.lookup.reservation(id).await?;
        let payments = self.repos.payments().find_by_reservation(id).await?.len();
        let feedback = self.repos.feedback().find_by_reservation(id).await?.len();
        ensure_unreferenced(
            "Reservation",
            id,
            &[("payments", payments), ("feedback", feedback)],
        )?;

        self.repos.reservations().delete(id).await?;
        info!(reservation_id = id, "Reservation deleted");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
