//! Reservation repository interface

use async_trait::async_trait;

use super::model::Reservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation unless it would double-book its vehicle.
    ///
    /// The overlap scan and the insert run under one serialization point;
    /// of two racing overlapping inserts exactly one succeeds.
    async fn create_exclusive(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Rewrite an existing reservation, re-checking the vehicle's schedule
    /// (the reservation itself excluded).
    async fn update_exclusive(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>>;

    /// Find all reservations (any status)
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Reservation>>;

    async fn find_by_vehicle(&self, vehicle_id: i64) -> DomainResult<Vec<Reservation>>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
