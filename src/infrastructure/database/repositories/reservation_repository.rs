//! SeaORM implementation of ReservationRepository
//!
//! Exclusive writes hold the booking guard and run the overlap scan and the
//! write inside one transaction, so two racing overlapping bookings cannot
//! both commit. Updates also re-check the status change against the stored
//! row inside that transaction.

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tokio::sync::Mutex;

use super::{db_err, ensure_deleted};
use crate::domain::reservation::{
    ensure_stored_transition, ensure_vehicle_free, Reservation, ReservationRepository,
    ReservationStatus,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
    booking: Mutex<()>,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            booking: Mutex::new(()),
        }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let status = ReservationStatus::parse(&m.status).ok_or_else(|| {
        DomainError::StorageUnavailable(format!(
            "reservation {} has unknown status '{}'",
            m.id, m.status
        ))
    })?;
    Ok(Reservation {
        id: m.id,
        customer_id: m.customer_id,
        vehicle_id: m.vehicle_id,
        pickup_time: m.pickup_time,
        dropoff_time: m.dropoff_time,
        pickup_location: m.pickup_location,
        dropoff_location: m.dropoff_location,
        status,
    })
}

fn domain_to_active(r: Reservation) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: if r.id > 0 { Set(r.id) } else { NotSet },
        customer_id: Set(r.customer_id),
        vehicle_id: Set(r.vehicle_id),
        pickup_time: Set(r.pickup_time),
        dropoff_time: Set(r.dropoff_time),
        pickup_location: Set(r.pickup_location),
        dropoff_location: Set(r.dropoff_location),
        status: Set(r.status.as_str().to_string()),
    }
}

/// Active reservations currently holding `vehicle_id`.
async fn active_for_vehicle<C: ConnectionTrait>(
    conn: &C,
    vehicle_id: i64,
) -> DomainResult<Vec<Reservation>> {
    let models = reservation::Entity::find()
        .filter(reservation::Column::VehicleId.eq(vehicle_id))
        .filter(reservation::Column::Status.is_in([
            ReservationStatus::Pending.as_str(),
            ReservationStatus::Confirmed.as_str(),
        ]))
        .all(conn)
        .await
        .map_err(db_err)?;
    models.into_iter().map(model_to_domain).collect()
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create_exclusive(&self, mut r: Reservation) -> DomainResult<Reservation> {
        debug!("Booking vehicle {} from {}", r.vehicle_id, r.pickup_time);
        r.id = 0;

        let _guard = self.booking.lock().await;
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = active_for_vehicle(&txn, r.vehicle_id).await?;
        ensure_vehicle_free(&r, &existing)?;

        let model = domain_to_active(r).insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        model_to_domain(model)
    }

    async fn update_exclusive(&self, r: Reservation) -> DomainResult<Reservation> {
        debug!("Updating reservation: {}", r.id);

        let _guard = self.booking.lock().await;
        let txn = self.db.begin().await.map_err(db_err)?;
        let stored = reservation::Entity::find_by_id(r.id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()?;
        ensure_stored_transition(stored.as_ref(), &r)?;
        let existing = active_for_vehicle(&txn, r.vehicle_id).await?;
        ensure_vehicle_free(&r, &existing)?;

        let model = domain_to_active(r).update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        model_to_domain(model)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::CustomerId.eq(customer_id))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_vehicle(&self, vehicle_id: i64) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        ensure_deleted("Reservation", id, result.rows_affected)
    }
}
