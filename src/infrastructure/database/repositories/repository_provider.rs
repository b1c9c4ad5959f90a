//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::customer::CustomerRepository;
use crate::domain::driver::DriverRepository;
use crate::domain::feedback::FeedbackRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::payment_method::PaymentMethodRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::vehicle::VehicleRepository;

use super::customer_repository::SeaOrmCustomerRepository;
use super::driver_repository::SeaOrmDriverRepository;
use super::feedback_repository::SeaOrmFeedbackRepository;
use super::payment_method_repository::SeaOrmPaymentMethodRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::vehicle_repository::SeaOrmVehicleRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
/// Build exactly one per database: the reservation repository's booking
/// guard lives here.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let customer = repos.customers().find_by_username("abah").await?;
/// let bookings = repos.reservations().find_by_vehicle(7).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    customers: SeaOrmCustomerRepository,
    drivers: SeaOrmDriverRepository,
    vehicles: SeaOrmVehicleRepository,
    reservations: SeaOrmReservationRepository,
    payments: SeaOrmPaymentRepository,
    payment_methods: SeaOrmPaymentMethodRepository,
    feedback: SeaOrmFeedbackRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            customers: SeaOrmCustomerRepository::new(db.clone()),
            drivers: SeaOrmDriverRepository::new(db.clone()),
            vehicles: SeaOrmVehicleRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            payment_methods: SeaOrmPaymentMethodRepository::new(db.clone()),
            feedback: SeaOrmFeedbackRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn drivers(&self) -> &dyn DriverRepository {
        &self.drivers
    }

    fn vehicles(&self) -> &dyn VehicleRepository {
        &self.vehicles
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn payment_methods(&self) -> &dyn PaymentMethodRepository {
        &self.payment_methods
    }

    fn feedback(&self) -> &dyn FeedbackRepository {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database};
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::application::{ServiceSettings, Services};
    use crate::domain::{
        CreateCustomerDto, CreateFeedbackDto, CreatePaymentDto, CreateReservationDto,
        DomainError, PaymentStatus, ReservationStatus, UpdatePaymentDto, Vehicle, VehicleDto,
        VehicleStatus,
    };
    use crate::infrastructure::database::migrator::Migrator;

    async fn connection() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn provider() -> SeaOrmRepositoryProvider {
        SeaOrmRepositoryProvider::new(connection().await)
    }

    async fn services() -> Services {
        Services::new(
            Arc::new(provider().await),
            ServiceSettings {
                bcrypt_cost: 4,
                default_window: Duration::minutes(120),
            },
        )
    }

    fn customer(username: &str) -> CreateCustomerDto {
        CreateCustomerDto {
            username: username.into(),
            password: "secret1".into(),
            email: format!("{}@example.com", username),
            first_name: Some("Test".into()),
            last_name: None,
            phone_number: None,
            status: None,
            payment_method1: Some("CARD".into()),
            payment_method2: None,
            detail_payment_method1: None,
            detail_payment_method2: None,
        }
    }

    fn booking(customer_id: i64, vehicle_id: i64, from: u32, to: u32) -> CreateReservationDto {
        CreateReservationDto {
            customer_id,
            vehicle_id,
            pickup_time: Utc.with_ymd_and_hms(2030, 3, 1, from, 0, 0).unwrap(),
            dropoff_time: Some(Utc.with_ymd_and_hms(2030, 3, 1, to, 0, 0).unwrap()),
            pickup_location: "Station".into(),
            dropoff_location: "Airport".into(),
            status: Some(ReservationStatus::Confirmed),
        }
    }

    fn vehicle() -> VehicleDto {
        VehicleDto {
            driver_id: None,
            vehicle_type: "Van".into(),
            license_plate: "VAN-1".into(),
            status: Some(VehicleStatus::Available),
        }
    }

    #[tokio::test]
    async fn customer_round_trips_through_sqlite() {
        let s = services().await;
        let saved = s.customers.save(customer("abah")).await.unwrap();
        assert_eq!(saved.id, 1);
        assert_eq!(s.customers.get_by_id(saved.id).await.unwrap(), saved);
        assert!(s.customers.authenticate("abah", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn unique_username_index_maps_to_conflict() {
        let repos = provider().await;
        let row = crate::domain::Customer {
            id: 0,
            username: "abah".into(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuu5Ffjy3ZKYNoT.2OCbrhV5V0IDRPJ9tC".into(),
            first_name: None,
            last_name: None,
            email: "abah@example.com".into(),
            phone_number: None,
            status: None,
            payment_method1: None,
            payment_method2: None,
            detail_payment_method1: None,
            detail_payment_method2: None,
        };

        repos.customers().create(row.clone()).await.unwrap();
        assert!(matches!(
            repos.customers().create(row).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let s = services().await;
        let first = s.customers.save(customer("a")).await.unwrap();
        s.customers.delete(first.id).await.unwrap();
        let second = s.customers.save(customer("b")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let repos = provider().await;
        assert!(repos.vehicles().find_by_id(3).await.unwrap().is_none());
        assert!(matches!(
            repos.vehicles().delete(3).await,
            Err(DomainError::NotFound { entity: "Vehicle", .. })
        ));
    }

    #[tokio::test]
    async fn double_booking_is_rejected_in_sqlite() {
        let s = services().await;
        let c = s.customers.save(customer("abah")).await.unwrap();
        let v = s.vehicles.save(vehicle()).await.unwrap();

        let first = s.reservations.save(booking(c.id, v.id, 9, 11)).await.unwrap();
        assert_eq!(first.status, ReservationStatus::Confirmed);
        assert!(matches!(
            s.reservations.save(booking(c.id, v.id, 10, 12)).await,
            Err(DomainError::Conflict(_))
        ));
        s.reservations.save(booking(c.id, v.id, 11, 12)).await.unwrap();
        assert_eq!(s.reservations.get_by_vehicle(v.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn payment_amount_keeps_its_scale() {
        let s = services().await;
        let c = s.customers.save(customer("abah")).await.unwrap();
        let v = s.vehicles.save(vehicle()).await.unwrap();
        let r = s.reservations.save(booking(c.id, v.id, 9, 11)).await.unwrap();

        let p = s
            .payments
            .save(CreatePaymentDto {
                reservation_id: r.id,
                payment_time: None,
                amount: Decimal::from_str("120.50").unwrap(),
                payment_method: "CASH".into(),
                status: None,
            })
            .await
            .unwrap();
        let loaded = s.payments.get_by_id(p.id).await.unwrap();
        assert_eq!(loaded.amount.to_string(), "120.50");

        let done = s
            .payments
            .update(
                p.id,
                UpdatePaymentDto {
                    payment_time: None,
                    amount: loaded.amount,
                    payment_method: "CASH".into(),
                    status: Some(PaymentStatus::Completed),
                },
            )
            .await
            .unwrap();
        assert_eq!(done.status, PaymentStatus::Completed);
    }

    #[tokio::test]
    async fn feedback_unique_per_reservation() {
        let s = services().await;
        let c = s.customers.save(customer("abah")).await.unwrap();
        let v = s.vehicles.save(vehicle()).await.unwrap();
        let r = s.reservations.save(booking(c.id, v.id, 9, 11)).await.unwrap();
        let dto = CreateFeedbackDto {
            customer_id: c.id,
            reservation_id: r.id,
            rating: 4,
            comments: None,
        };

        s.feedback.save(dto.clone()).await.unwrap();
        assert!(matches!(s.feedback.save(dto).await, Err(DomainError::Conflict(_))));
        assert_eq!(s.feedback.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stale_status_change_is_rejected_in_sqlite() {
        let repos = Arc::new(provider().await);
        let s = Services::new(
            repos.clone(),
            ServiceSettings {
                bcrypt_cost: 4,
                default_window: Duration::minutes(120),
            },
        );
        let c = s.customers.save(customer("abah")).await.unwrap();
        let v = s.vehicles.save(vehicle()).await.unwrap();
        let mut dto = booking(c.id, v.id, 9, 11);
        dto.status = None;
        let booked = s.reservations.save(dto).await.unwrap();

        // Read before the cancellation lands, written after it.
        let mut stale = repos.reservations().find_by_id(booked.id).await.unwrap().unwrap();
        let mut cancel = stale.clone();
        cancel.status = ReservationStatus::Cancelled;
        repos.reservations().update_exclusive(cancel).await.unwrap();

        stale.status = ReservationStatus::Confirmed;
        assert!(matches!(
            repos.reservations().update_exclusive(stale).await,
            Err(DomainError::InvalidTransition { entity: "Reservation", .. })
        ));
        assert_eq!(
            s.reservations.get_by_id(booked.id).await.unwrap().status,
            ReservationStatus::Cancelled
        );

        repos.reservations().delete(booked.id).await.unwrap();
        let mut gone = booked.clone();
        gone.status = ReservationStatus::Pending;
        assert!(matches!(
            repos.reservations().update_exclusive(gone).await,
            Err(DomainError::NotFound { entity: "Reservation", .. })
        ));
    }

    #[tokio::test]
    async fn unknown_stored_status_is_a_storage_error() {
        let db = connection().await;
        let repos = SeaOrmRepositoryProvider::new(db.clone());
        let row = Vehicle {
            id: 0,
            driver_id: None,
            vehicle_type: "Van".into(),
            license_plate: "VAN-1".into(),
            status: VehicleStatus::Available,
        };
        let row = repos.vehicles().create(row).await.unwrap();

        db.execute_unprepared("UPDATE vehicles SET status = 'BROKEN'")
            .await
            .unwrap();

        assert!(matches!(
            repos.vehicles().find_by_id(row.id).await,
            Err(DomainError::StorageUnavailable(_))
        ));
        assert!(matches!(
            repos.vehicles().find_all().await,
            Err(DomainError::StorageUnavailable(_))
        ));
    }
}
