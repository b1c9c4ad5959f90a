//! In-memory storage for development and testing

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::domain::reservation::{ensure_stored_transition, ensure_vehicle_free};
use crate::domain::{
    Customer, CustomerRepository, DomainError, DomainResult, Driver, DriverRepository, Feedback,
    FeedbackRepository, Payment, PaymentMethod, PaymentMethodRepository, PaymentRepository,
    RepositoryProvider, Reservation, ReservationRepository, Vehicle, VehicleRepository,
};

/// One keyed table with its own id sequence.
struct Table<T> {
    entity: &'static str,
    rows: DashMap<i64, T>,
    next_id: AtomicI64,
    unique: Option<UniqueColumn<T>>,
}

/// A column whose values may appear on at most one row.
///
/// `owners` maps each value to the id holding it; a value is claimed through
/// the map entry, so two writers racing for it cannot both succeed.
struct UniqueColumn<T> {
    column: &'static str,
    value: fn(&T) -> String,
    owners: DashMap<String, i64>,
}

impl<T: Clone> Table<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
            unique: None,
        }
    }

    fn with_unique(entity: &'static str, column: &'static str, value: fn(&T) -> String) -> Self {
        Self {
            unique: Some(UniqueColumn {
                column,
                value,
                owners: DashMap::new(),
            }),
            ..Self::new(entity)
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Reserve the unique value of `row` for `id`.
    fn claim(&self, id: i64, row: &T) -> DomainResult<()> {
        let Some(unique) = &self.unique else {
            return Ok(());
        };
        match unique.owners.entry((unique.value)(row)) {
            Entry::Occupied(owner) if *owner.get() != id => Err(DomainError::Conflict(format!(
                "{} with {} '{}' already exists",
                self.entity,
                unique.column,
                owner.key()
            ))),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(id);
                Ok(())
            }
        }
    }

    fn release(&self, id: i64, row: &T) {
        if let Some(unique) = &self.unique {
            unique
                .owners
                .remove_if(&(unique.value)(row), |_, owner| *owner == id);
        }
    }

    fn insert(&self, id: i64, row: T) -> DomainResult<T> {
        self.claim(id, &row)?;
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).map(|r| r.clone())
    }

    /// Rows matching `keep`, ascending by id.
    fn select(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let mut rows: Vec<(i64, T)> = self
            .rows
            .iter()
            .filter(|e| keep(e.value()))
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, row)| row).collect()
    }

    fn replace(&self, id: i64, row: T) -> DomainResult<T> {
        let Some(mut slot) = self.rows.get_mut(&id) else {
            return Err(DomainError::not_found(self.entity, id));
        };
        self.claim(id, &row)?;
        let previous = std::mem::replace(&mut *slot, row.clone());
        drop(slot);

        if let Some(unique) = &self.unique {
            if (unique.value)(&previous) != (unique.value)(&row) {
                self.release(id, &previous);
            }
        }
        Ok(row)
    }

    fn remove(&self, id: i64) -> DomainResult<()> {
        let (_, row) = self
            .rows
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(self.entity, id))?;
        self.release(id, &row);
        Ok(())
    }
}

/// Reservations plus the booking guard that serializes overlap checks,
/// status re-checks and deletes.
struct ReservationTable {
    table: Table<Reservation>,
    booking: Mutex<()>,
}

/// In-memory repository provider
pub struct InMemoryRepositoryProvider {
    customers: Table<Customer>,
    drivers: Table<Driver>,
    vehicles: Table<Vehicle>,
    reservations: ReservationTable,
    payments: Table<Payment>,
    payment_methods: Table<PaymentMethod>,
    feedback: Table<Feedback>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            customers: Table::with_unique("Customer", "username", |c| c.username.clone()),
            drivers: Table::with_unique("Driver", "username", |d| d.username.clone()),
            vehicles: Table::new("Vehicle"),
            reservations: ReservationTable {
                table: Table::new("Reservation"),
                booking: Mutex::new(()),
            },
            payments: Table::new("Payment"),
            payment_methods: Table::new("PaymentMethod"),
            feedback: Table::with_unique("Feedback", "reservation_id", |f| {
                f.reservation_id.to_string()
            }),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
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

#[async_trait]
impl CustomerRepository for Table<Customer> {
    async fn create(&self, mut customer: Customer) -> DomainResult<Customer> {
        customer.id = self.allocate_id();
        self.insert(customer.id, customer)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>> {
        Ok(self.get(id))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Customer>> {
        Ok(self.select(|c| c.username == username).into_iter().next())
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        Ok(self.select(|_| true))
    }

    async fn update(&self, customer: Customer) -> DomainResult<Customer> {
        self.replace(customer.id, customer)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.remove(id)
    }
}

#[async_trait]
impl DriverRepository for Table<Driver> {
    async fn create(&self, mut driver: Driver) -> DomainResult<Driver> {
        driver.id = self.allocate_id();
        self.insert(driver.id, driver)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Driver>> {
        Ok(self.get(id))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Driver>> {
        Ok(self.select(|d| d.username == username).into_iter().next())
    }

    async fn find_all(&self) -> DomainResult<Vec<Driver>> {
        Ok(self.select(|_| true))
    }

    async fn update(&self, driver: Driver) -> DomainResult<Driver> {
        self.replace(driver.id, driver)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.remove(id)
    }
}

#[async_trait]
impl VehicleRepository for Table<Vehicle> {
    async fn create(&self, mut vehicle: Vehicle) -> DomainResult<Vehicle> {
        vehicle.id = self.allocate_id();
        self.insert(vehicle.id, vehicle)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Vehicle>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Vehicle>> {
        Ok(self.select(|_| true))
    }

    async fn find_by_driver(&self, driver_id: i64) -> DomainResult<Vec<Vehicle>> {
        Ok(self.select(|v| v.driver_id == Some(driver_id)))
    }

    async fn update(&self, vehicle: Vehicle) -> DomainResult<Vehicle> {
        self.replace(vehicle.id, vehicle)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.remove(id)
    }
}

#[async_trait]
impl ReservationRepository for ReservationTable {
    async fn create_exclusive(&self, mut reservation: Reservation) -> DomainResult<Reservation> {
        let _guard = self.booking.lock().await;
        let vehicle_id = reservation.vehicle_id;
        ensure_vehicle_free(&reservation, &self.table.select(|r| r.vehicle_id == vehicle_id))?;
        reservation.id = self.table.allocate_id();
        self.table.insert(reservation.id, reservation)
    }

    async fn update_exclusive(&self, reservation: Reservation) -> DomainResult<Reservation> {
        let _guard = self.booking.lock().await;
        ensure_stored_transition(self.table.get(reservation.id).as_ref(), &reservation)?;
        let vehicle_id = reservation.vehicle_id;
        ensure_vehicle_free(&reservation, &self.table.select(|r| r.vehicle_id == vehicle_id))?;
        self.table.replace(reservation.id, reservation)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        Ok(self.table.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        Ok(self.table.select(|_| true))
    }

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Reservation>> {
        Ok(self.table.select(|r| r.customer_id == customer_id))
    }

    async fn find_by_vehicle(&self, vehicle_id: i64) -> DomainResult<Vec<Reservation>> {
        Ok(self.table.select(|r| r.vehicle_id == vehicle_id))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let _guard = self.booking.lock().await;
        self.table.remove(id)
    }
}

#[async_trait]
impl PaymentRepository for Table<Payment> {
    async fn create(&self, mut payment: Payment) -> DomainResult<Payment> {
        payment.id = self.allocate_id();
        self.insert(payment.id, payment)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Payment>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Payment>> {
        Ok(self.select(|_| true))
    }

    async fn find_by_reservation(&self, reservation_id: i64) -> DomainResult<Vec<Payment>> {
        Ok(self.select(|p| p.reservation_id == reservation_id))
    }

    async fn update(&self, payment: Payment) -> DomainResult<Payment> {
        self.replace(payment.id, payment)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.remove(id)
    }
}

#[async_trait]
impl PaymentMethodRepository for Table<PaymentMethod> {
    async fn create(&self, mut method: PaymentMethod) -> DomainResult<PaymentMethod> {
        method.id = self.allocate_id();
        self.insert(method.id, method)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PaymentMethod>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>> {
        Ok(self.select(|_| true))
    }

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<PaymentMethod>> {
        Ok(self.select(|m| m.customer_id == customer_id))
    }

    async fn update(&self, method: PaymentMethod) -> DomainResult<PaymentMethod> {
        self.replace(method.id, method)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.remove(id)
    }
}

#[async_trait]
impl FeedbackRepository for Table<Feedback> {
    async fn create(&self, mut feedback: Feedback) -> DomainResult<Feedback> {
        feedback.id = self.allocate_id();
        self.insert(feedback.id, feedback)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Feedback>> {
        Ok(self.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Feedback>> {
        Ok(self.select(|_| true))
    }

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Feedback>> {
        Ok(self.select(|f| f.customer_id == customer_id))
    }

    async fn find_by_reservation(&self, reservation_id: i64) -> DomainResult<Vec<Feedback>> {
        Ok(self.select(|f| f.reservation_id == reservation_id))
    }

    async fn update(&self, feedback: Feedback) -> DomainResult<Feedback> {
        self.replace(feedback.id, feedback)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.remove(id)
    }
}
