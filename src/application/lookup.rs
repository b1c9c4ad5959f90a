//! Lookup façade
//!
//! Read-only queries other services use to resolve ids. Two flavours:
//! the primary-entity form fails with `NotFound`, the reference form used
//! for foreign keys fails with `InvalidReference`.

use std::sync::Arc;

use crate::domain::{
    Customer, DomainError, DomainResult, Driver, RepositoryProvider, Reservation, Vehicle,
};

fn found<T>(entity: &'static str, id: i64, row: Option<T>) -> DomainResult<T> {
    row.ok_or_else(|| DomainError::not_found(entity, id))
}

fn referenced<T>(entity: &'static str, field: &'static str, id: i64, row: Option<T>) -> DomainResult<T> {
    row.ok_or_else(|| DomainError::invalid_reference(entity, field, id))
}

#[derive(Clone)]
pub struct Lookup {
    repos: Arc<dyn RepositoryProvider>,
}

impl Lookup {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn customer(&self, id: i64) -> DomainResult<Customer> {
        found("Customer", id, self.repos.customers().find_by_id(id).await?)
    }

    pub async fn driver(&self, id: i64) -> DomainResult<Driver> {
        found("Driver", id, self.repos.drivers().find_by_id(id).await?)
    }

    pub async fn vehicle(&self, id: i64) -> DomainResult<Vehicle> {
        found("Vehicle", id, self.repos.vehicles().find_by_id(id).await?)
    }

    pub async fn reservation(&self, id: i64) -> DomainResult<Reservation> {
        found("Reservation", id, self.repos.reservations().find_by_id(id).await?)
    }

    /// Resolve a `customer_id` foreign key.
    pub async fn referenced_customer(&self, id: i64) -> DomainResult<Customer> {
        referenced("Customer", "customer_id", id, self.repos.customers().find_by_id(id).await?)
    }

    /// Resolve a `driver_id` foreign key.
    pub async fn referenced_driver(&self, id: i64) -> DomainResult<Driver> {
        referenced("Driver", "driver_id", id, self.repos.drivers().find_by_id(id).await?)
    }

    /// Resolve a `vehicle_id` foreign key.
    pub async fn referenced_vehicle(&self, id: i64) -> DomainResult<Vehicle> {
        referenced("Vehicle", "vehicle_id", id, self.repos.vehicles().find_by_id(id).await?)
    }

    /// Resolve a `reservation_id` foreign key.
    pub async fn referenced_reservation(&self, id: i64) -> DomainResult<Reservation> {
        referenced(
            "Reservation",
            "reservation_id",
            id,
            self.repos.reservations().find_by_id(id).await?,
        )
    }
}

/// Fails with `Conflict` while any dependent count is non-zero.
pub fn ensure_unreferenced(
    entity: &'static str,
    id: i64,
    dependents: &[(&str, usize)],
) -> DomainResult<()> {
    let held: Vec<String> = dependents
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| format!("{} {}", count, name))
        .collect();
    if held.is_empty() {
        return Ok(());
    }
    Err(DomainError::Conflict(format!(
        "{} {} is still referenced by {}",
        entity,
        id,
        held.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    #[tokio::test]
    async fn missing_primary_is_not_found_but_missing_reference_is_invalid() {
        let lookup = Lookup::new(Arc::new(InMemoryRepositoryProvider::new()));
        assert!(matches!(
            lookup.customer(9).await,
            Err(DomainError::NotFound { entity: "Customer", .. })
        ));
        assert!(matches!(
            lookup.referenced_customer(9).await,
            Err(DomainError::InvalidReference { field: "customer_id", .. })
        ));
    }

    #[test]
    fn unreferenced_passes_and_lists_holders() {
        assert!(ensure_unreferenced("Customer", 1, &[("reservations", 0)]).is_ok());
        let err = ensure_unreferenced("Customer", 1, &[("reservations", 2), ("feedback", 1)])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflict: Customer 1 is still referenced by 2 reservations, 1 feedback"
        );
    }
}
