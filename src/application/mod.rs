//! Application layer
//!
//! Per-entity services over a shared `RepositoryProvider`, plus the lookup
//! façade they use to resolve references.

pub mod lookup;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use chrono::Duration;

use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::password::PasswordHasher;

pub use lookup::Lookup;
pub use services::{
    CustomerService, DriverService, FeedbackService, PaymentMethodService, PaymentService,
    ReservationService, VehicleService,
};

/// Tunables the services need from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub bcrypt_cost: u32,
    /// Pickup window length used when a reservation omits `dropoff_time`
    pub default_window: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            default_window: Duration::minutes(120),
        }
    }
}

/// Every service, sharing one store.
pub struct Services {
    pub customers: CustomerService,
    pub drivers: DriverService,
    pub vehicles: VehicleService,
    pub reservations: ReservationService,
    pub payments: PaymentService,
    pub payment_methods: PaymentMethodService,
    pub feedback: FeedbackService,
    pub lookup: Lookup,
}

impl Services {
    pub fn new(repos: Arc<dyn RepositoryProvider>, settings: ServiceSettings) -> Self {
        let hasher = PasswordHasher::new(settings.bcrypt_cost);
        Self {
            customers: CustomerService::new(repos.clone(), hasher),
            drivers: DriverService::new(repos.clone(), hasher),
            vehicles: VehicleService::new(repos.clone()),
            reservations: ReservationService::new(repos.clone(), settings.default_window),
            payments: PaymentService::new(repos.clone()),
            payment_methods: PaymentMethodService::new(repos.clone()),
            feedback: FeedbackService::new(repos.clone()),
            lookup: Lookup::new(repos),
        }
    }
}
