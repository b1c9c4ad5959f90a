//! HTTP modules, one per resource

pub mod customers;
pub mod drivers;
pub mod feedback;
pub mod health;
pub mod payment_methods;
pub mod payments;
pub mod reservations;
pub mod vehicles;
