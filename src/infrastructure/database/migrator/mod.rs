//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_customers;
mod m20250101_000002_create_drivers;
mod m20250101_000003_create_vehicles;
mod m20250101_000004_create_reservations;
mod m20250101_000005_create_payments;
mod m20250101_000006_create_payment_methods;
mod m20250101_000007_create_feedback;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_customers::Migration),
            Box::new(m20250101_000002_create_drivers::Migration),
            Box::new(m20250101_000003_create_vehicles::Migration),
            Box::new(m20250101_000004_create_reservations::Migration),
            Box::new(m20250101_000005_create_payments::Migration),
            Box::new(m20250101_000006_create_payment_methods::Migration),
            Box::new(m20250101_000007_create_feedback::Migration),
        ]
    }
}
