//! Vehicle repository interface

use async_trait::async_trait;

use super::model::Vehicle;
use crate::domain::DomainResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Persist a new vehicle; the store assigns the id
    async fn create(&self, vehicle: Vehicle) -> DomainResult<Vehicle>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Vehicle>>;

    async fn find_all(&self) -> DomainResult<Vec<Vehicle>>;

    /// Vehicles currently assigned to a driver
    async fn find_by_driver(&self, driver_id: i64) -> DomainResult<Vec<Vehicle>>;

    async fn update(&self, vehicle: Vehicle) -> DomainResult<Vehicle>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
