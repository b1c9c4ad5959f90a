//! Vehicle service

use std::sync::Arc;

use tracing::info;

use crate::application::lookup::{ensure_unreferenced, Lookup};
use crate::domain::{DomainResult, RepositoryProvider, Vehicle, VehicleDto};
use crate::shared::validate_input;

pub struct VehicleService {
    repos: Arc<dyn RepositoryProvider>,
    lookup: Lookup,
}

impl VehicleService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            lookup: Lookup::new(repos.clone()),
            repos,
        }
    }

    pub async fn save(&self, dto: VehicleDto) -> DomainResult<Vehicle> {
        validate_input(&dto)?;
        if let Some(driver_id) = dto.driver_id {
            self.lookup.referenced_driver(driver_id).await?;
        }

        let vehicle = self
            .repos
            .vehicles()
            .create(Vehicle {
                id: 0,
                driver_id: dto.driver_id,
                vehicle_type: dto.vehicle_type,
                license_plate: dto.license_plate,
                status: dto.status.unwrap_or_default(),
            })
            .await?;

        info!(vehicle_id = vehicle.id, plate = %vehicle.license_plate, "Vehicle created");
        Ok(vehicle)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Vehicle>> {
        self.repos.vehicles().find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<Vehicle> {
        self.lookup.vehicle(id).await
    }

    pub async fn get_by_driver(&self, driver_id: i64) -> DomainResult<Vec<Vehicle>> {
        self.repos.vehicles().find_by_driver(driver_id).await
    }

    /// Status is kept when the request omits it.
    pub async fn update(&self, id: i64, dto: VehicleDto) -> DomainResult<Vehicle> {
        validate_input(&dto)?;
        let existing = self.lookup.vehicle(id).await?;
        if let Some(driver_id) = dto.driver_id {
            self.lookup.referenced_driver(driver_id).await?;
        }

        let vehicle = self
            .repos
            .vehicles()
            .update(Vehicle {
                id: existing.id,
                driver_id: dto.driver_id,
                vehicle_type: dto.vehicle_type,
                license_plate: dto.license_plate,
                status: dto.status.unwrap_or(existing.status),
            })
            .await?;

        info!(vehicle_id = id, status = %vehicle.status, "Vehicle updated");
        Ok(vehicle)
    }

    /// Delete a vehicle with no reservation history.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.lookup.vehicle(id).await?;
        let reservations = self.repos.reservations().find_by_vehicle(id).await?.len();
        ensure_unreferenced("Vehicle", id, &[("reservations", reservations)])?;

        self.repos.vehicles().delete(id).await?;
        info!(vehicle_id = id, "Vehicle deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{new_driver, services, vehicle_dto};
    use crate::domain::{DomainError, VehicleStatus};

    #[tokio::test]
    async fn new_vehicle_defaults_to_available() {
        let s = services();
        let vehicle = s.vehicles.save(vehicle_dto(None)).await.unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Available);
        assert!(vehicle.driver_id.is_none());
    }

    #[tokio::test]
    async fn unknown_driver_is_an_invalid_reference() {
        let s = services();
        assert!(matches!(
            s.vehicles.save(vehicle_dto(Some(42))).await,
            Err(DomainError::InvalidReference { field: "driver_id", .. })
        ));
        assert!(s.vehicles.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_status_when_omitted() {
        let s = services();
        let driver = s.drivers.save(new_driver("dana")).await.unwrap();
        let mut dto = vehicle_dto(Some(driver.id));
        dto.status = Some(VehicleStatus::Maintenance);
        let saved = s.vehicles.save(dto).await.unwrap();

        let mut change = vehicle_dto(None);
        change.license_plate = "XYZ-999".into();
        let updated = s.vehicles.update(saved.id, change).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.status, VehicleStatus::Maintenance);
        assert_eq!(updated.license_plate, "XYZ-999");
        assert!(updated.driver_id.is_none());
    }

    #[tokio::test]
    async fn get_by_driver_lists_assigned_vehicles() {
        let s = services();
        let driver = s.drivers.save(new_driver("dana")).await.unwrap();
        s.vehicles.save(vehicle_dto(Some(driver.id))).await.unwrap();
        s.vehicles.save(vehicle_dto(None)).await.unwrap();

        assert_eq!(s.vehicles.get_by_driver(driver.id).await.unwrap().len(), 1);
    }
}
