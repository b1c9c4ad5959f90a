//! Driver service

use std::sync::Arc;

use tracing::info;

use crate::application::lookup::{ensure_unreferenced, Lookup};
use crate::domain::{
    CreateDriverDto, DomainError, DomainResult, Driver, RepositoryProvider, UpdateDriverDto,
};
use crate::infrastructure::crypto::password::PasswordHasher;
use crate::shared::validate_input;

pub struct DriverService {
    repos: Arc<dyn RepositoryProvider>,
    lookup: Lookup,
    hasher: PasswordHasher,
}

impl DriverService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, hasher: PasswordHasher) -> Self {
        Self {
            lookup: Lookup::new(repos.clone()),
            repos,
            hasher,
        }
    }

    pub async fn save(&self, dto: CreateDriverDto) -> DomainResult<Driver> {
        validate_input(&dto)?;
        self.ensure_username_free(&dto.username, None).await?;

        let password_hash = self.hasher.protect(&dto.password)?;
        let driver = self
            .repos
            .drivers()
            .create(Driver {
                id: 0,
                username: dto.username,
                password_hash,
                email: dto.email,
                phone_number: dto.phone_number,
                license_number: dto.license_number,
                date_of_birth: dto.date_of_birth,
                place_of_birth: dto.place_of_birth,
                address: dto.address,
                status: dto.status,
            })
            .await?;

        info!(driver_id = driver.id, license = %driver.license_number, "Driver created");
        Ok(driver)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Driver>> {
        self.repos.drivers().find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<Driver> {
        self.lookup.driver(id).await
    }

    pub async fn update(&self, id: i64, dto: UpdateDriverDto) -> DomainResult<Driver> {
        validate_input(&dto)?;
        let existing = self.lookup.driver(id).await?;
        if dto.username != existing.username {
            self.ensure_username_free(&dto.username, Some(id)).await?;
        }

        let password_hash = match dto.password.as_deref() {
            Some(password) => self.hasher.protect(password)?,
            None => existing.password_hash,
        };

        let driver = self
            .repos
            .drivers()
            .update(Driver {
                id: existing.id,
                username: dto.username,
                password_hash,
                email: dto.email,
                phone_number: dto.phone_number,
                license_number: dto.license_number,
                date_of_birth: dto.date_of_birth,
                place_of_birth: dto.place_of_birth,
                address: dto.address,
                status: dto.status,
            })
            .await?;

        info!(driver_id = id, "Driver updated");
        Ok(driver)
    }

    /// Delete a driver that no vehicle is assigned to.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.lookup.driver(id).await?;
        let vehicles = self.repos.vehicles().find_by_driver(id).await?.len();
        ensure_unreferenced("Driver", id, &[("vehicles", vehicles)])?;

        self.repos.drivers().delete(id).await?;
        info!(driver_id = id, "Driver deleted");
        Ok(())
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<Driver> {
        let Some(driver) = self.repos.drivers().find_by_username(username).await? else {
            return Err(DomainError::InvalidCredentials);
        };
        if !self.hasher.verify(password, &driver.password_hash)? {
            return Err(DomainError::InvalidCredentials);
        }
        Ok(driver)
    }

    async fn ensure_username_free(&self, username: &str, owner: Option<i64>) -> DomainResult<()> {
        match self.repos.drivers().find_by_username(username).await? {
            Some(taken) if Some(taken.id) != owner => Err(DomainError::Conflict(format!(
                "username '{}' is already taken",
                username
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{new_driver, services};
    use crate::domain::VehicleDto;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn save_hashes_password_and_keeps_birth_date() {
        let s = services();
        let mut dto = new_driver("dana");
        dto.date_of_birth = NaiveDate::from_ymd_opt(1990, 4, 12);
        let driver = s.drivers.save(dto).await.unwrap();

        assert_ne!(driver.password_hash, "secret1");
        assert_eq!(driver.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert!(s.drivers.authenticate("dana", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn blank_license_is_rejected() {
        let s = services();
        let mut dto = new_driver("dana");
        dto.license_number = "   ".into();
        let Err(DomainError::ValidationFailed(violations)) = s.drivers.save(dto).await else {
            panic!("expected validation failure");
        };
        assert_eq!(violations[0].field, "license_number");
    }

    #[tokio::test]
    async fn update_with_new_password_rehashes() {
        let s = services();
        let saved = s.drivers.save(new_driver("dana")).await.unwrap();
        let update = UpdateDriverDto {
            username: "dana".into(),
            password: Some("changed1".into()),
            email: "dana@example.com".into(),
            phone_number: None,
            license_number: "B-7788".into(),
            date_of_birth: None,
            place_of_birth: None,
            address: Some("1 Main St".into()),
            status: None,
        };
        let updated = s.drivers.update(saved.id, update).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_ne!(updated.password_hash, saved.password_hash);
        assert!(s.drivers.authenticate("dana", "changed1").await.is_ok());
        assert!(s.drivers.authenticate("dana", "secret1").await.is_err());
    }

    #[tokio::test]
    async fn driver_with_vehicle_cannot_be_deleted() {
        let s = services();
        let driver = s.drivers.save(new_driver("dana")).await.unwrap();
        let vehicle = s
            .vehicles
            .save(VehicleDto {
                driver_id: Some(driver.id),
                vehicle_type: "Sedan".into(),
                license_plate: "ABC-123".into(),
                status: None,
            })
            .await
            .unwrap();

        assert!(matches!(s.drivers.delete(driver.id).await, Err(DomainError::Conflict(_))));

        s.vehicles.delete(vehicle.id).await.unwrap();
        s.drivers.delete(driver.id).await.unwrap();
        assert!(matches!(
            s.drivers.get_by_id(driver.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
