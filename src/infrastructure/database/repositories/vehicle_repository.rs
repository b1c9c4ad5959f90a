//! SeaORM implementation of VehicleRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::{db_err, ensure_deleted};
use crate::domain::vehicle::{Vehicle, VehicleRepository, VehicleStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::vehicle;

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: vehicle::Model) -> DomainResult<Vehicle> {
    let status = VehicleStatus::parse(&m.status).ok_or_else(|| {
        DomainError::StorageUnavailable(format!(
            "vehicle {} has unknown status '{}'",
            m.id, m.status
        ))
    })?;
    Ok(Vehicle {
        id: m.id,
        driver_id: m.driver_id,
        vehicle_type: m.vehicle_type,
        license_plate: m.license_plate,
        status,
    })
}

fn domain_to_active(v: Vehicle) -> vehicle::ActiveModel {
    vehicle::ActiveModel {
        id: if v.id > 0 { Set(v.id) } else { NotSet },
        driver_id: Set(v.driver_id),
        vehicle_type: Set(v.vehicle_type),
        license_plate: Set(v.license_plate),
        status: Set(v.status.as_str().to_string()),
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn create(&self, mut v: Vehicle) -> DomainResult<Vehicle> {
        debug!("Inserting vehicle: {}", v.license_plate);
        v.id = 0;
        let model = domain_to_active(v).insert(&self.db).await.map_err(db_err)?;
        model_to_domain(model)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Vehicle>> {
        let models = vehicle::Entity::find()
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_driver(&self, driver_id: i64) -> DomainResult<Vec<Vehicle>> {
        let models = vehicle::Entity::find()
            .filter(vehicle::Column::DriverId.eq(driver_id))
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn update(&self, v: Vehicle) -> DomainResult<Vehicle> {
        debug!("Updating vehicle: {}", v.id);
        if vehicle::Entity::find_by_id(v.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(DomainError::not_found("Vehicle", v.id));
        }
        let model = domain_to_active(v).update(&self.db).await.map_err(db_err)?;
        model_to_domain(model)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = vehicle::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        ensure_deleted("Vehicle", id, result.rows_affected)
    }
}
