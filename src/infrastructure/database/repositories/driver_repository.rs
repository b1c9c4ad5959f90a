//! SeaORM implementation of DriverRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::{db_err, ensure_deleted};
use crate::domain::driver::{Driver, DriverRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::driver;

pub struct SeaOrmDriverRepository {
    db: DatabaseConnection,
}

impl SeaOrmDriverRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: driver::Model) -> Driver {
    Driver {
        id: m.id,
        username: m.username,
        password_hash: m.password_hash,
        email: m.email,
        phone_number: m.phone_number,
        license_number: m.license_number,
        date_of_birth: m.date_of_birth,
        place_of_birth: m.place_of_birth,
        address: m.address,
        status: m.status,
    }
}

fn domain_to_active(d: Driver) -> driver::ActiveModel {
    driver::ActiveModel {
        id: if d.id > 0 { Set(d.id) } else { NotSet },
        username: Set(d.username),
        password_hash: Set(d.password_hash),
        email: Set(d.email),
        phone_number: Set(d.phone_number),
        license_number: Set(d.license_number),
        date_of_birth: Set(d.date_of_birth),
        place_of_birth: Set(d.place_of_birth),
        address: Set(d.address),
        status: Set(d.status),
    }
}

#[async_trait]
impl DriverRepository for SeaOrmDriverRepository {
    async fn create(&self, mut d: Driver) -> DomainResult<Driver> {
        debug!("Inserting driver: {}", d.username);
        d.id = 0;
        let model = domain_to_active(d).insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Driver>> {
        let model = driver::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Driver>> {
        let model = driver::Entity::find()
            .filter(driver::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Driver>> {
        let models = driver::Entity::find()
            .order_by_asc(driver::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, d: Driver) -> DomainResult<Driver> {
        debug!("Updating driver: {}", d.id);
        if driver::Entity::find_by_id(d.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(DomainError::not_found("Driver", d.id));
        }
        let model = domain_to_active(d).update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = driver::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        ensure_deleted("Driver", id, result.rows_affected)
    }
}
