//! Driver repository interface

use async_trait::async_trait;

use super::model::Driver;
use crate::domain::DomainResult;

#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Persist a new driver; the store assigns the id
    async fn create(&self, driver: Driver) -> DomainResult<Driver>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Driver>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Driver>>;

    async fn find_all(&self) -> DomainResult<Vec<Driver>>;

    async fn update(&self, driver: Driver) -> DomainResult<Driver>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
