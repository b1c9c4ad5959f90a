//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer; the store assigns the id
    async fn create(&self, customer: Customer) -> DomainResult<Customer>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Customer>>;

    async fn find_all(&self) -> DomainResult<Vec<Customer>>;

    /// Rewrite an existing customer (NotFound if absent)
    async fn update(&self, customer: Customer) -> DomainResult<Customer>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
