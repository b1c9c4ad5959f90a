//! Payment method repository interface

use async_trait::async_trait;

use super::model::PaymentMethod;
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    async fn create(&self, method: PaymentMethod) -> DomainResult<PaymentMethod>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PaymentMethod>>;

    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>>;

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<PaymentMethod>>;

    async fn update(&self, method: PaymentMethod) -> DomainResult<PaymentMethod>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
