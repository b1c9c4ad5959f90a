//! Payment repository interface

use async_trait::async_trait;

use super::model::Payment;
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: Payment) -> DomainResult<Payment>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Payment>>;

    async fn find_all(&self) -> DomainResult<Vec<Payment>>;

    async fn find_by_reservation(&self, reservation_id: i64) -> DomainResult<Vec<Payment>>;

    async fn update(&self, payment: Payment) -> DomainResult<Payment>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
