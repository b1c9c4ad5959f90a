//! Feedback repository interface

use async_trait::async_trait;

use super::model::Feedback;
use crate::domain::DomainResult;

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, feedback: Feedback) -> DomainResult<Feedback>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Feedback>>;

    async fn find_all(&self) -> DomainResult<Vec<Feedback>>;

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Feedback>>;

    async fn find_by_reservation(&self, reservation_id: i64) -> DomainResult<Vec<Feedback>>;

    async fn update(&self, feedback: Feedback) -> DomainResult<Feedback>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}
