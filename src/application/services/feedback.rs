//! Feedback service

use std::sync::Arc;

use tracing::info;

use crate::application::lookup::Lookup;
use crate::domain::{
    CreateFeedbackDto, DomainError, DomainResult, Feedback, RepositoryProvider, UpdateFeedbackDto,
};
use crate::shared::validate_input;

pub struct FeedbackService {
    repos: Arc<dyn RepositoryProvider>,
    lookup: Lookup,
}

impl FeedbackService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            lookup: Lookup::new(repos.clone()),
            repos,
        }
    }

    /// Rate a reservation. Only its own customer may, and only once.
    pub async fn save(&self, dto: CreateFeedbackDto) -> DomainResult<Feedback> {
        validate_input(&dto)?;
        self.lookup.referenced_customer(dto.customer_id).await?;
        let reservation = self.lookup.referenced_reservation(dto.reservation_id).await?;
        if reservation.customer_id != dto.customer_id {
            return Err(DomainError::invalid_reference(
                "Reservation",
                "reservation_id",
                dto.reservation_id,
            ));
        }
        if !self
            .repos
            .feedback()
            .find_by_reservation(dto.reservation_id)
            .await?
            .is_empty()
        {
            return Err(DomainError::Conflict(format!(
                "reservation {} already has feedback",
                dto.reservation_id
            )));
        }

        let feedback = self
            .repos
            .feedback()
            .create(Feedback {
                id: 0,
                customer_id: dto.customer_id,
                reservation_id: dto.reservation_id,
                rating: dto.rating,
                comments: dto.comments,
            })
            .await?;

        info!(
            feedback_id = feedback.id,
            reservation_id = feedback.reservation_id,
            rating = feedback.rating,
            "Feedback received"
        );
        Ok(feedback)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Feedback>> {
        self.repos.feedback().find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<Feedback> {
        self.repos
            .feedback()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Feedback", id))
    }

    pub async fn update(&self, id: i64, dto: UpdateFeedbackDto) -> DomainResult<Feedback> {
        let mut feedback = self.get_by_id(id).await?;
        validate_input(&dto)?;

        feedback.rating = dto.rating;
        feedback.comments = dto.comments;

        let feedback = self.repos.feedback().update(feedback).await?;
        info!(feedback_id = id, rating = feedback.rating, "Feedback updated");
        Ok(feedback)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get_by_id(id).await?;
        self.repos.feedback().delete(id).await?;
        info!(feedback_id = id, "Feedback deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{booking, new_customer, services, vehicle_dto, TestServices};

    async fn setup() -> (TestServices, i64, i64) {
        let s = services();
        let customer = s.customers.save(new_customer("john")).await.unwrap();
        let vehicle = s.vehicles.save(vehicle_dto(None)).await.unwrap();
        let reservation = s
            .reservations
            .save(booking(customer.id, vehicle.id, 10, 12))
            .await
            .unwrap();
        (s, customer.id, reservation.id)
    }

    fn rate(customer_id: i64, reservation_id: i64, rating: i32) -> CreateFeedbackDto {
        CreateFeedbackDto {
            customer_id,
            reservation_id,
            rating,
            comments: Some("Smooth pickup".into()),
        }
    }

    #[tokio::test]
    async fn rating_bounds_are_inclusive() {
        let (s, customer, reservation) = setup().await;
        for bad in [0, 6] {
            let Err(DomainError::ValidationFailed(v)) =
                s.feedback.save(rate(customer, reservation, bad)).await
            else {
                panic!("rating {bad} should be rejected");
            };
            assert_eq!(v[0].field, "rating");
        }
        assert!(s.feedback.get_all().await.unwrap().is_empty());

        let f = s.feedback.save(rate(customer, reservation, 5)).await.unwrap();
        assert_eq!(f.rating, 5);

        let low = s
            .feedback
            .update(f.id, UpdateFeedbackDto { rating: 1, comments: None })
            .await
            .unwrap();
        assert_eq!(low.rating, 1);
        assert_eq!(low.reservation_id, reservation);
    }

    #[tokio::test]
    async fn one_feedback_per_reservation() {
        let (s, customer, reservation) = setup().await;
        s.feedback.save(rate(customer, reservation, 4)).await.unwrap();
        assert!(matches!(
            s.feedback.save(rate(customer, reservation, 3)).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn only_the_reservations_customer_may_rate_it() {
        let (s, _, reservation) = setup().await;
        let stranger = s.customers.save(new_customer("jane")).await.unwrap();
        assert!(matches!(
            s.feedback.save(rate(stranger.id, reservation, 4)).await,
            Err(DomainError::InvalidReference { field: "reservation_id", .. })
        ));
    }

    #[tokio::test]
    async fn feedback_blocks_reservation_delete() {
        let (s, customer, reservation) = setup().await;
        let f = s.feedback.save(rate(customer, reservation, 4)).await.unwrap();
        assert!(matches!(
            s.reservations.delete(reservation).await,
            Err(DomainError::Conflict(_))
        ));
        s.feedback.delete(f.id).await.unwrap();
        assert!(matches!(
            s.feedback.get_by_id(f.id).await,
            Err(DomainError::NotFound { entity: "Feedback", .. })
        ));
    }
}
