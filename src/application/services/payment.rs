//! Payment service

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::lookup::Lookup;
use crate::domain::{
    CreatePaymentDto, DomainError, DomainResult, FieldViolation, Payment, PaymentStatus,
    RepositoryProvider, UpdatePaymentDto,
};
use crate::shared::validate_input;

pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
    lookup: Lookup,
}

impl PaymentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            lookup: Lookup::new(repos.clone()),
            repos,
        }
    }

    /// Record a payment against an existing reservation.
    pub async fn save(&self, dto: CreatePaymentDto) -> DomainResult<Payment> {
        validate_input(&dto)?;
        let status = dto.status.unwrap_or_default();
        if status == PaymentStatus::Refunded {
            return Err(DomainError::ValidationFailed(vec![FieldViolation::new(
                "status",
                "a new payment cannot start REFUNDED",
            )]));
        }
        self.lookup.referenced_reservation(dto.reservation_id).await?;

        let payment = self
            .repos
            .payments()
            .create(Payment {
                id: 0,
                reservation_id: dto.reservation_id,
                payment_time: dto.payment_time.unwrap_or_else(Utc::now),
                amount: dto.amount,
                payment_method: dto.payment_method,
                status,
            })
            .await?;

        info!(
            payment_id = payment.id,
            reservation_id = payment.reservation_id,
            amount = %payment.amount,
            "Payment recorded"
        );
        Ok(payment)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Payment>> {
        self.repos.payments().find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<Payment> {
        self.repos
            .payments()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Payment", id))
    }

    pub async fn get_by_reservation(&self, reservation_id: i64) -> DomainResult<Vec<Payment>> {
        self.repos.payments().find_by_reservation(reservation_id).await
    }

    pub async fn update(&self, id: i64, dto: UpdatePaymentDto) -> DomainResult<Payment> {
        let mut payment = self.get_by_id(id).await?;
        validate_input(&dto)?;

        if let Some(next) = dto.status {
            payment.transition_to(next)?;
        }
        if let Some(time) = dto.payment_time {
            payment.payment_time = time;
        }
        payment.amount = dto.amount;
        payment.payment_method = dto.payment_method;

        let payment = self.repos.payments().update(payment).await?;
        info!(payment_id = id, status = %payment.status, "Payment updated");
        Ok(payment)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get_by_id(id).await?;
        self.repos.payments().delete(id).await?;
        info!(payment_id = id, "Payment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{booking, new_customer, services, vehicle_dto};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn payment(reservation_id: i64, amount: &str) -> CreatePaymentDto {
        CreatePaymentDto {
            reservation_id,
            payment_time: None,
            amount: Decimal::from_str(amount).unwrap(),
            payment_method: "CARD".into(),
            status: None,
        }
    }

    fn amend(status: Option<PaymentStatus>) -> UpdatePaymentDto {
        UpdatePaymentDto {
            payment_time: None,
            amount: Decimal::from_str("49.99").unwrap(),
            payment_method: "CARD".into(),
            status,
        }
    }

    async fn reservation(s: &crate::application::test_support::TestServices) -> i64 {
        let customer = s.customers.save(new_customer("john")).await.unwrap();
        let vehicle = s.vehicles.save(vehicle_dto(None)).await.unwrap();
        s.reservations
            .save(booking(customer.id, vehicle.id, 10, 12))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn payment_defaults_to_pending_now() {
        let s = services();
        let reservation_id = reservation(&s).await;
        let before = Utc::now();
        let p = s.payments.save(payment(reservation_id, "49.99")).await.unwrap();

        assert_eq!(p.status, PaymentStatus::Pending);
        assert!(p.payment_time >= before);
        assert_eq!(p.amount, Decimal::new(4999, 2));
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected() {
        let s = services();
        let reservation_id = reservation(&s).await;
        for amount in ["0", "-5.00"] {
            let Err(DomainError::ValidationFailed(v)) =
                s.payments.save(payment(reservation_id, amount)).await
            else {
                panic!("expected validation failure for {amount}");
            };
            assert_eq!(v[0].field, "amount");
        }
    }

    #[tokio::test]
    async fn unknown_reservation_is_an_invalid_reference() {
        let s = services();
        assert!(matches!(
            s.payments.save(payment(77, "10")).await,
            Err(DomainError::InvalidReference { field: "reservation_id", .. })
        ));
    }

    #[tokio::test]
    async fn status_follows_payment_lifecycle() {
        let s = services();
        let reservation_id = reservation(&s).await;
        let p = s.payments.save(payment(reservation_id, "49.99")).await.unwrap();

        assert!(matches!(
            s.payments.update(p.id, amend(Some(PaymentStatus::Refunded))).await,
            Err(DomainError::InvalidTransition { entity: "Payment", .. })
        ));
        s.payments.update(p.id, amend(Some(PaymentStatus::Completed))).await.unwrap();
        let refunded = s.payments.update(p.id, amend(Some(PaymentStatus::Refunded))).await.unwrap();
        assert_eq!(refunded.status, PaymentStatus::Refunded);
        assert_eq!(refunded.payment_time, p.payment_time);
    }

    #[tokio::test]
    async fn reservation_with_payment_cannot_be_deleted() {
        let s = services();
        let reservation_id = reservation(&s).await;
        let p = s.payments.save(payment(reservation_id, "20")).await.unwrap();

        assert!(matches!(
            s.reservations.delete(reservation_id).await,
            Err(DomainError::Conflict(_))
        ));
        s.payments.delete(p.id).await.unwrap();
        s.reservations.delete(reservation_id).await.unwrap();
        assert!(s.payments.get_by_reservation(reservation_id).await.unwrap().is_empty());
    }
}
