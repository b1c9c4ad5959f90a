//! Payment method service

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::application::lookup::Lookup;
use crate::domain::{
    CreatePaymentMethodDto, DomainError, DomainResult, PaymentMethod, RepositoryProvider,
    UpdatePaymentMethodDto,
};
use crate::shared::validate_input;

pub struct PaymentMethodService {
    repos: Arc<dyn RepositoryProvider>,
    lookup: Lookup,
}

impl PaymentMethodService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            lookup: Lookup::new(repos.clone()),
            repos,
        }
    }

    pub async fn save(&self, dto: CreatePaymentMethodDto) -> DomainResult<PaymentMethod> {
        validate_input(&dto)?;
        self.lookup.referenced_customer(dto.customer_id).await?;

        if dto.primary_method {
            self.demote_primaries(dto.customer_id, None).await?;
        }
        let method = self
            .repos
            .payment_methods()
            .create(PaymentMethod {
                id: 0,
                customer_id: dto.customer_id,
                method_type: dto.method_type,
                details: dto.details,
                primary_method: dto.primary_method,
                created_at: dto.created_at.unwrap_or_else(Utc::now),
            })
            .await?;

        info!(
            payment_method_id = method.id,
            customer_id = method.customer_id,
            primary = method.primary_method,
            "Payment method added"
        );
        Ok(method)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<PaymentMethod>> {
        self.repos.payment_methods().find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<PaymentMethod> {
        self.repos
            .payment_methods()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("PaymentMethod", id))
    }

    pub async fn get_by_customer_id(&self, customer_id: i64) -> DomainResult<Vec<PaymentMethod>> {
        self.repos.payment_methods().find_by_customer(customer_id).await
    }

    /// Owner and `created_at` are kept from the stored record.
    pub async fn update(&self, id: i64, dto: UpdatePaymentMethodDto) -> DomainResult<PaymentMethod> {
        let mut method = self.get_by_id(id).await?;
        validate_input(&dto)?;

        if dto.primary_method && !method.primary_method {
            self.demote_primaries(method.customer_id, Some(id)).await?;
        }
        method.method_type = dto.method_type;
        method.details = dto.details;
        method.primary_method = dto.primary_method;

        let method = self.repos.payment_methods().update(method).await?;
        info!(payment_method_id = id, "Payment method updated");
        Ok(method)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get_by_id(id).await?;
        self.repos.payment_methods().delete(id).await?;
        info!(payment_method_id = id, "Payment method deleted");
        Ok(())
    }

    async fn demote_primaries(&self, customer_id: i64, keep: Option<i64>) -> DomainResult<()> {
        let methods = self.repos.payment_methods().find_by_customer(customer_id).await?;
        for mut other in methods {
            if other.primary_method && Some(other.id) != keep {
                debug!(payment_method_id = other.id, customer_id, "Demoting primary method");
                other.primary_method = false;
                self.repos.payment_methods().update(other).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{new_customer, services};
    use chrono::{TimeZone, Utc};

    fn card(customer_id: i64, primary: bool) -> CreatePaymentMethodDto {
        CreatePaymentMethodDto {
            customer_id,
            method_type: "CARD".into(),
            details: Some("**** 4242".into()),
            primary_method: primary,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn created_at_is_assigned_and_never_overwritten() {
        let s = services();
        let customer = s.customers.save(new_customer("john")).await.unwrap();
        let method = s.payment_methods.save(card(customer.id, false)).await.unwrap();

        let updated = s
            .payment_methods
            .update(
                method.id,
                UpdatePaymentMethodDto {
                    method_type: "PAYPAL".into(),
                    details: None,
                    primary_method: false,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.created_at, method.created_at);
        assert_eq!(updated.customer_id, customer.id);
        assert_eq!(updated.method_type, "PAYPAL");
    }

    #[tokio::test]
    async fn supplied_created_at_is_kept() {
        let s = services();
        let customer = s.customers.save(new_customer("john")).await.unwrap();
        let stamp = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut dto = card(customer.id, false);
        dto.created_at = Some(stamp);
        assert_eq!(s.payment_methods.save(dto).await.unwrap().created_at, stamp);
    }

    #[tokio::test]
    async fn new_primary_demotes_the_old_one() {
        let s = services();
        let customer = s.customers.save(new_customer("john")).await.unwrap();
        let first = s.payment_methods.save(card(customer.id, true)).await.unwrap();
        let second = s.payment_methods.save(card(customer.id, true)).await.unwrap();

        let methods = s.payment_methods.get_by_customer_id(customer.id).await.unwrap();
        let primaries: Vec<i64> = methods.iter().filter(|m| m.primary_method).map(|m| m.id).collect();
        assert_eq!(primaries, vec![second.id]);
        assert!(!s.payment_methods.get_by_id(first.id).await.unwrap().primary_method);

        s.payment_methods
            .update(
                first.id,
                UpdatePaymentMethodDto {
                    method_type: "CARD".into(),
                    details: None,
                    primary_method: true,
                },
            )
            .await
            .unwrap();
        assert!(!s.payment_methods.get_by_id(second.id).await.unwrap().primary_method);
    }

    #[tokio::test]
    async fn unknown_customer_is_an_invalid_reference() {
        let s = services();
        assert!(matches!(
            s.payment_methods.save(card(5, false)).await,
            Err(DomainError::InvalidReference { field: "customer_id", .. })
        ));
    }

    #[tokio::test]
    async fn customer_with_payment_method_cannot_be_deleted() {
        let s = services();
        let customer = s.customers.save(new_customer("john")).await.unwrap();
        let method = s.payment_methods.save(card(customer.id, false)).await.unwrap();

        assert!(matches!(s.customers.delete(customer.id).await, Err(DomainError::Conflict(_))));
        s.payment_methods.delete(method.id).await.unwrap();
        s.customers.delete(customer.id).await.unwrap();
    }
}
