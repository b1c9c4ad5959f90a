//! Customer service: account lifecycle and credential checks

use std::sync::Arc;

use tracing::info;

use crate::application::lookup::{ensure_unreferenced, Lookup};
use crate::domain::{
    CreateCustomerDto, Customer, DomainError, DomainResult, RepositoryProvider, UpdateCustomerDto,
};
use crate::infrastructure::crypto::password::PasswordHasher;
use crate::shared::validate_input;

pub struct CustomerService {
    repos: Arc<dyn RepositoryProvider>,
    lookup: Lookup,
    hasher: PasswordHasher,
}

impl CustomerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, hasher: PasswordHasher) -> Self {
        Self {
            lookup: Lookup::new(repos.clone()),
            repos,
            hasher,
        }
    }

    /// Register a customer. The password is hashed unless it already is one.
    pub async fn save(&self, dto: CreateCustomerDto) -> DomainResult<Customer> {
        validate_input(&dto)?;
        self.ensure_username_free(&dto.username, None).await?;

        let password_hash = self.hasher.protect(&dto.password)?;
        let customer = self
            .repos
            .customers()
            .create(Customer {
                id: 0,
                username: dto.username,
                password_hash,
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                phone_number: dto.phone_number,
                status: dto.status,
                payment_method1: dto.payment_method1,
                payment_method2: dto.payment_method2,
                detail_payment_method1: dto.detail_payment_method1,
                detail_payment_method2: dto.detail_payment_method2,
            })
            .await?;

        info!(customer_id = customer.id, username = %customer.username, "Customer created");
        Ok(customer)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Customer>> {
        self.repos.customers().find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> DomainResult<Customer> {
        self.lookup.customer(id).await
    }

    pub async fn get_by_username(&self, username: &str) -> DomainResult<Customer> {
        self.repos
            .customers()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Customer",
                field: "username",
                value: username.to_string(),
            })
    }

    /// Rewrite mutable fields. Omitting the password keeps the stored hash.
    pub async fn update(&self, id: i64, dto: UpdateCustomerDto) -> DomainResult<Customer> {
        validate_input(&dto)?;
        let existing = self.lookup.customer(id).await?;
        if dto.username != existing.username {
            self.ensure_username_free(&dto.username, Some(id)).await?;
        }

        let password_hash = match dto.password.as_deref() {
            Some(password) => self.hasher.protect(password)?,
            None => existing.password_hash,
        };

        let customer = self
            .repos
            .customers()
            .update(Customer {
                id: existing.id,
                username: dto.username,
                password_hash,
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                phone_number: dto.phone_number,
                status: dto.status,
                payment_method1: dto.payment_method1,
                payment_method2: dto.payment_method2,
                detail_payment_method1: dto.detail_payment_method1,
                detail_payment_method2: dto.detail_payment_method2,
            })
            .await?;

        info!(customer_id = id, "Customer updated");
        Ok(customer)
    }

    /// Delete a customer that no reservation, payment method or feedback refers to.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.lookup.customer(id).await?;

        let reservations = self.repos.reservations().find_by_customer(id).await?.len();
        let methods = self.repos.payment_methods().find_by_customer(id).await?.len();
        let feedback = self.repos.feedback().find_by_customer(id).await?.len();
        ensure_unreferenced(
            "Customer",
            id,
            &[
                ("reservations", reservations),
                ("payment methods", methods),
                ("feedback", feedback),
            ],
        )?;

        self.repos.customers().delete(id).await?;
        info!(customer_id = id, "Customer deleted");
        Ok(())
    }

    /// Check a username/password pair against the stored hash.
    pub async fn authenticate(&self, username: &str, password: &str) -> DomainResult<Customer> {
        let Some(customer) = self.repos.customers().find_by_username(username).await? else {
            return Err(DomainError::InvalidCredentials);
        };
        if !self.hasher.verify(password, &customer.password_hash)? {
            return Err(DomainError::InvalidCredentials);
        }
        Ok(customer)
    }

    async fn ensure_username_free(&self, username: &str, owner: Option<i64>) -> DomainResult<()> {
        match self.repos.customers().find_by_username(username).await? {
            Some(taken) if Some(taken.id) != owner => Err(DomainError::Conflict(format!(
                "username '{}' is already taken",
                username
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{new_customer, services};
    use crate::infrastructure::crypto::password::is_hashed;

    #[tokio::test]
    async fn save_assigns_id_and_hashes_password() {
        let s = services();
        let customer = s.customers.save(new_customer("john")).await.unwrap();

        assert!(customer.id > 0);
        assert_ne!(customer.password_hash, "secret1");
        assert!(is_hashed(&customer.password_hash));
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let s = services();
        let saved = s.customers.save(new_customer("john")).await.unwrap();
        let loaded = s.customers.get_by_id(saved.id).await.unwrap();
        assert_eq!(saved, loaded);
    }

    #[tokio::test]
    async fn validation_reports_every_bad_field() {
        let s = services();
        let mut dto = new_customer(" ");
        dto.password = "123".into();
        dto.email = "not-an-email".into();

        let Err(DomainError::ValidationFailed(violations)) = s.customers.save(dto).await else {
            panic!("expected validation failure");
        };
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password", "username"]);
        assert!(s.customers.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let s = services();
        s.customers.save(new_customer("john")).await.unwrap();
        assert!(matches!(
            s.customers.save(new_customer("john")).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn resaving_a_hash_does_not_double_hash() {
        let s = services();
        let first = s.customers.save(new_customer("john")).await.unwrap();

        let mut again = new_customer("johnny");
        again.password = first.password_hash.clone();
        let second = s.customers.save(again).await.unwrap();
        assert_eq!(second.password_hash, first.password_hash);

        let update = UpdateCustomerDto {
            username: "john".into(),
            password: Some(first.password_hash.clone()),
            email: "john@example.com".into(),
            first_name: None,
            last_name: None,
            phone_number: None,
            status: None,
            payment_method1: None,
            payment_method2: None,
            detail_payment_method1: None,
            detail_payment_method2: None,
        };
        let updated = s.customers.update(first.id, update).await.unwrap();
        assert_eq!(updated.password_hash, first.password_hash);
        assert!(s.customers.authenticate("john", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn update_preserves_identity_and_keeps_hash_when_password_omitted() {
        let s = services();
        let saved = s.customers.save(new_customer("john")).await.unwrap();

        let update = UpdateCustomerDto {
            username: "john".into(),
            password: None,
            email: "john@new.example.com".into(),
            first_name: Some("John".into()),
            last_name: None,
            phone_number: Some("+100200".into()),
            status: Some("A".into()),
            payment_method1: None,
            payment_method2: None,
            detail_payment_method1: None,
            detail_payment_method2: None,
        };
        let updated = s.customers.update(saved.id, update).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.password_hash, saved.password_hash);
        assert_eq!(updated.email, "john@new.example.com");
    }

    #[tokio::test]
    async fn update_to_another_users_name_conflicts() {
        let s = services();
        s.customers.save(new_customer("john")).await.unwrap();
        let jane = s.customers.save(new_customer("jane")).await.unwrap();

        let update = UpdateCustomerDto {
            username: "john".into(),
            password: None,
            email: "jane@example.com".into(),
            first_name: None,
            last_name: None,
            phone_number: None,
            status: None,
            payment_method1: None,
            payment_method2: None,
            detail_payment_method1: None,
            detail_payment_method2: None,
        };
        assert!(matches!(
            s.customers.update(jane.id, update).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn delete_missing_customer_is_not_found() {
        let s = services();
        assert!(matches!(
            s.customers.delete(999).await,
            Err(DomainError::NotFound { entity: "Customer", .. })
        ));
    }

    #[tokio::test]
    async fn authenticate_checks_the_hash() {
        let s = services();
        s.customers.save(new_customer("john")).await.unwrap();

        assert!(s.customers.authenticate("john", "secret1").await.is_ok());
        assert!(matches!(
            s.customers.authenticate("john", "wrong").await,
            Err(DomainError::InvalidCredentials)
        ));
        assert!(matches!(
            s.customers.authenticate("nobody", "secret1").await,
            Err(DomainError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn get_by_username_finds_the_account() {
        let s = services();
        let saved = s.customers.save(new_customer("john")).await.unwrap();
        assert_eq!(s.customers.get_by_username("john").await.unwrap().id, saved.id);
        assert!(matches!(
            s.customers.get_by_username("ghost").await,
            Err(DomainError::NotFound { field: "username", .. })
        ));
    }
}
