//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::{db_err, ensure_deleted};
use crate::domain::customer::{Customer, CustomerRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: customer::Model) -> Customer {
    Customer {
        id: m.id,
        username: m.username,
        password_hash: m.password_hash,
        first_name: m.first_name,
        last_name: m.last_name,
        email: m.email,
        phone_number: m.phone_number,
        status: m.status,
        payment_method1: m.payment_method1,
        payment_method2: m.payment_method2,
        detail_payment_method1: m.detail_payment_method1,
        detail_payment_method2: m.detail_payment_method2,
    }
}

fn domain_to_active(c: Customer) -> customer::ActiveModel {
    customer::ActiveModel {
        id: if c.id > 0 { Set(c.id) } else { NotSet },
        username: Set(c.username),
        password_hash: Set(c.password_hash),
        first_name: Set(c.first_name),
        last_name: Set(c.last_name),
        email: Set(c.email),
        phone_number: Set(c.phone_number),
        status: Set(c.status),
        payment_method1: Set(c.payment_method1),
        payment_method2: Set(c.payment_method2),
        detail_payment_method1: Set(c.detail_payment_method1),
        detail_payment_method2: Set(c.detail_payment_method2),
    }
}

// ── CustomerRepository impl ─────────────────────────────────────

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn create(&self, mut c: Customer) -> DomainResult<Customer> {
        debug!("Inserting customer: {}", c.username);
        c.id = 0;
        let model = domain_to_active(c).insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find()
            .filter(customer::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, c: Customer) -> DomainResult<Customer> {
        debug!("Updating customer: {}", c.id);
        if customer::Entity::find_by_id(c.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(DomainError::not_found("Customer", c.id));
        }
        let model = domain_to_active(c).update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        ensure_deleted("Customer", id, result.rows_affected)
    }
}
