//! SeaORM implementation of PaymentMethodRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::{db_err, ensure_deleted};
use crate::domain::payment_method::{PaymentMethod, PaymentMethodRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::payment_method;

pub struct SeaOrmPaymentMethodRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentMethodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: payment_method::Model) -> PaymentMethod {
    PaymentMethod {
        id: m.id,
        customer_id: m.customer_id,
        method_type: m.method_type,
        details: m.details,
        primary_method: m.primary_method,
        created_at: m.created_at,
    }
}

fn domain_to_active(m: PaymentMethod) -> payment_method::ActiveModel {
    payment_method::ActiveModel {
        id: if m.id > 0 { Set(m.id) } else { NotSet },
        customer_id: Set(m.customer_id),
        method_type: Set(m.method_type),
        details: Set(m.details),
        primary_method: Set(m.primary_method),
        created_at: Set(m.created_at),
    }
}

#[async_trait]
impl PaymentMethodRepository for SeaOrmPaymentMethodRepository {
    async fn create(&self, mut m: PaymentMethod) -> DomainResult<PaymentMethod> {
        debug!("Inserting payment method for customer {}", m.customer_id);
        m.id = 0;
        let model = domain_to_active(m).insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<PaymentMethod>> {
        let model = payment_method::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>> {
        let models = payment_method::Entity::find()
            .order_by_asc(payment_method::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<PaymentMethod>> {
        let models = payment_method::Entity::find()
            .filter(payment_method::Column::CustomerId.eq(customer_id))
            .order_by_asc(payment_method::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, m: PaymentMethod) -> DomainResult<PaymentMethod> {
        debug!("Updating payment method: {}", m.id);
        if payment_method::Entity::find_by_id(m.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(DomainError::not_found("PaymentMethod", m.id));
        }
        let model = domain_to_active(m).update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = payment_method::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        ensure_deleted("PaymentMethod", id, result.rows_affected)
    }
}
