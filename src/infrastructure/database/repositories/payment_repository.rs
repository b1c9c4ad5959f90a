//! SeaORM implementation of PaymentRepository

use std::str::FromStr;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::{db_err, ensure_deleted};
use crate::domain::payment::{Payment, PaymentRepository, PaymentStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::payment;

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: payment::Model) -> DomainResult<Payment> {
    let amount = Decimal::from_str(&m.amount).map_err(|e| {
        DomainError::StorageUnavailable(format!("payment {} has unreadable amount: {}", m.id, e))
    })?;
    let status = PaymentStatus::parse(&m.status).ok_or_else(|| {
        DomainError::StorageUnavailable(format!(
            "payment {} has unknown status '{}'",
            m.id, m.status
        ))
    })?;
    Ok(Payment {
        id: m.id,
        reservation_id: m.reservation_id,
        payment_time: m.payment_time,
        amount,
        payment_method: m.payment_method,
        status,
    })
}

fn domain_to_active(p: Payment) -> payment::ActiveModel {
    payment::ActiveModel {
        id: if p.id > 0 { Set(p.id) } else { NotSet },
        reservation_id: Set(p.reservation_id),
        payment_time: Set(p.payment_time),
        amount: Set(p.amount.to_string()),
        payment_method: Set(p.payment_method),
        status: Set(p.status.as_str().to_string()),
    }
}

fn models_to_domain(models: Vec<payment::Model>) -> DomainResult<Vec<Payment>> {
    models.into_iter().map(model_to_domain).collect()
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn create(&self, mut p: Payment) -> DomainResult<Payment> {
        debug!("Inserting payment for reservation {}", p.reservation_id);
        p.id = 0;
        let model = domain_to_active(p).insert(&self.db).await.map_err(db_err)?;
        model_to_domain(model)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Payment>> {
        payment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .order_by_asc(payment::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models_to_domain(models)
    }

    async fn find_by_reservation(&self, reservation_id: i64) -> DomainResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .filter(payment::Column::ReservationId.eq(reservation_id))
            .order_by_asc(payment::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models_to_domain(models)
    }

    async fn update(&self, p: Payment) -> DomainResult<Payment> {
        debug!("Updating payment: {}", p.id);
        if payment::Entity::find_by_id(p.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(DomainError::not_found("Payment", p.id));
        }
        let model = domain_to_active(p).update(&self.db).await.map_err(db_err)?;
        model_to_domain(model)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = payment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        ensure_deleted("Payment", id, result.rows_affected)
    }
}
