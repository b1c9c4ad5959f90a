//! SeaORM implementation of FeedbackRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::{db_err, ensure_deleted};
use crate::domain::feedback::{Feedback, FeedbackRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::feedback;

pub struct SeaOrmFeedbackRepository {
    db: DatabaseConnection,
}

impl SeaOrmFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: feedback::Model) -> Feedback {
    Feedback {
        id: m.id,
        customer_id: m.customer_id,
        reservation_id: m.reservation_id,
        rating: m.rating,
        comments: m.comments,
    }
}

fn domain_to_active(f: Feedback) -> feedback::ActiveModel {
    feedback::ActiveModel {
        id: if f.id > 0 { Set(f.id) } else { NotSet },
        customer_id: Set(f.customer_id),
        reservation_id: Set(f.reservation_id),
        rating: Set(f.rating),
        comments: Set(f.comments),
    }
}

#[async_trait]
impl FeedbackRepository for SeaOrmFeedbackRepository {
    async fn create(&self, mut f: Feedback) -> DomainResult<Feedback> {
        debug!("Inserting feedback for reservation {}", f.reservation_id);
        f.id = 0;
        let model = domain_to_active(f).insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Feedback>> {
        let model = feedback::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Feedback>> {
        let models = feedback::Entity::find()
            .order_by_asc(feedback::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_customer(&self, customer_id: i64) -> DomainResult<Vec<Feedback>> {
        let models = feedback::Entity::find()
            .filter(feedback::Column::CustomerId.eq(customer_id))
            .order_by_asc(feedback::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_reservation(&self, reservation_id: i64) -> DomainResult<Vec<Feedback>> {
        let models = feedback::Entity::find()
            .filter(feedback::Column::ReservationId.eq(reservation_id))
            .order_by_asc(feedback::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, f: Feedback) -> DomainResult<Feedback> {
        debug!("Updating feedback: {}", f.id);
        if feedback::Entity::find_by_id(f.id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(DomainError::not_found("Feedback", f.id));
        }
        let model = domain_to_active(f).update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = feedback::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        ensure_deleted("Feedback", id, result.rows_affected)
    }
}
