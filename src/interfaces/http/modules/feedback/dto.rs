//! Feedback DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Feedback;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub id: i64,
    pub customer_id: i64,
    pub reservation_id: i64,
    pub rating: i32,
    pub comments: Option<String>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id,
            customer_id: f.customer_id,
            reservation_id: f.reservation_id,
            rating: f.rating,
            comments: f.comments,
        }
    }
}
