use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFeedbackDto {
    pub customer_id: i64,
    pub reservation_id: i64,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comments: Option<String>,
}

/// Replacement rating and comments. Author and reservation are fixed.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateFeedbackDto {
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comments: Option<String>,
}
