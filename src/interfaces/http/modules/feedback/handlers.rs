//! Feedback HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::FeedbackResponse;
use crate::application::Services;
use crate::domain::{CreateFeedbackDto, UpdateFeedbackDto};
use crate::interfaces::http::common::{api_error, ok, ApiError, ApiJson, ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/api/feedbacks",
    tag = "Feedback",
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback received", body = ApiResponse<FeedbackResponse>),
        (status = 409, description = "Reservation already rated"),
        (status = 422, description = "Validation error or reservation not owned by customer")
    )
)]
pub async fn create_feedback(
    State(services): State<Arc<Services>>,
    ApiJson(request): ApiJson<CreateFeedbackDto>,
) -> Result<(StatusCode, Json<ApiResponse<FeedbackResponse>>), ApiError> {
    let feedback = services.feedback.save(request).await.map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(FeedbackResponse::from(feedback))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/feedbacks/get",
    tag = "Feedback",
    responses(
        (status = 200, description = "All feedback", body = ApiResponse<Vec<FeedbackResponse>>)
    )
)]
pub async fn list_feedback(State(services): State<Arc<Services>>) -> ApiResult<Vec<FeedbackResponse>> {
    let feedback = services.feedback.get_all().await.map_err(api_error)?;
    ok(feedback.into_iter().map(FeedbackResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/feedbacks/{id}",
    tag = "Feedback",
    params(("id" = i64, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Feedback details", body = ApiResponse<FeedbackResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_feedback(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> ApiResult<FeedbackResponse> {
    let feedback = services.feedback.get_by_id(id).await.map_err(api_error)?;
    ok(feedback.into())
}

#[utoipa::path(
    put,
    path = "/api/feedbacks/{id}",
    tag = "Feedback",
    params(("id" = i64, Path, description = "Feedback ID")),
    request_body = UpdateFeedbackDto,
    responses(
        (status = 200, description = "Feedback updated", body = ApiResponse<FeedbackResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_feedback(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateFeedbackDto>,
) -> ApiResult<FeedbackResponse> {
    let feedback = services.feedback.update(id, request).await.map_err(api_error)?;
    ok(feedback.into())
}

#[utoipa::path(
    delete,
    path = "/api/feedbacks/{id}",
    tag = "Feedback",
    params(("id" = i64, Path, description = "Feedback ID")),
    responses(
        (status = 204, description = "Feedback deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_feedback(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services.feedback.delete(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
