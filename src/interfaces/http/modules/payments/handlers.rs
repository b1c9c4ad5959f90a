//! Payment HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::PaymentResponse;
use crate::application::Services;
use crate::domain::{CreatePaymentDto, UpdatePaymentDto};
use crate::interfaces::http::common::{api_error, ok, ApiError, ApiJson, ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/api/payments/create",
    tag = "Payments",
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = ApiResponse<PaymentResponse>),
        (status = 422, description = "Validation error or unknown reservation")
    )
)]
pub async fn create_payment(
    State(services): State<Arc<Services>>,
    ApiJson(request): ApiJson<CreatePaymentDto>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentResponse>>), ApiError> {
    let payment = services.payments.save(request).await.map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PaymentResponse::from(payment))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/payments/get",
    tag = "Payments",
    responses(
        (status = 200, description = "All payments", body = ApiResponse<Vec<PaymentResponse>>)
    )
)]
pub async fn list_payments(State(services): State<Arc<Services>>) -> ApiResult<Vec<PaymentResponse>> {
    let payments = services.payments.get_all().await.map_err(api_error)?;
    ok(payments.into_iter().map(PaymentResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "Payments",
    params(("id" = i64, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = ApiResponse<PaymentResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_payment(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> ApiResult<PaymentResponse> {
    let payment = services.payments.get_by_id(id).await.map_err(api_error)?;
    ok(payment.into())
}

#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = "Payments",
    params(("id" = i64, Path, description = "Payment ID")),
    request_body = UpdatePaymentDto,
    responses(
        (status = 200, description = "Payment updated", body = ApiResponse<PaymentResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Disallowed status change"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_payment(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdatePaymentDto>,
) -> ApiResult<PaymentResponse> {
    let payment = services.payments.update(id, request).await.map_err(api_error)?;
    ok(payment.into())
}

#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "Payments",
    params(("id" = i64, Path, description = "Payment ID")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_payment(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services.payments.delete(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
